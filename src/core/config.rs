use dotenv::dotenv;
use std::env;

/// URL pubblico del feed del mix di generazione.
pub const DEFAULT_FEED_URL: &str = "https://api.carbonintensity.org.uk/generation";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub api_token: Option<String>,
    pub feed_url: String,
    pub feed_poll_interval_secs: u64,
    pub app_env: String,
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();

        let api_base_url = env::var("API_BASE_URL")
            .map_err(|_| "API_BASE_URL must be set in .env file".to_string())?;

        // Un token assente non è un errore: le richieste partono senza
        // header Authorization e l'eventuale 401 arriva dal backend.
        let api_token = env::var("API_TOKEN").ok().filter(|token| !token.is_empty());

        let feed_url = env::var("FEED_URL").unwrap_or_else(|_| DEFAULT_FEED_URL.to_string());

        let feed_poll_interval_secs = env::var("FEED_POLL_INTERVAL_SECS")
            .unwrap_or_else(|_| "300".to_string())
            .parse::<u64>()
            .map_err(|_| {
                "Invalid FEED_POLL_INTERVAL_SECS: must be a positive number".to_string()
            })?;

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            api_base_url,
            api_token,
            feed_url,
            feed_poll_interval_secs,
            app_env,
        })
    }

    /// Stampa la configurazione (nascondendo i segreti)
    pub fn print_info(&self) {
        println!("   Dashboard Configuration:");
        println!("   Environment: {}", self.app_env);
        println!("   API Base URL: {}", self.api_base_url);
        println!("   Feed URL: {}", self.feed_url);
        println!("   Feed Poll Interval: {}s", self.feed_poll_interval_secs);
        println!(
            "   API Token: {}",
            match &self.api_token {
                Some(token) => Self::mask_token(token),
                None => "not set (requests go out unauthenticated)".to_string(),
            }
        );
    }

    /// Maschera il token per il logging
    fn mask_token(token: &str) -> String {
        if token.chars().count() <= 4 {
            "***".to_string()
        } else {
            let prefix: String = token.chars().take(4).collect();
            format!("{}***", prefix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_token_keeps_only_a_short_prefix() {
        assert_eq!(Config::mask_token("abcdefgh"), "abcd***");
        assert_eq!(Config::mask_token("ab"), "***");
    }
}
