//! Generation feed - Monitoraggio del mix energetico in tempo reale
//!
//! Interroga il feed pubblico a intervalli fissi (default 300 secondi,
//! nessun backoff né jitter) e conserva gli ultimi cinque punti per il
//! grafico della home page. Un poll fallito segna l'errore ma il tick
//! continua: il feed si riprende alla prima risposta buona.

use crate::core::ApiError;
use crate::dtos::{FeedEnvelope, MixPoint};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::{debug, info, warn};

/// Configurazione del monitor del feed di generazione.
#[derive(Debug, Clone)]
pub struct GenerationFeedConfig {
    /// Endpoint del feed (nessuna autenticazione)
    pub url: String,
    /// Intervallo di polling in secondi
    pub interval_secs: u64,
    /// Quanti punti tenere in memoria per il grafico
    pub history_len: usize,
}

impl Default for GenerationFeedConfig {
    fn default() -> Self {
        Self {
            url: crate::core::config::DEFAULT_FEED_URL.to_string(),
            interval_secs: 300,
            history_len: 5,
        }
    }
}

/// Rolling window of the latest generation-mix points.
pub struct GenerationFeed {
    http: reqwest::Client,
    config: GenerationFeedConfig,
    points: Vec<MixPoint>,
    error_message: Option<String>,
}

impl GenerationFeed {
    pub fn new(config: GenerationFeedConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            points: Vec::new(),
            error_message: None,
        }
    }

    /// Chart points, oldest first, at most `history_len` of them.
    pub fn points(&self) -> &[MixPoint] {
        &self.points
    }

    /// Present iff the last poll failed.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// One poll: fetch, parse, append, truncate the history window.
    pub async fn poll_once(&mut self) {
        match self.fetch().await {
            Ok(point) => {
                debug!(label = %point.label, "Feed point received");
                self.points.push(point);
                let len = self.points.len();
                if len > self.config.history_len {
                    self.points.drain(..len - self.config.history_len);
                }
                self.error_message = None;
            }
            Err(err) => {
                // la storia resta: il grafico continua a mostrare i punti noti
                warn!("Feed poll failed: {}", err);
                self.error_message = Some(err.to_string());
            }
        }
    }

    async fn fetch(&self) -> Result<MixPoint, ApiError> {
        let response = self.http.get(&self.config.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::rejection(
                status.as_u16(),
                status.canonical_reason().unwrap_or("feed unavailable"),
            ));
        }
        let envelope = response
            .json::<FeedEnvelope>()
            .await
            .map_err(|err| ApiError::malformed(err.to_string()))?;
        Ok(MixPoint::from_snapshot(&envelope.data))
    }

    /// Fixed-interval loop; first poll fires immediately, then every tick.
    pub async fn run(mut self) {
        info!(
            url = %self.config.url,
            interval_secs = self.config.interval_secs,
            "Generation feed monitor started"
        );
        let mut ticker = time::interval(Duration::from_secs(self.config.interval_secs.max(1)));
        loop {
            ticker.tick().await;
            self.poll_once().await;
            if let Some(latest) = self.points.last() {
                info!(
                    label = %latest.label,
                    wind = latest.wind,
                    solar = latest.solar,
                    gas = latest.gas,
                    "Generation mix"
                );
            }
        }
    }
}

/// Avvia il monitor in un task dedicato.
pub fn spawn_generation_monitor(config: GenerationFeedConfig) -> JoinHandle<()> {
    tokio::spawn(GenerationFeed::new(config).run())
}
