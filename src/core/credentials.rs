//! Credenziali - Fornitura del bearer token per le richieste API
//!
//! Il token viene passato così com'è: mai decodificato né pre-validato
//! lato client. Se assente la richiesta parte senza header Authorization.

use std::env;

/// Source of the bearer token attached to every API request.
///
/// Injected into the [`ApiClient`](crate::repositories::ApiClient) at
/// construction so that no component reads ambient storage on its own.
pub trait CredentialProvider: Send + Sync {
    /// Current bearer token, or `None` when no credential is configured.
    fn token(&self) -> Option<String>;
}

/// Token fissato alla costruzione (tipicamente preso da [`Config`]).
///
/// [`Config`]: crate::core::Config
pub struct StaticToken {
    token: Option<String>,
}

impl StaticToken {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }
}

impl CredentialProvider for StaticToken {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }
}

/// Rilegge la variabile d'ambiente a ogni richiesta, utile quando il token
/// viene rinnovato da un processo esterno mentre il client è in esecuzione.
pub struct EnvCredentialStore {
    var_name: String,
}

impl EnvCredentialStore {
    pub const DEFAULT_VAR: &'static str = "API_TOKEN";

    pub fn new(var_name: impl Into<String>) -> Self {
        Self {
            var_name: var_name.into(),
        }
    }
}

impl Default for EnvCredentialStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VAR)
    }
}

impl CredentialProvider for EnvCredentialStore {
    fn token(&self) -> Option<String> {
        env::var(&self.var_name).ok().filter(|token| !token.is_empty())
    }
}
