//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" dell'applicazione:
//! - Configurazione
//! - Credenziali API
//! - Gestione errori
//! - Stato applicazione

pub mod config;
pub mod credentials;
pub mod error;
pub mod state;

// Re-exports per facilitare l'import
pub use config::Config;
pub use credentials::{CredentialProvider, EnvCredentialStore, StaticToken};
pub use error::ApiError;
pub use state::AppState;
