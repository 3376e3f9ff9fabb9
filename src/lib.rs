//! Greengrid library - espone i moduli principali per i test e il runtime

pub mod core;
pub mod dtos;
pub mod entities;
pub mod reports;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{ApiError, AppState, Config, CredentialProvider, StaticToken};
pub use repositories::{ApiClient, RestCollection};
pub use services::{GenerationFeed, GenerationFeedConfig, ListController, ListStatus};
