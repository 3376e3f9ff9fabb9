//! Services module - Logica delle pagine del cruscotto
//!
//! Questo modulo organizza i servizi in sotto-moduli separati per una
//! migliore manutenibilità: il controller generico delle liste, il feed del
//! mix di generazione e i servizi di consultazione.

pub mod assignment;
pub mod feed;
pub mod list_controller;
pub mod lookup;

// Re-exports per facilitare l'import
pub use assignment::{AssignmentDraft, StaffRoster};
pub use feed::{GenerationFeed, GenerationFeedConfig, spawn_generation_monitor};
pub use list_controller::{ListController, ListStatus};
pub use lookup::UnitDirectory;
