//! DTOs module - Draft dei form e payload di richiesta
//!
//! Questo modulo contiene i tipi usati per la comunicazione col backend.
//! I draft tengono i campi come li tengono gli input del form; i payload
//! sono la forma tipizzata e validata che finisce sul filo.

mod fields;

pub mod generation;
pub mod household;
pub mod inspection;
pub mod maintenance;
pub mod power_plant;
pub mod resource_item;

// Re-exports per facilitare l'import
pub use generation::{FeedEnvelope, FuelShare, GenerationSnapshot, MixPoint};
pub use household::{HouseholdDraft, HouseholdPayload};
pub use inspection::{InspectionDraft, InspectionPayload};
pub use maintenance::{MaintenanceDraft, MaintenancePayload};
pub use power_plant::{PowerPlantDraft, PowerPlantPayload};
pub use resource_item::{ResourceItemDraft, ResourceItemPayload};
