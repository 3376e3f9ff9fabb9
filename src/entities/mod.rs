//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene tutte le entità (records) così come le espone il
//! backend REST. Ogni entity corrisponde a una collezione remota.

pub mod enums;
pub mod household;
pub mod inspection;
pub mod maintenance;
pub mod power_plant;
pub mod resource_item;
pub mod staff;
pub mod unit;

// Re-exports per facilitare l'import
pub use enums::{EnergyType, MaintenanceType, ResourceCategory, ResourceKind};
pub use household::Household;
pub use inspection::Inspection;
pub use maintenance::{AssignedStaff, MaintenanceRecord};
pub use power_plant::PowerPlant;
pub use resource_item::ResourceItem;
pub use staff::StaffMember;
pub use unit::Unit;
