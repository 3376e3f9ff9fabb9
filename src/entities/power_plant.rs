//! PowerPlant entity - Impianto di generazione

use crate::dtos::PowerPlantDraft;
use crate::entities::EnergyType;
use crate::repositories::ApiResource;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PowerPlant {
    pub plant_id: i32,
    pub name: String,
    pub location: String,
    /// Capacità installata in MW
    pub capacity: f64,
    pub type_of_energy: EnergyType,
}

impl ApiResource for PowerPlant {
    const COLLECTION: &'static str = "api/powerplants";

    type Id = i32;
    type Draft = PowerPlantDraft;

    fn id(&self) -> i32 {
        self.plant_id
    }
}
