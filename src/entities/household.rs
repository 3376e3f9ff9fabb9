//! Household entity - Abitazione monitorata con consumo e generazione solare

use crate::dtos::HouseholdDraft;
use crate::repositories::ApiResource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Household {
    pub id: i32,
    pub name: String,
    /// Consumo in kWh
    pub energy_consumption: f64,
    /// Generazione solare in kWh
    pub solar_generation: f64,
    pub address: String,
    pub city: String,
    pub created_at: DateTime<Utc>,
}

impl ApiResource for Household {
    const COLLECTION: &'static str = "api/households";

    type Id = i32;
    type Draft = HouseholdDraft;

    fn id(&self) -> i32 {
        self.id
    }
}
