//! Household DTOs - Draft del form e payload di richiesta

use crate::core::ApiError;
use crate::dtos::fields::parse_number;
use crate::entities::Household;
use crate::repositories::FormDraft;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Corpo JSON inviato su create e update (lo stesso per entrambe).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HouseholdPayload {
    pub name: String,
    pub energy_consumption: f64,
    pub solar_generation: f64,
    pub address: String,
    pub city: String,
}

/// Stato del form, campo per campo come lo tengono gli input.
#[derive(Debug, Clone, Default, Validate)]
pub struct HouseholdDraft {
    #[validate(length(min = 1, message = "Household name is required"))]
    pub name: String,
    pub energy_consumption: String,
    pub solar_generation: String,
    pub address: String,
    pub city: String,
}

impl FormDraft<Household> for HouseholdDraft {
    type Payload = HouseholdPayload;

    fn from_entity(entity: &Household) -> Self {
        Self {
            name: entity.name.clone(),
            energy_consumption: entity.energy_consumption.to_string(),
            solar_generation: entity.solar_generation.to_string(),
            address: entity.address.clone(),
            city: entity.city.clone(),
        }
    }

    fn to_payload(&self) -> Result<HouseholdPayload, ApiError> {
        self.validate()?;
        Ok(HouseholdPayload {
            name: self.name.clone(),
            energy_consumption: parse_number("energy consumption", &self.energy_consumption)?,
            solar_generation: parse_number("solar generation", &self.solar_generation)?,
            address: self.address.clone(),
            city: self.city.clone(),
        })
    }
}
