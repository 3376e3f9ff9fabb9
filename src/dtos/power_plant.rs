//! PowerPlant DTOs - Draft del form e payload di richiesta

use crate::core::ApiError;
use crate::dtos::fields::{parse_magnitude, require};
use crate::entities::{EnergyType, PowerPlant};
use crate::repositories::FormDraft;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PowerPlantPayload {
    pub name: String,
    pub location: String,
    pub capacity: f64,
    pub type_of_energy: EnergyType,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct PowerPlantDraft {
    #[validate(length(min = 1, message = "Plant name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    pub capacity: String,
    pub type_of_energy: Option<EnergyType>,
}

impl FormDraft<PowerPlant> for PowerPlantDraft {
    type Payload = PowerPlantPayload;

    fn from_entity(entity: &PowerPlant) -> Self {
        Self {
            name: entity.name.clone(),
            location: entity.location.clone(),
            capacity: entity.capacity.to_string(),
            type_of_energy: Some(entity.type_of_energy),
        }
    }

    fn to_payload(&self) -> Result<PowerPlantPayload, ApiError> {
        self.validate()?;
        Ok(PowerPlantPayload {
            name: self.name.clone(),
            location: self.location.clone(),
            capacity: parse_magnitude("capacity", &self.capacity)?,
            type_of_energy: require("type of energy", self.type_of_energy)?,
        })
    }
}
