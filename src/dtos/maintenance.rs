//! Maintenance DTOs - Draft del form e payload di richiesta

use crate::core::ApiError;
use crate::dtos::fields::{parse_date, require};
use crate::entities::{MaintenanceRecord, MaintenanceType};
use crate::repositories::FormDraft;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MaintenancePayload {
    pub unit_id: i32,
    pub maintenance_type: MaintenanceType,
    pub maintenance_date: NaiveDate,
    pub record_specifications: String,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct MaintenanceDraft {
    pub unit_id: Option<i32>,
    pub maintenance_type: Option<MaintenanceType>,
    pub maintenance_date: String,
    #[validate(length(min = 1, message = "Record specification is required"))]
    pub record_specifications: String,
}

impl FormDraft<MaintenanceRecord> for MaintenanceDraft {
    type Payload = MaintenancePayload;

    fn from_entity(entity: &MaintenanceRecord) -> Self {
        Self {
            unit_id: Some(entity.unit_id),
            maintenance_type: Some(entity.maintenance_type),
            maintenance_date: entity.maintenance_date.to_string(),
            record_specifications: entity.record_specifications.clone(),
        }
    }

    fn to_payload(&self) -> Result<MaintenancePayload, ApiError> {
        self.validate()?;
        Ok(MaintenancePayload {
            unit_id: require("unit", self.unit_id)?,
            maintenance_type: require("maintenance type", self.maintenance_type)?,
            maintenance_date: parse_date("maintenance date", &self.maintenance_date)?,
            record_specifications: self.record_specifications.clone(),
        })
    }
}
