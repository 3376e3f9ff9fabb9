//! Inspection DTOs - Draft del form e payload di richiesta

use crate::core::ApiError;
use crate::dtos::fields::{parse_date, require};
use crate::entities::Inspection;
use crate::repositories::FormDraft;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Il form di ispezione raccoglie solo unità e data; il resto dei campi
/// appartiene al ciclo di vita gestito dal backend.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InspectionPayload {
    pub unit_id: i32,
    pub inspection_date: NaiveDate,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct InspectionDraft {
    /// Selezionata dalla tendina delle unità
    pub unit_id: Option<i32>,
    /// Input data in formato ISO `YYYY-MM-DD`
    pub inspection_date: String,
}

impl FormDraft<Inspection> for InspectionDraft {
    type Payload = InspectionPayload;

    fn from_entity(entity: &Inspection) -> Self {
        Self {
            unit_id: Some(entity.unit_id),
            inspection_date: entity.inspection_date.to_string(),
        }
    }

    fn to_payload(&self) -> Result<InspectionPayload, ApiError> {
        self.validate()?;
        Ok(InspectionPayload {
            unit_id: require("unit", self.unit_id)?,
            inspection_date: parse_date("inspection date", &self.inspection_date)?,
        })
    }
}
