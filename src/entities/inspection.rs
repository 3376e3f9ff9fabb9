//! Inspection entity - Ispezione programmata su una unità

use crate::dtos::InspectionDraft;
use crate::repositories::ApiResource;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// I campi oltre a unità e data sono compilati dal backend man mano che
/// l'ispezione avanza; in creazione non vengono mai inviati.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Inspection {
    pub inspection_id: i32,
    pub unit_id: i32,
    pub inspection_date: NaiveDate,
    pub status: Option<String>,
    pub inspection_details: Option<String>,
    pub comments: Option<String>,
    pub completed_date: Option<NaiveDate>,
    pub inspected_by: Option<String>,
}

impl ApiResource for Inspection {
    const COLLECTION: &'static str = "api/inspections";

    type Id = i32;
    type Draft = InspectionDraft;

    fn id(&self) -> i32 {
        self.inspection_id
    }
}
