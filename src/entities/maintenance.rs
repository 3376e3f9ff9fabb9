//! Maintenance entity - Intervento di manutenzione su una unità

use crate::dtos::MaintenanceDraft;
use crate::entities::MaintenanceType;
use crate::repositories::ApiResource;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Operatore assegnato a un intervento (valorizzato dal backend).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AssignedStaff {
    pub name: Option<String>,
    pub department: Option<String>,
    pub place: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MaintenanceRecord {
    pub record_id: i32,
    pub unit_id: i32,
    pub maintenance_type: MaintenanceType,
    pub maintenance_date: NaiveDate,
    pub record_specifications: String,
    pub status: Option<String>,
    pub assigned_to: Option<AssignedStaff>,
    pub completed_date: Option<NaiveDate>,
}

impl ApiResource for MaintenanceRecord {
    const COLLECTION: &'static str = "api/maintenance";

    type Id = i32;
    type Draft = MaintenanceDraft;

    fn id(&self) -> i32 {
        self.record_id
    }
}
