//! Staff entity - Personale assegnabile a ispezioni e manutenzioni
//!
//! Collezione di sola consultazione, usata dalla modale di assegnazione.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StaffMember {
    pub staff_id: Option<i32>,
    pub staff_name: String,
    pub role: String,
}
