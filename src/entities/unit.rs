//! Unit entity - Unità operativa referenziata da ispezioni e manutenzioni
//!
//! Collezione di sola consultazione: niente draft né operazioni di
//! scrittura, serve solo a risolvere i nomi.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Unit {
    pub unit_id: i32,
    pub unit_name: String,
}
