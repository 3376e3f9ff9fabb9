//! ResourceItem entity - Scorta di materiale a magazzino

use crate::dtos::ResourceItemDraft;
use crate::entities::{ResourceCategory, ResourceKind};
use crate::repositories::ApiResource;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ResourceItem {
    pub id: i32,
    pub name: ResourceKind,
    #[serde(rename = "type")]
    pub category: ResourceCategory,
    /// Mai negativa: i draft vengono coerciti in valore assoluto
    pub quantity: i64,
}

impl ApiResource for ResourceItem {
    const COLLECTION: &'static str = "api/resources";

    type Id = i32;
    type Draft = ResourceItemDraft;

    fn id(&self) -> i32 {
        self.id
    }
}
