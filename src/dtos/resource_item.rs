//! ResourceItem DTOs - Draft del form e payload di richiesta

use crate::core::ApiError;
use crate::dtos::fields::{parse_quantity, require};
use crate::entities::{ResourceCategory, ResourceItem, ResourceKind};
use crate::repositories::FormDraft;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ResourceItemPayload {
    pub name: ResourceKind,
    #[serde(rename = "type")]
    pub category: ResourceCategory,
    pub quantity: i64,
}

/// Nome e categoria vengono da tendine a vocabolario chiuso, la quantità
/// da un input numerico libero.
#[derive(Debug, Clone, Default, Validate)]
pub struct ResourceItemDraft {
    pub name: Option<ResourceKind>,
    pub category: Option<ResourceCategory>,
    pub quantity: String,
}

impl FormDraft<ResourceItem> for ResourceItemDraft {
    type Payload = ResourceItemPayload;

    fn from_entity(entity: &ResourceItem) -> Self {
        Self {
            name: Some(entity.name),
            category: Some(entity.category),
            quantity: entity.quantity.to_string(),
        }
    }

    fn to_payload(&self) -> Result<ResourceItemPayload, ApiError> {
        self.validate()?;
        Ok(ResourceItemPayload {
            name: require("resource name", self.name)?,
            category: require("type", self.category)?,
            quantity: parse_quantity("quantity", &self.quantity)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_quantity_string_is_stored_absolute() {
        let draft = ResourceItemDraft {
            name: Some(ResourceKind::Batteries),
            category: Some(ResourceCategory::Storage),
            quantity: "-5".to_string(),
        };
        assert_eq!(draft.to_payload().unwrap().quantity, 5);
    }

    #[test]
    fn payload_uses_the_wire_field_name_for_category() {
        let payload = ResourceItemPayload {
            name: ResourceKind::SolarPanels,
            category: ResourceCategory::Energy,
            quantity: 40,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["name"], "Solar Panels");
        assert_eq!(json["type"], "Energy");
    }
}
