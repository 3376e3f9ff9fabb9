//! Enumerazioni - Vocabolari chiusi utilizzati nelle entità

use serde::{Deserialize, Serialize};

// ********************* ENUMERAZIONI UTILI **********************//

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnergyType {
    Solar,
    Wind,
    Hydro,
}

impl EnergyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyType::Solar => "solar",
            EnergyType::Wind => "wind",
            EnergyType::Hydro => "hydro",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceType {
    Preventive,
    Corrective,
    #[serde(rename = "Condition-based")]
    ConditionBased,
    Predictive,
    Scheduled,
    Emergency,
    Proactive,
    Deferred,
}

impl MaintenanceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceType::Preventive => "Preventive",
            MaintenanceType::Corrective => "Corrective",
            MaintenanceType::ConditionBased => "Condition-based",
            MaintenanceType::Predictive => "Predictive",
            MaintenanceType::Scheduled => "Scheduled",
            MaintenanceType::Emergency => "Emergency",
            MaintenanceType::Proactive => "Proactive",
            MaintenanceType::Deferred => "Deferred",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    #[serde(rename = "Solar Panels")]
    SolarPanels,
    #[serde(rename = "Wind Turbines")]
    WindTurbines,
    #[serde(rename = "Hydro Turbines")]
    HydroTurbines,
    #[serde(rename = "Geothermal Systems")]
    GeothermalSystems,
    Batteries,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::SolarPanels => "Solar Panels",
            ResourceKind::WindTurbines => "Wind Turbines",
            ResourceKind::HydroTurbines => "Hydro Turbines",
            ResourceKind::GeothermalSystems => "Geothermal Systems",
            ResourceKind::Batteries => "Batteries",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceCategory {
    Energy,
    Storage,
    Operational,
    Environmental,
    Technological,
}

impl ResourceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceCategory::Energy => "Energy",
            ResourceCategory::Storage => "Storage",
            ResourceCategory::Operational => "Operational",
            ResourceCategory::Environmental => "Environmental",
            ResourceCategory::Technological => "Technological",
        }
    }
}
