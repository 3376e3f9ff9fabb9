//! Generation DTOs - Forma di scambio del feed del mix energetico
//!
//! Il feed è un collaboratore esterno pubblico: niente token, e gli
//! orari arrivano come stringhe `...THH:MMZ` da cui si estrae solo
//! l'etichetta per l'asse temporale del grafico.

use serde::{Deserialize, Serialize};

/// One fuel's share of the current generation mix, as the feed reports it.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FuelShare {
    pub fuel: String,
    pub perc: f64,
}

/// Half-hour settlement window of the feed.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GenerationSnapshot {
    pub from: String,
    pub to: String,
    pub generationmix: Vec<FuelShare>,
}

/// Top-level envelope of the feed response.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FeedEnvelope {
    pub data: GenerationSnapshot,
}

/// One chart point: `HH:MM` label plus the share of each tracked fuel.
#[derive(Debug, Clone, PartialEq)]
pub struct MixPoint {
    pub label: String,
    pub solar: f64,
    pub wind: f64,
    pub hydro: f64,
    pub biomass: f64,
    pub nuclear: f64,
    pub gas: f64,
}

impl MixPoint {
    /// Projects a feed snapshot onto the six tracked fuels; a fuel missing
    /// from the mix counts as `0.0`.
    pub fn from_snapshot(snapshot: &GenerationSnapshot) -> Self {
        Self {
            label: time_label(&snapshot.from),
            solar: share_of(snapshot, "solar"),
            wind: share_of(snapshot, "wind"),
            hydro: share_of(snapshot, "hydro"),
            biomass: share_of(snapshot, "biomass"),
            nuclear: share_of(snapshot, "nuclear"),
            gas: share_of(snapshot, "gas"),
        }
    }
}

fn share_of(snapshot: &GenerationSnapshot, fuel: &str) -> f64 {
    snapshot
        .generationmix
        .iter()
        .find(|share| share.fuel == fuel)
        .map(|share| share.perc)
        .unwrap_or(0.0)
}

/// `"2024-06-01T12:30Z"` → `"12:30"`; anything unparseable is kept whole
/// rather than dropped, so the chart still gets a label.
fn time_label(timestamp: &str) -> String {
    timestamp
        .split('T')
        .nth(1)
        .map(|time| time.trim_end_matches('Z').to_string())
        .unwrap_or_else(|| timestamp.to_string())
}
