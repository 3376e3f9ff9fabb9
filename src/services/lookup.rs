//! Lookup services - Collezioni di sola consultazione
//!
//! Le pagine di ispezioni e manutenzioni mostrano il nome dell'unità, non
//! l'id: la directory viene caricata una volta al mount e interrogata in
//! memoria.

use crate::core::ApiError;
use crate::entities::Unit;
use crate::repositories::ApiClient;
use tracing::{debug, instrument};

/// In-memory directory of the operating units.
pub struct UnitDirectory {
    client: ApiClient,
    units: Vec<Unit>,
}

impl UnitDirectory {
    /// Nome mostrato quando l'id non risolve.
    pub const UNKNOWN: &'static str = "Unknown";

    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            units: Vec::new(),
        }
    }

    /// Fetches the unit collection, replacing the cached copy.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> Result<(), ApiError> {
        self.units = self.client.get_json("api/units/").await?;
        debug!("Loaded {} units", self.units.len());
        Ok(())
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Resolves a unit id to its display name, `"Unknown"` if absent.
    pub fn unit_name(&self, unit_id: i32) -> &str {
        self.units
            .iter()
            .find(|unit| unit.unit_id == unit_id)
            .map(|unit| unit.unit_name.as_str())
            .unwrap_or(Self::UNKNOWN)
    }
}
