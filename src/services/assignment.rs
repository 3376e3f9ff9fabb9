//! Staff assignment - Roster del personale e selezione per l'assegnazione
//!
//! La modale di assegnazione raccoglie le spunte sul personale ma la
//! conferma non ha (ancora) un endpoint dedicato: la selezione viene
//! loggata e azzerata, la modale si chiude.

use crate::core::ApiError;
use crate::entities::StaffMember;
use crate::repositories::ApiClient;
use tracing::{debug, info, instrument};

/// In-memory roster of the assignable staff.
pub struct StaffRoster {
    client: ApiClient,
    staff: Vec<StaffMember>,
}

impl StaffRoster {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            staff: Vec::new(),
        }
    }

    /// Fetches the staff collection, replacing the cached copy.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> Result<(), ApiError> {
        self.staff = self.client.get_json("users/").await?;
        debug!("Loaded {} staff members", self.staff.len());
        Ok(())
    }

    pub fn staff(&self) -> &[StaffMember] {
        &self.staff
    }
}

/// Checkbox selection collected by the assign modal.
#[derive(Debug, Clone, Default)]
pub struct AssignmentDraft {
    selected: Vec<String>,
}

impl AssignmentDraft {
    /// Toggles one staff member in or out of the selection.
    pub fn toggle(&mut self, staff_name: &str) {
        match self.selected.iter().position(|name| name == staff_name) {
            Some(index) => {
                self.selected.remove(index);
            }
            None => self.selected.push(staff_name.to_string()),
        }
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Confirms the assignment: logged and cleared, nothing else.
    pub fn confirm(&mut self) {
        info!(assigned = ?self.selected, "Assigned workers");
        self.selected.clear();
    }
}
