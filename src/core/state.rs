//! Application State - Stato del cruscotto
//!
//! Contiene i cinque controller di lista, le collezioni di consultazione e
//! il client API condiviso da cui tutti dipendono.

use crate::entities::{Household, Inspection, MaintenanceRecord, PowerPlant, ResourceItem};
use crate::repositories::{ApiClient, RestCollection};
use crate::services::{ListController, StaffRoster, UnitDirectory};

/// Stato del cruscotto: un controller per pagina più i lookup condivisi
pub struct AppState {
    /// Controller della lista abitazioni
    pub households: ListController<Household>,

    /// Controller della lista ispezioni
    pub inspections: ListController<Inspection>,

    /// Controller della lista interventi di manutenzione
    pub maintenance: ListController<MaintenanceRecord>,

    /// Controller della lista impianti
    pub power_plants: ListController<PowerPlant>,

    /// Controller della lista scorte
    pub resources: ListController<ResourceItem>,

    /// Directory delle unità per risolvere i nomi
    pub units: UnitDirectory,

    /// Roster del personale per la modale di assegnazione
    pub staff: StaffRoster,
}

impl AppState {
    /// Crea una nuova istanza di AppState inizializzando tutti i controller
    /// con il client API fornito (e quindi con le stesse credenziali).
    ///
    /// # Arguments
    /// * `client` - Client HTTP condiviso, già legato a base URL e token
    ///
    /// # Returns
    /// Nuova istanza di AppState con tutti i controller in stato `Idle`
    pub fn new(client: ApiClient) -> Self {
        Self {
            households: ListController::new(RestCollection::new(client.clone())),
            inspections: ListController::new(RestCollection::new(client.clone())),
            maintenance: ListController::new(RestCollection::new(client.clone())),
            power_plants: ListController::new(RestCollection::new(client.clone())),
            resources: ListController::new(RestCollection::new(client.clone())),
            units: UnitDirectory::new(client.clone()),
            staff: StaffRoster::new(client),
        }
    }
}
