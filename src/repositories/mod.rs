//! Repositories module - Accesso alle collezioni remote
//!
//! Questo modulo definisce i trait CRUD generici e l'unica implementazione
//! concreta, [`RestCollection`], parametrizzata sul tipo di risorsa: il
//! contratto REST è uniforme, quindi non servono repository per-risorsa.

pub mod rest;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{ApiResource, Collection, Create, Delete, FormDraft, ListAll, PayloadOf, Update};

// Re-esportazione delle struct per facilitare l'import
pub use rest::{ApiClient, RestCollection};
