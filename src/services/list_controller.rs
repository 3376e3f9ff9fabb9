//! List controller - Macchina a stati generica di una collezione REST
//!
//! Un controller per pagina: possiede le righe della tabella, lo stato di
//! caricamento e il draft del form. Tutte le pagine (abitazioni, ispezioni,
//! manutenzioni, impianti, scorte) sono istanze dello stesso tipo generico.

use crate::core::ApiError;
use crate::repositories::{ApiResource, Collection, FormDraft, RestCollection};
use tracing::{debug, info, instrument, warn};

/// Rendering state of a resource list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    /// Created, never loaded.
    Idle,
    /// A remote operation is in flight.
    Loading,
    /// `items` mirrors the last successful fetch.
    Ready,
    /// The last operation failed; `error_message` carries the reason.
    Error,
}

/// State machine owning the list of one resource type.
///
/// `items` is only ever replaced wholesale by a successful fetch: the
/// response of a write is never trusted for display, every mutation
/// resynchronizes with a full reload. A failed load keeps the stale rows
/// visible rather than blanking the table.
pub struct ListController<R: ApiResource, S: Collection<R> = RestCollection<R>> {
    repo: S,
    items: Vec<R>,
    status: ListStatus,
    error_message: Option<String>,
    editing_id: Option<R::Id>,
    form_draft: Option<R::Draft>,
}

impl<R: ApiResource, S: Collection<R>> ListController<R, S> {
    pub fn new(repo: S) -> Self {
        Self {
            repo,
            items: Vec::new(),
            status: ListStatus::Idle,
            error_message: None,
            editing_id: None,
            form_draft: None,
        }
    }

    /// Rows of the last successful fetch, in server response order.
    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn status(&self) -> ListStatus {
        self.status
    }

    /// Present iff `status == Error`.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Record currently open for edit, if any.
    pub fn editing_id(&self) -> Option<&R::Id> {
        self.editing_id.as_ref()
    }

    pub fn form_draft(&self) -> Option<&R::Draft> {
        self.form_draft.as_ref()
    }

    /// Mutable draft for the presentation layer to bind its inputs to.
    pub fn form_draft_mut(&mut self) -> Option<&mut R::Draft> {
        self.form_draft.as_mut()
    }

    /// Opens an empty creation form.
    pub fn open_create(&mut self) {
        self.editing_id = None;
        self.form_draft = Some(R::Draft::default());
    }

    /// Replaces `items` with the full remote collection.
    ///
    /// Chiamate sovrapposte non vengono coalizzate: vince l'ultima che
    /// completa, tolleranza accettata per refresh manuali su collezioni
    /// piccole.
    #[instrument(skip(self), fields(collection = R::COLLECTION))]
    pub async fn load(&mut self) {
        debug!("Loading collection");
        self.status = ListStatus::Loading;
        self.error_message = None;
        match self.repo.list_all().await {
            Ok(items) => {
                info!("Loaded {} records", items.len());
                self.items = items;
                self.status = ListStatus::Ready;
            }
            Err(err) => {
                // le righe vecchie restano visibili, meglio di una tabella vuota
                warn!("Load failed: {}", err);
                self.fail(err);
            }
        }
    }

    /// Validates the draft, creates the record, then resynchronizes.
    #[instrument(skip(self, draft), fields(collection = R::COLLECTION))]
    pub async fn create(&mut self, draft: R::Draft) {
        debug!("Creating record");
        self.status = ListStatus::Loading;
        self.error_message = None;

        // 1. Validare e convertire il draft in payload tipizzato
        let payload = match draft.to_payload() {
            Ok(payload) => payload,
            Err(err) => {
                warn!("Draft rejected: {}", err);
                self.form_draft = Some(draft);
                self.fail(err);
                return;
            }
        };

        // 2. Inviare la POST; la risposta non fa fede, si ricarica tutto
        match self.repo.create(&payload).await {
            Ok(()) => {
                info!("Record created, resynchronizing");
                self.load().await;
                // 3. Solo a scrittura confermata il form si chiude
                self.form_draft = None;
            }
            Err(err) => {
                warn!("Create failed: {}", err);
                self.form_draft = Some(draft);
                self.fail(err);
            }
        }
    }

    /// Same contract as [`create`](Self::create), targeted at an existing id.
    ///
    /// The id must belong to the last-loaded `items`; otherwise the edit is
    /// stale and fails locally without touching the network.
    #[instrument(skip(self, draft), fields(collection = R::COLLECTION, id = %id))]
    pub async fn update(&mut self, id: R::Id, draft: R::Draft) {
        debug!("Updating record");
        self.status = ListStatus::Loading;
        self.error_message = None;

        if !self.items.iter().any(|record| record.id() == id) {
            let err = ApiError::stale_edit(&id);
            warn!("{}", err);
            self.form_draft = Some(draft);
            self.fail(err);
            return;
        }

        let payload = match draft.to_payload() {
            Ok(payload) => payload,
            Err(err) => {
                warn!("Draft rejected: {}", err);
                self.form_draft = Some(draft);
                self.fail(err);
                return;
            }
        };

        match self.repo.update(&id, &payload).await {
            Ok(()) => {
                info!("Record updated, resynchronizing");
                self.load().await;
                self.form_draft = None;
                self.editing_id = None;
            }
            Err(err) => {
                warn!("Update failed: {}", err);
                self.form_draft = Some(draft);
                self.fail(err);
            }
        }
    }

    /// Deletes the record and resynchronizes; no optimistic removal.
    #[instrument(skip(self), fields(collection = R::COLLECTION, id = %id))]
    pub async fn remove(&mut self, id: R::Id) {
        debug!("Deleting record");
        self.status = ListStatus::Loading;
        self.error_message = None;
        match self.repo.delete(&id).await {
            Ok(()) => {
                // la riga sparisce solo dopo la conferma del backend
                info!("Record deleted, resynchronizing");
                self.load().await;
            }
            Err(err) => {
                warn!("Delete failed: {}", err);
                self.fail(err);
            }
        }
    }

    /// Copies the matching record into the form draft and marks it as the
    /// edit target. Silent no-op if the id is not in the loaded list.
    pub fn begin_edit(&mut self, id: &R::Id) {
        let Some(record) = self.items.iter().find(|record| record.id() == *id) else {
            debug!(collection = R::COLLECTION, %id, "Edit target not in list, ignoring");
            return;
        };
        self.form_draft = Some(R::Draft::from_entity(record));
        self.editing_id = Some(id.clone());
    }

    /// Discards the draft and the edit target; no remote effect.
    pub fn cancel_edit(&mut self) {
        self.form_draft = None;
        self.editing_id = None;
    }

    /// Closes the creation form discarding the draft; same effect as
    /// [`cancel_edit`](Self::cancel_edit) since the form is shared.
    pub fn cancel_create(&mut self) {
        self.cancel_edit();
    }

    fn fail(&mut self, err: ApiError) {
        self.error_message = Some(err.to_string());
        self.status = ListStatus::Error;
    }
}
