//! Common repository traits
//!
//! This module defines generic interfaces for the remote collection
//! operations, plus the descriptor traits binding an entity type to its
//! collection path and form draft.

use crate::core::ApiError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Display;
use validator::Validate;

/// Descriptor binding an entity type to its remote collection.
///
/// Implemented by every record type managed through a list controller; the
/// lookup-only collections (units, staff) do not implement it.
pub trait ApiResource: DeserializeOwned + Serialize + Clone + Send + Sync + 'static {
    /// Collection path under the API base URL, without trailing slash
    /// (e.g. `api/households`).
    const COLLECTION: &'static str;

    /// Type of the primary key (assigned by the remote store, never by the
    /// client).
    type Id: Display + PartialEq + Clone + Send + Sync;

    /// Form draft bound to the create/edit inputs for this resource.
    type Draft: FormDraft<Self>;

    /// Primary key of this record.
    fn id(&self) -> Self::Id;
}

/// In-progress form state for a resource, convertible to a request payload.
///
/// Text and numeric inputs are held as the strings the form fields contain;
/// select inputs are held as typed options.
pub trait FormDraft<R>: Validate + Clone + Default + Send + Sync {
    /// JSON body sent on create and on update (the two share one shape and
    /// never carry an id).
    type Payload: Serialize + Send + Sync;

    /// Copies a record's editable fields back into form shape.
    fn from_entity(entity: &R) -> Self;

    /// Validates the draft and converts the form inputs into a typed payload.
    ///
    /// Numeric strings are parsed defensively (quantities are clamped to
    /// their absolute value); any failure maps to [`ApiError::Validation`]
    /// and no request is issued.
    fn to_payload(&self) -> Result<Self::Payload, ApiError>;
}

/// Shorthand for the payload type of a resource's draft.
pub type PayloadOf<R> = <<R as ApiResource>::Draft as FormDraft<R>>::Payload;

/// Trait for fetching the full content of a remote collection
///
/// # Type Parameters
/// * `Entity` - Type of the listed entities
pub trait ListAll<Entity> {
    /// Fetches every record of the collection
    ///
    /// # Returns
    /// * `Ok(Vec<Entity>)` - All records, in the order the remote store
    ///   returned them
    /// * `Err(ApiError)` - Error during the fetch
    async fn list_all(&self) -> Result<Vec<Entity>, ApiError>;
}

/// Trait for creating new entities in the remote collection
///
/// # Type Parameters
/// * `Payload` - JSON body for creation (without id, assigned remotely)
pub trait Create<Payload> {
    /// Creates a new entity in the remote collection
    ///
    /// # Arguments
    /// * `data` - Payload containing the data for creation
    ///
    /// # Returns
    /// * `Ok(())` - Creation confirmed; the echoed entity is discarded,
    ///   callers re-fetch the collection instead
    /// * `Err(ApiError)` - Error during the request
    async fn create(&self, data: &Payload) -> Result<(), ApiError>;
}

/// Trait for updating existing entities
///
/// # Type Parameters
/// * `Payload` - JSON body for the update (same shape as creation)
/// * `Id` - Type of the primary key
pub trait Update<Payload, Id> {
    /// Updates an existing entity in the remote collection
    ///
    /// # Arguments
    /// * `id` - Primary key of the entity to update
    /// * `data` - Payload containing the new field values
    ///
    /// # Returns
    /// * `Ok(())` - Update confirmed; callers re-fetch the collection
    /// * `Err(ApiError)` - Error during the request (e.g. entity not found)
    async fn update(&self, id: &Id, data: &Payload) -> Result<(), ApiError>;
}

/// Trait for deleting entities
///
/// # Type Parameters
/// * `Id` - Type of the primary key
pub trait Delete<Id> {
    /// Deletes an entity from the remote collection
    ///
    /// # Arguments
    /// * `id` - Primary key of the entity to delete
    ///
    /// # Returns
    /// * `Ok(())` - Deletion confirmed by the remote store
    /// * `Err(ApiError)` - Error during the request
    async fn delete(&self, id: &Id) -> Result<(), ApiError>;
}

/// Everything a list controller needs from one collection.
pub trait Collection<R: ApiResource>:
    ListAll<R> + Create<PayloadOf<R>> + Update<PayloadOf<R>, R::Id> + Delete<R::Id>
{
}

impl<T, R: ApiResource> Collection<R> for T where
    T: ListAll<R> + Create<PayloadOf<R>> + Update<PayloadOf<R>, R::Id> + Delete<R::Id>
{
}
