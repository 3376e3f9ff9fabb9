//! RestCollection - Repository generico sul contratto REST uniforme
//!
//! Tutte le collezioni espongono le stesse quattro operazioni:
//! `GET <collection>/`, `POST <collection>/`, `PUT <collection>/<id>/`,
//! `DELETE <collection>/<id>` (quest'ultima senza slash finale).

use crate::core::{ApiError, CredentialProvider};
use crate::repositories::traits::{ApiResource, Create, Delete, ListAll, PayloadOf, Update};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// Quanto corpo di risposta riportare nel messaggio di errore.
const ERROR_BODY_LIMIT: usize = 200;

/// Shared HTTP client bound to one API base URL and one credential source.
///
/// The bearer token is attached to every request when present and simply
/// omitted when absent; the client never inspects it.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, credentials: Arc<dyn CredentialProvider>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            credentials,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.credentials.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// GET `path` and deserialize the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "GET");
        let response = self.with_auth(self.http.get(self.url(path))).send().await?;
        let response = Self::check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::malformed(err.to_string()))
    }

    /// Send `body` as JSON to `path`; the response body is discarded.
    pub async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        debug!(%method, path, "sending JSON body");
        let request = self.http.request(method, self.url(path)).json(body);
        let response = self.with_auth(request).send().await?;
        Self::check_status(response).await.map(|_| ())
    }

    /// DELETE `path`; no body is expected back.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        debug!(path, "DELETE");
        let response = self.with_auth(self.http.delete(self.url(path))).send().await?;
        Self::check_status(response).await.map(|_| ())
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let mut message = response.text().await.unwrap_or_default();
        if message.is_empty() {
            message = status
                .canonical_reason()
                .unwrap_or("request rejected")
                .to_string();
        } else if message.len() > ERROR_BODY_LIMIT {
            message = message
                .chars()
                .take(ERROR_BODY_LIMIT)
                .collect::<String>();
        }
        Err(ApiError::rejection(status.as_u16(), message))
    }
}

/// REST-backed repository for one resource collection.
pub struct RestCollection<R: ApiResource> {
    client: ApiClient,
    _resource: PhantomData<R>,
}

impl<R: ApiResource> RestCollection<R> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }
}

impl<R: ApiResource> ListAll<R> for RestCollection<R> {
    async fn list_all(&self) -> Result<Vec<R>, ApiError> {
        self.client
            .get_json(&format!("{}/", R::COLLECTION))
            .await
    }
}

impl<R: ApiResource> Create<PayloadOf<R>> for RestCollection<R> {
    async fn create(&self, data: &PayloadOf<R>) -> Result<(), ApiError> {
        self.client
            .send_json(Method::POST, &format!("{}/", R::COLLECTION), data)
            .await
    }
}

impl<R: ApiResource> Update<PayloadOf<R>, R::Id> for RestCollection<R> {
    async fn update(&self, id: &R::Id, data: &PayloadOf<R>) -> Result<(), ApiError> {
        self.client
            .send_json(Method::PUT, &format!("{}/{}/", R::COLLECTION, id), data)
            .await
    }
}

impl<R: ApiResource> Delete<R::Id> for RestCollection<R> {
    async fn delete(&self, id: &R::Id) -> Result<(), ApiError> {
        // il percorso di delete è l'unico senza slash finale
        self.client
            .delete(&format!("{}/{}", R::COLLECTION, id))
            .await
    }
}
