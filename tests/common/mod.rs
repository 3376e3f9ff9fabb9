//! Helper condivisi per i test di integrazione
//!
//! Avvia un backend REST finto in-process su una porta effimera: archivio
//! JSON in memoria, id progressivi assegnati lato server, controllo del
//! bearer token e iniezione di guasti.

// non tutti i binari di test usano tutti gli helper
#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, put};
use axum::{Json, Router};
use greengrid::core::StaticToken;
use greengrid::repositories::ApiClient;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub const TEST_TOKEN: &str = "il-token-di-test";

/// Backend finto: una mappa collezione -> righe JSON.
#[derive(Clone, Default)]
pub struct MockBackend {
    collections: Arc<Mutex<HashMap<String, Vec<Value>>>>,
    next_id: Arc<Mutex<i32>>,
    required_token: Arc<Mutex<Option<String>>>,
    fail_all: Arc<AtomicBool>,
    malformed_lists: Arc<AtomicBool>,
    requests: Arc<Mutex<Vec<String>>>,
    last_write_body: Arc<Mutex<Option<Value>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            next_id: Arc::new(Mutex::new(100)),
            ..Default::default()
        }
    }

    pub fn seed(&self, collection: &str, rows: Vec<Value>) {
        self.collections
            .lock()
            .unwrap()
            .insert(collection.to_string(), rows);
    }

    pub fn rows(&self, collection: &str) -> Vec<Value> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Richiede `Authorization: Bearer <token>` su ogni chiamata.
    pub fn require_token(&self, token: &str) {
        *self.required_token.lock().unwrap() = Some(token.to_string());
    }

    /// Ogni chiamata risponde 500 finché non viene riabilitato.
    pub fn set_fail_all(&self, fail: bool) {
        self.fail_all.store(fail, Ordering::SeqCst);
    }

    /// Le GET di lista rispondono un oggetto invece di un array.
    pub fn set_malformed_lists(&self, malformed: bool) {
        self.malformed_lists.store(malformed, Ordering::SeqCst);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_write_body(&self) -> Option<Value> {
        self.last_write_body.lock().unwrap().clone()
    }

    fn record(&self, method: &str, path: String) {
        self.requests.lock().unwrap().push(format!("{} {}", method, path));
    }

    fn authorized(&self, headers: &HeaderMap) -> bool {
        match self.required_token.lock().unwrap().as_ref() {
            Some(token) => headers
                .get("authorization")
                .and_then(|value| value.to_str().ok())
                .map(|value| value == format!("Bearer {}", token))
                .unwrap_or(false),
            None => true,
        }
    }

    fn assign_id(&self) -> i32 {
        let mut next_id = self.next_id.lock().unwrap();
        let id = *next_id;
        *next_id += 1;
        id
    }
}

/// Nome del campo id di ogni collezione (lo assegna il backend).
fn id_field(collection: &str) -> &'static str {
    match collection {
        "inspections" => "inspection_id",
        "maintenance" => "record_id",
        "powerplants" => "plant_id",
        _ => "id",
    }
}

async fn list_rows(
    State(backend): State<MockBackend>,
    Path(collection): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    backend.record("GET", format!("/api/{}/", collection));
    if backend.fail_all.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    if !backend.authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    if backend.malformed_lists.load(Ordering::SeqCst) {
        return Ok(Json(json!({ "detail": "not a list" })));
    }
    Ok(Json(Value::Array(backend.rows(&collection))))
}

async fn create_row(
    State(backend): State<MockBackend>,
    Path(collection): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    backend.record("POST", format!("/api/{}/", collection));
    if backend.fail_all.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    if !backend.authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    *backend.last_write_body.lock().unwrap() = Some(body.clone());

    let mut row = body;
    let object = row.as_object_mut().ok_or(StatusCode::BAD_REQUEST)?;
    object.insert(
        id_field(&collection).to_string(),
        json!(backend.assign_id()),
    );
    // campi assegnati dal server alla creazione
    if collection == "households" {
        object.insert("created_at".to_string(), json!("2024-05-01T08:00:00Z"));
    }

    backend
        .collections
        .lock()
        .unwrap()
        .entry(collection)
        .or_default()
        .push(row.clone());
    Ok((StatusCode::CREATED, Json(row)))
}

async fn update_row(
    State(backend): State<MockBackend>,
    Path((collection, id)): Path<(String, i32)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    backend.record("PUT", format!("/api/{}/{}/", collection, id));
    if backend.fail_all.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    if !backend.authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    *backend.last_write_body.lock().unwrap() = Some(body.clone());

    let mut collections = backend.collections.lock().unwrap();
    let rows = collections.get_mut(&collection).ok_or(StatusCode::NOT_FOUND)?;
    let field = id_field(&collection);
    let row = rows
        .iter_mut()
        .find(|row| row[field] == json!(id))
        .ok_or(StatusCode::NOT_FOUND)?;

    // aggiorna solo i campi presenti nel body, il resto resta com'è
    let patch = body.as_object().ok_or(StatusCode::BAD_REQUEST)?;
    let object = row.as_object_mut().ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;
    for (key, value) in patch {
        object.insert(key.clone(), value.clone());
    }
    Ok(Json(row.clone()))
}

async fn delete_row(
    State(backend): State<MockBackend>,
    Path((collection, id)): Path<(String, i32)>,
    headers: HeaderMap,
) -> Result<StatusCode, StatusCode> {
    backend.record("DELETE", format!("/api/{}/{}", collection, id));
    if backend.fail_all.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    if !backend.authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let mut collections = backend.collections.lock().unwrap();
    let rows = collections.get_mut(&collection).ok_or(StatusCode::NOT_FOUND)?;
    let field = id_field(&collection);
    let before = rows.len();
    rows.retain(|row| row[field] != json!(id));
    if rows.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn list_staff(
    State(backend): State<MockBackend>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    backend.record("GET", "/users/".to_string());
    if !backend.authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(Value::Array(backend.rows("users"))))
}

/// Avvia il backend finto e ritorna il suo base URL.
pub async fn spawn_backend(backend: MockBackend) -> String {
    let app = Router::new()
        .route("/api/{collection}/", get(list_rows).post(create_row))
        .route("/api/{collection}/{id}/", put(update_row))
        .route("/api/{collection}/{id}", delete(delete_row))
        .route("/users/", get(list_staff))
        .with_state(backend);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Base URL che rifiuta la connessione (porta effimera già richiusa).
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Client con il token di test iniettato.
pub fn client_for(base_url: &str) -> ApiClient {
    ApiClient::new(
        base_url,
        Arc::new(StaticToken::new(Some(TEST_TOKEN.to_string()))),
    )
}

/// Client senza credenziale: nessun header Authorization.
pub fn anonymous_client_for(base_url: &str) -> ApiClient {
    ApiClient::new(base_url, Arc::new(StaticToken::new(None)))
}

pub fn household_json(id: i32, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "energy_consumption": 320.5,
        "solar_generation": 410.0,
        "address": "Via Roma 1",
        "city": "Torino",
        "created_at": "2024-01-15T09:30:00Z",
    })
}

pub fn resource_json(id: i32, quantity: i64) -> Value {
    json!({
        "id": id,
        "name": "Batteries",
        "type": "Storage",
        "quantity": quantity,
    })
}

pub fn unit_json(id: i32, name: &str) -> Value {
    json!({ "unit_id": id, "unit_name": name })
}

pub fn inspection_json(id: i32, unit_id: i32, date: &str) -> Value {
    json!({
        "inspection_id": id,
        "unit_id": unit_id,
        "inspection_date": date,
        "status": "Completed",
        "inspection_details": "Routine check",
        "comments": null,
        "completed_date": null,
        "inspected_by": "A. Volta",
    })
}

pub fn maintenance_json(id: i32, unit_id: i32, date: &str) -> Value {
    json!({
        "record_id": id,
        "unit_id": unit_id,
        "maintenance_type": "Preventive",
        "maintenance_date": date,
        "record_specifications": "Blade check",
        "status": "Scheduled",
        "assigned_to": null,
        "completed_date": null,
    })
}

pub fn power_plant_json(id: i32, name: &str) -> Value {
    json!({
        "plant_id": id,
        "name": name,
        "location": "location2",
        "capacity": 120.0,
        "type_of_energy": "hydro",
    })
}

pub fn staff_json(id: i32, name: &str, role: &str) -> Value {
    json!({ "staff_id": id, "staff_name": name, "role": role })
}
