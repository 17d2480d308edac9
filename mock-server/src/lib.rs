//! In-memory `/api/persons` backend used for local runs and tests.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};
use uuid::Uuid;

pub mod error;

use error::AppError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub number: String,
}

#[derive(Deserialize)]
pub struct NewContact {
    pub name: String,
    pub number: String,
}

impl NewContact {
    fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::MissingName);
        }
        if self.number.trim().is_empty() {
            return Err(AppError::MissingNumber);
        }
        Ok(())
    }
}

/// Contacts in insertion order.
pub type Db = Arc<RwLock<Vec<Contact>>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router whose store starts with `contacts`.
pub fn app_with(contacts: Vec<Contact>) -> Router {
    let db: Db = Arc::new(RwLock::new(contacts));
    Router::new()
        .route("/api/persons", get(list_contacts).post(create_contact))
        .route(
            "/api/persons/{id}",
            get(get_contact).put(update_contact).delete(delete_contact),
        )
        .with_state(db)
}

/// The record the phonebook front-end has always shipped with.
pub fn seed() -> Vec<Contact> {
    vec![Contact {
        id: Uuid::new_v4().to_string(),
        name: "Arto Hellas".to_string(),
        number: "555-555-5555".to_string(),
    }]
}

pub async fn serve(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!("persons API listening on {addr}");
    }
    axum::serve(listener, router).await
}

async fn list_contacts(State(db): State<Db>) -> Json<Vec<Contact>> {
    Json(db.read().await.clone())
}

async fn create_contact(
    State(db): State<Db>,
    Json(input): Json<NewContact>,
) -> Result<(StatusCode, Json<Contact>), AppError> {
    input.validate()?;
    let contact = Contact {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        number: input.number,
    };
    debug!(id = %contact.id, "contact created");
    db.write().await.push(contact.clone());
    Ok((StatusCode::CREATED, Json(contact)))
}

async fn get_contact(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Contact>, AppError> {
    let contacts = db.read().await;
    contacts
        .iter()
        .find(|c| c.id == id)
        .cloned()
        .map(Json)
        .ok_or(AppError::NotFound(id))
}

async fn update_contact(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<NewContact>,
) -> Result<Json<Contact>, AppError> {
    input.validate()?;
    let mut contacts = db.write().await;
    let contact = contacts
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| AppError::NotFound(id.clone()))?;
    contact.name = input.name;
    contact.number = input.number;
    debug!(%id, "contact replaced");
    Ok(Json(contact.clone()))
}

async fn delete_contact(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut contacts = db.write().await;
    let index = contacts
        .iter()
        .position(|c| c.id == id)
        .ok_or_else(|| AppError::NotFound(id.clone()))?;
    contacts.remove(index);
    debug!(%id, "contact deleted");
    Ok(StatusCode::NO_CONTENT)
}
