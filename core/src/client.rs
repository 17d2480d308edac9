//! Stateless HTTP request builder and response parser for the persons API.
//!
//! # Design
//! `ContactsClient` holds only the collection URL and carries no mutable
//! state between calls. Each of the four operations is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Contact, ContactId, NewContact};

/// Path of the contact collection, relative to the backend's base URL.
pub const PERSONS_PATH: &str = "/api/persons";

/// Synchronous, stateless client for the persons API.
#[derive(Debug, Clone)]
pub struct ContactsClient {
    collection_url: String,
}

impl ContactsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            collection_url: format!("{}{PERSONS_PATH}", base_url.trim_end_matches('/')),
        }
    }

    pub fn build_list_contacts(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url.clone(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_contact(&self, input: &NewContact) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection_url.clone(),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_update_contact(
        &self,
        id: &ContactId,
        input: &NewContact,
    ) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.item_url(id),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_delete_contact(&self, id: &ContactId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_contacts(&self, response: HttpResponse) -> Result<Vec<Contact>, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_create_contact(&self, response: HttpResponse) -> Result<Contact, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_update_contact(&self, response: HttpResponse) -> Result<Contact, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    /// Any 2xx counts; some backends answer 200 with the deleted record,
    /// others 204 with nothing, and the body is ignored either way.
    pub fn parse_delete_contact(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    /// The id is opaque, so it is escaped as a single path segment.
    fn item_url(&self, id: &ContactId) -> String {
        format!("{}/{}", self.collection_url, urlencoding::encode(id.as_str()))
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json(input: &NewContact) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    debug!(status = response.status, "persons API returned an error status");
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
