use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, Contact};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

fn arto() -> Contact {
    Contact {
        id: "1".to_string(),
        name: "Arto Hellas".to_string(),
        number: "555-555-5555".to_string(),
    }
}

// --- list ---

#[tokio::test]
async fn list_contacts_empty() {
    let resp = app()
        .oneshot(empty_request("GET", "/api/persons"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let contacts: Vec<Contact> = body_json(resp).await;
    assert!(contacts.is_empty());
}

#[tokio::test]
async fn list_contacts_seeded() {
    let resp = app_with(vec![arto()])
        .oneshot(empty_request("GET", "/api/persons"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let contacts: Vec<Contact> = body_json(resp).await;
    assert_eq!(contacts, vec![arto()]);
}

// --- create ---

#[tokio::test]
async fn create_contact_returns_201() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/persons",
            r#"{"name":"Ada Lovelace","number":"39-44-5323523"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let contact: Contact = body_json(resp).await;
    assert_eq!(contact.name, "Ada Lovelace");
    assert_eq!(contact.number, "39-44-5323523");
    assert!(!contact.id.is_empty());
}

#[tokio::test]
async fn create_contact_blank_name_returns_400() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/persons",
            r#"{"name":"","number":"1"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(&body_bytes(resp).await[..], b"name missing");
}

#[tokio::test]
async fn create_contact_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/api/persons", r#"{"name":"Ada"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_contact_not_found() {
    let resp = app()
        .oneshot(empty_request("GET", "/api/persons/missing"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- update ---

#[tokio::test]
async fn update_contact_not_found() {
    let resp = app()
        .oneshot(json_request(
            "PUT",
            "/api/persons/missing",
            r#"{"name":"Nope","number":"0"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_contact_blank_number_returns_400() {
    let resp = app_with(vec![arto()])
        .oneshot(json_request(
            "PUT",
            "/api/persons/1",
            r#"{"name":"Arto Hellas","number":" "}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- delete ---

#[tokio::test]
async fn delete_contact_not_found() {
    let resp = app()
        .oneshot(empty_request("DELETE", "/api/persons/missing"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app_with(vec![arto()]).into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/api/persons",
            r#"{"name":"Dan Abramov","number":"12-43-234345"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Contact = body_json(resp).await;
    let id = created.id.clone();

    // list keeps insertion order
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/api/persons"))
        .await
        .unwrap();
    let contacts: Vec<Contact> = body_json(resp).await;
    assert_eq!(contacts, vec![arto(), created.clone()]);

    // update replaces both fields
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/api/persons/{id}"),
            r#"{"name":"Dan Abramov","number":"040-123456"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Contact = body_json(resp).await;
    assert_eq!(updated.id, id);
    assert_eq!(updated.number, "040-123456");

    // get sees the update
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", &format!("/api/persons/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Contact = body_json(resp).await;
    assert_eq!(fetched, updated);

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/api/persons/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    // update after delete is 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/api/persons/{id}"),
            r#"{"name":"Dan Abramov","number":"1"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list only has the seeded contact left
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/api/persons"))
        .await
        .unwrap();
    let contacts: Vec<Contact> = body_json(resp).await;
    assert_eq!(contacts, vec![arto()]);
}
