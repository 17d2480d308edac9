//! Phonebook front-end core: contact data access plus screen state.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `ContactsClient` is stateless and maps list, create, update and delete
//!   onto `/api/persons`.
//! - `Phonebook` owns the screen state and allows a single request in
//!   flight; the collection is updated from response bodies only.
//! - `View` is a plain snapshot of the screen, rendered with `Display`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod filter;
pub mod http;
pub mod notification;
pub mod phonebook;
pub mod types;
pub mod view;

pub use client::ContactsClient;
pub use error::{ApiError, PhonebookError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use notification::{Notification, NotificationKind};
pub use phonebook::{PendingDelete, PendingUpdate, Phonebook, Submit};
pub use types::{Contact, ContactId, NewContact};
pub use view::{ContactRow, View};
