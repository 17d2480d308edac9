//! UI state for the phonebook screen.
//!
//! # Design
//! `Phonebook` owns everything the screen shows: the contact collection, the
//! filter text, the two form inputs, the notification slot and the one
//! request that may be in flight. User actions return `HttpRequest` values;
//! the host executes them and feeds the response back through
//! `handle_response`. The collection only changes from response bodies, never
//! from what the user typed.
//!
//! Actions that need a yes/no from the user (replacing the number of an
//! existing name, deleting a contact) hand back a `PendingUpdate` or
//! `PendingDelete` carrying the prompt. Confirming turns it into a request;
//! declining is dropping it.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::client::ContactsClient;
use crate::error::PhonebookError;
use crate::filter::contacts_to_show;
use crate::http::{HttpRequest, HttpResponse};
use crate::notification::Notifier;
use crate::types::{Contact, ContactId, NewContact};
use crate::view::{ContactRow, View};

/// The request currently awaiting a response.
#[derive(Debug, Clone, PartialEq, Eq)]
enum InFlight {
    Load,
    Create { name: String },
    Update { id: ContactId, name: String },
    Delete { id: ContactId, name: String },
}

/// A name collision waiting for the user to approve replacing the number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpdate {
    id: ContactId,
    contact: NewContact,
}

impl PendingUpdate {
    pub fn id(&self) -> &ContactId {
        &self.id
    }

    pub fn contact(&self) -> &NewContact {
        &self.contact
    }

    pub fn prompt(&self) -> String {
        format!(
            "{} is already in the phonebook. Do you want to update their number to {}?",
            self.contact.name, self.contact.number
        )
    }
}

/// A delete waiting for the user's confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    id: ContactId,
    name: String,
}

impl PendingDelete {
    pub fn id(&self) -> &ContactId {
        &self.id
    }

    pub fn prompt(&self) -> String {
        format!("Are you sure you want to delete {}?", self.name)
    }
}

/// Outcome of submitting the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submit {
    /// A new contact; execute the request.
    Send(HttpRequest),
    /// The name already exists; ask before replacing the number.
    ConfirmUpdate(PendingUpdate),
}

#[derive(Debug, Clone)]
pub struct Phonebook {
    client: ContactsClient,
    contacts: Vec<Contact>,
    filter: String,
    name: String,
    number: String,
    notifier: Notifier,
    in_flight: Option<InFlight>,
}

impl Phonebook {
    pub fn new(client: ContactsClient) -> Self {
        Self::with_notifier(client, Notifier::default())
    }

    pub fn with_notification_delay(client: ContactsClient, delay: Duration) -> Self {
        Self::with_notifier(client, Notifier::new(delay))
    }

    fn with_notifier(client: ContactsClient, notifier: Notifier) -> Self {
        Self {
            client,
            contacts: Vec::new(),
            filter: String::new(),
            name: String::new(),
            number: String::new(),
            notifier,
            in_flight: None,
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_number(&mut self, number: impl Into<String>) {
        self.number = number.into();
    }

    /// Fetch the whole collection.
    pub fn load(&mut self) -> Result<HttpRequest, PhonebookError> {
        self.ensure_idle()?;
        let request = self.client.build_list_contacts();
        self.start(InFlight::Load);
        Ok(request)
    }

    /// Submit the form. The inputs are cleared whether the name is new or a
    /// duplicate awaiting confirmation.
    pub fn submit(&mut self) -> Result<Submit, PhonebookError> {
        self.ensure_idle()?;
        let contact = NewContact::new(self.name.clone(), self.number.clone());

        if let Some(existing) = self.contacts.iter().find(|c| c.name == contact.name) {
            let pending = PendingUpdate {
                id: existing.id.clone(),
                contact,
            };
            self.clear_form();
            debug!(id = %pending.id, "name already present, asking to update");
            return Ok(Submit::ConfirmUpdate(pending));
        }

        let request = self.client.build_create_contact(&contact)?;
        self.clear_form();
        self.start(InFlight::Create { name: contact.name });
        Ok(Submit::Send(request))
    }

    pub fn confirm_update(&mut self, pending: PendingUpdate) -> Result<HttpRequest, PhonebookError> {
        self.ensure_idle()?;
        let request = self.client.build_update_contact(&pending.id, &pending.contact)?;
        self.start(InFlight::Update {
            id: pending.id,
            name: pending.contact.name,
        });
        Ok(request)
    }

    pub fn request_delete(&self, id: &ContactId) -> Result<PendingDelete, PhonebookError> {
        let contact = self
            .contacts
            .iter()
            .find(|c| &c.id == id)
            .ok_or_else(|| PhonebookError::UnknownContact(id.clone()))?;
        Ok(PendingDelete {
            id: contact.id.clone(),
            name: contact.name.clone(),
        })
    }

    pub fn confirm_delete(&mut self, pending: PendingDelete) -> Result<HttpRequest, PhonebookError> {
        self.ensure_idle()?;
        let request = self.client.build_delete_contact(&pending.id);
        self.start(InFlight::Delete {
            id: pending.id,
            name: pending.name,
        });
        Ok(request)
    }

    /// Resolve the in-flight request with the backend's answer.
    ///
    /// Failures are shown as a notification and also returned, leaving the
    /// collection untouched.
    pub fn handle_response(
        &mut self,
        response: HttpResponse,
        now: Instant,
    ) -> Result<(), PhonebookError> {
        let in_flight = self.in_flight.take().ok_or(PhonebookError::NoRequestPending)?;
        debug!(status = response.status, request = ?in_flight, "resolving request");

        match in_flight {
            InFlight::Load => match self.client.parse_list_contacts(response) {
                Ok(contacts) => {
                    self.contacts = dedup_by_id(contacts);
                    Ok(())
                }
                Err(e) => {
                    warn!(error = %e, "loading contacts failed");
                    self.notifier.failure("could not load contacts", now);
                    Err(e.into())
                }
            },
            InFlight::Create { name } => match self.client.parse_create_contact(response) {
                Ok(contact) => {
                    self.upsert(contact);
                    self.notifier.success("add successful", now);
                    Ok(())
                }
                Err(e) => {
                    warn!(error = %e, %name, "creating contact failed");
                    self.notifier.failure(format!("could not add {name}"), now);
                    Err(e.into())
                }
            },
            InFlight::Update { id, name } => match self.client.parse_update_contact(response) {
                Ok(contact) => {
                    if contact.id != id {
                        warn!(%id, returned = %contact.id, "update answered with another id");
                        self.contacts.retain(|c| c.id != id);
                    }
                    self.upsert(contact);
                    self.notifier.success("update successful", now);
                    Ok(())
                }
                Err(e) => {
                    warn!(error = %e, %id, "updating contact failed");
                    self.notifier
                        .failure(format!("{name} has already been deleted from the server."), now);
                    Err(e.into())
                }
            },
            InFlight::Delete { id, name } => match self.client.parse_delete_contact(response) {
                Ok(()) => {
                    self.contacts.retain(|c| c.id != id);
                    Ok(())
                }
                Err(e) => {
                    warn!(error = %e, %id, "deleting contact failed");
                    self.notifier.failure(format!("could not delete {name}"), now);
                    Err(e.into())
                }
            },
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.notifier.tick(now);
    }

    pub fn contacts_to_show(&self) -> Vec<&Contact> {
        contacts_to_show(&self.contacts, &self.filter)
    }

    pub fn view(&self, now: Instant) -> View {
        View {
            notification: self.notifier.current(now).cloned(),
            filter: self.filter.clone(),
            name: self.name.clone(),
            number: self.number.clone(),
            rows: self.contacts_to_show().into_iter().map(ContactRow::from).collect(),
        }
    }

    fn ensure_idle(&self) -> Result<(), PhonebookError> {
        if self.in_flight.is_some() {
            return Err(PhonebookError::RequestInFlight);
        }
        Ok(())
    }

    fn start(&mut self, request: InFlight) {
        debug!(request = ?request, "request started");
        self.in_flight = Some(request);
    }

    fn clear_form(&mut self) {
        self.name.clear();
        self.number.clear();
    }

    /// Ids stay unique: a record whose id is already held replaces it.
    fn upsert(&mut self, contact: Contact) {
        match self.contacts.iter_mut().find(|c| c.id == contact.id) {
            Some(slot) => *slot = contact,
            None => self.contacts.push(contact),
        }
    }
}

fn dedup_by_id(contacts: Vec<Contact>) -> Vec<Contact> {
    let mut unique: Vec<Contact> = Vec::with_capacity(contacts.len());
    for contact in contacts {
        match unique.iter_mut().find(|c| c.id == contact.id) {
            Some(slot) => *slot = contact,
            None => unique.push(contact),
        }
    }
    unique
}
