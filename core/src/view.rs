//! Deterministic snapshot of what the phonebook screen shows.

use std::fmt;

use crate::notification::{Notification, NotificationKind};
use crate::types::{Contact, ContactId};

/// One line of the contact list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    pub id: ContactId,
    pub name: String,
    pub number: String,
}

impl From<&Contact> for ContactRow {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id.clone(),
            name: contact.name.clone(),
            number: contact.number.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub notification: Option<Notification>,
    pub filter: String,
    pub name: String,
    pub number: String,
    /// Contacts after filtering, in collection order.
    pub rows: Vec<ContactRow>,
}

impl View {
    /// Row by its 1-based position on screen.
    pub fn row(&self, position: usize) -> Option<&ContactRow> {
        position.checked_sub(1).and_then(|index| self.rows.get(index))
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Phonebook")?;
        if let Some(notification) = &self.notification {
            let tag = match notification.kind {
                NotificationKind::Success => "ok",
                NotificationKind::Failure => "error",
            };
            writeln!(f, "[{tag}] {}", notification.message)?;
        }
        writeln!(f, "filter contacts by: {}", self.filter)?;
        writeln!(f)?;
        writeln!(f, "Save New Contact")?;
        writeln!(f, "name: {}", self.name)?;
        writeln!(f, "number: {}", self.number)?;
        writeln!(f)?;
        writeln!(f, "Numbers")?;
        if self.rows.is_empty() {
            writeln!(f, "  (no contacts)")?;
        }
        for (index, row) in self.rows.iter().enumerate() {
            writeln!(f, "  {}. {} {}", index + 1, row.name, row.number)?;
        }
        Ok(())
    }
}
