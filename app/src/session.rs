//! Drives a `Phonebook` with a transport and the user's answers.
//!
//! Every action runs its request to completion before returning, so the
//! state layer never sees a second request while one is in flight. Backend
//! failures end up as notifications on the screen; only mistakes in the
//! command itself are returned as errors.

use std::time::Instant;

use phonebook_core::{HttpRequest, HttpResponse, Phonebook, PhonebookError, Submit};
use thiserror::Error;
use tracing::{debug, warn};

use crate::command::Command;
use crate::transport::Transport;

/// Status handed to the state layer when the server could not be reached.
const UNREACHABLE_STATUS: u16 = 503;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Help,
    Quit,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no contact at row {0}")]
    NoSuchRow(usize),

    #[error(transparent)]
    Phonebook(#[from] PhonebookError),
}

pub struct Session<T> {
    book: Phonebook,
    transport: T,
}

impl<T: Transport> Session<T> {
    pub fn new(book: Phonebook, transport: T) -> Self {
        Self { book, transport }
    }

    pub fn book(&self) -> &Phonebook {
        &self.book
    }

    pub fn refresh(&mut self) -> Result<(), SessionError> {
        let request = self.book.load()?;
        self.round_trip(request)
    }

    /// Apply one command. `confirm` is asked the prompt of any action that
    /// needs a yes/no and returns the answer.
    pub fn run_command<F>(&mut self, command: Command, mut confirm: F) -> Result<Flow, SessionError>
    where
        F: FnMut(&str) -> bool,
    {
        match command {
            Command::Filter(text) => self.book.set_filter(text),
            Command::Name(text) => self.book.set_name(text),
            Command::Number(text) => self.book.set_number(text),
            Command::Add => match self.book.submit()? {
                Submit::Send(request) => self.round_trip(request)?,
                Submit::ConfirmUpdate(pending) => {
                    if confirm(&pending.prompt()) {
                        let request = self.book.confirm_update(pending)?;
                        self.round_trip(request)?;
                    } else {
                        debug!("update declined");
                    }
                }
            },
            Command::Delete(position) => {
                let view = self.book.view(Instant::now());
                let row = view.row(position).ok_or(SessionError::NoSuchRow(position))?;
                let pending = self.book.request_delete(&row.id)?;
                if confirm(&pending.prompt()) {
                    let request = self.book.confirm_delete(pending)?;
                    self.round_trip(request)?;
                } else {
                    debug!("delete declined");
                }
            }
            Command::Refresh => self.refresh()?,
            Command::Help => return Ok(Flow::Help),
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Current screen, with expired notifications dropped.
    pub fn render(&mut self) -> String {
        let now = Instant::now();
        self.book.tick(now);
        self.book.view(now).to_string()
    }

    fn round_trip(&mut self, request: HttpRequest) -> Result<(), SessionError> {
        let response = self.transport.execute(request).unwrap_or_else(|e| {
            warn!(error = %e, "backend unreachable");
            HttpResponse::new(UNREACHABLE_STATUS, e.to_string())
        });
        match self.book.handle_response(response, Instant::now()) {
            Ok(()) => Ok(()),
            // already on screen as a notification
            Err(PhonebookError::Api(e)) => {
                debug!(error = %e, "request failed");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
