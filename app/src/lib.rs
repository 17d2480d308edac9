//! Terminal front-end for the phonebook.
//!
//! Renders the screen as text after every command and executes the core's
//! requests with a blocking HTTP agent.

pub mod command;
pub mod config;
pub mod session;
pub mod transport;

pub use command::{Command, CommandError, HELP};
pub use config::Options;
pub use session::{Flow, Session, SessionError};
pub use transport::{Transport, TransportError, UreqTransport};
