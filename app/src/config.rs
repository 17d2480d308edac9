use std::time::Duration;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Phonebook terminal front-end", long_about = None)]
pub struct Options {
    /// Base URL of the backend serving /api/persons
    #[arg(long, env = "PHONEBOOK_URL", default_value = "http://localhost:3001")]
    pub base_url: String,

    /// Seconds a notification stays on screen
    #[arg(long, env = "PHONEBOOK_NOTIFICATION_SECS", default_value_t = 5)]
    pub notification_secs: u64,

    /// Per-request timeout in seconds
    #[arg(long, env = "PHONEBOOK_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,
}

impl Options {
    pub fn notification_delay(&self) -> Duration {
        Duration::from_secs(self.notification_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
