//! Single-slot, auto-dismissing status message.
//!
//! Showing a message replaces whatever is displayed and restarts the delay.
//! Callers pass `now` explicitly so rendering stays deterministic.

use std::time::{Duration, Instant};

/// How long a message stays visible unless replaced.
pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Debug, Clone)]
pub struct Notifier {
    dismiss_after: Duration,
    /// Message and its expiry; `None` expiry when the delay runs past what
    /// `Instant` can represent.
    active: Option<(Notification, Option<Instant>)>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_DISMISS_AFTER)
    }
}

impl Notifier {
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            dismiss_after,
            active: None,
        }
    }

    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind, now: Instant) {
        let notification = Notification {
            message: message.into(),
            kind,
        };
        self.active = Some((notification, now.checked_add(self.dismiss_after)));
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant) {
        self.show(message, NotificationKind::Success, now);
    }

    pub fn failure(&mut self, message: impl Into<String>, now: Instant) {
        self.show(message, NotificationKind::Failure, now);
    }

    /// The visible message at `now`, if any.
    pub fn current(&self, now: Instant) -> Option<&Notification> {
        match &self.active {
            Some((notification, None)) => Some(notification),
            Some((notification, Some(expires))) if now < *expires => Some(notification),
            _ => None,
        }
    }

    /// Drop the message once its delay has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if self.current(now).is_none() {
            self.active = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_visible_until_delay_elapses() {
        let start = Instant::now();
        let mut notifier = Notifier::new(Duration::from_secs(5));
        notifier.success("add successful", start);

        let shown = notifier.current(start + Duration::from_secs(4)).unwrap();
        assert_eq!(shown.message, "add successful");
        assert_eq!(shown.kind, NotificationKind::Success);
        assert!(notifier.current(start + Duration::from_secs(5)).is_none());
    }

    #[test]
    fn new_message_replaces_and_restarts_delay() {
        let start = Instant::now();
        let mut notifier = Notifier::new(Duration::from_secs(5));
        notifier.success("first", start);
        notifier.failure("second", start + Duration::from_secs(3));

        let shown = notifier.current(start + Duration::from_secs(6)).unwrap();
        assert_eq!(shown.message, "second");
        assert_eq!(shown.kind, NotificationKind::Failure);
        assert!(notifier.current(start + Duration::from_secs(8)).is_none());
    }

    #[test]
    fn tick_clears_expired_message() {
        let start = Instant::now();
        let mut notifier = Notifier::new(Duration::from_secs(1));
        notifier.success("done", start);

        notifier.tick(start);
        assert!(notifier.current(start).is_some());

        notifier.tick(start + Duration::from_secs(2));
        assert!(notifier.active.is_none());
    }

    #[test]
    fn huge_delay_never_expires() {
        let start = Instant::now();
        let mut notifier = Notifier::new(Duration::from_secs(u64::MAX));
        notifier.failure("could not load contacts", start);

        let later = start + Duration::from_secs(86_400 * 365);
        notifier.tick(later);
        assert_eq!(
            notifier.current(later).map(|n| n.message.as_str()),
            Some("could not load contacts")
        );
    }
}
