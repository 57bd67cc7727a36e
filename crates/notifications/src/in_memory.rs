//! In-memory notifier for tests/dev.

use std::sync::Mutex;

use crate::service::{Channel, Delivery, NotificationError, NotificationService};

/// Records every message it is asked to send.
///
/// - No IO
/// - Empty (or whitespace-only) messages are rejected
#[derive(Debug, Default)]
pub struct InMemoryNotifier {
    sent: Mutex<Vec<String>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages sent so far, oldest first.
    pub fn sent(&self) -> Result<Vec<String>, NotificationError> {
        let sent = self.sent.lock().map_err(|_| NotificationError::Poisoned)?;
        Ok(sent.clone())
    }
}

impl NotificationService for InMemoryNotifier {
    fn send_notification(&self, message: &str) -> Result<Delivery, NotificationError> {
        if message.trim().is_empty() {
            return Err(NotificationError::Rejected("empty message".to_string()));
        }

        let mut sent = self.sent.lock().map_err(|_| NotificationError::Poisoned)?;
        sent.push(message.to_string());

        Ok(Delivery::new(Channel::Memory, message))
    }
}
