//! Concrete transports.
//!
//! Neither actually leaves the process; a send is a structured log line plus
//! the returned [`Delivery`].

use crate::service::{Channel, Delivery, NotificationError, NotificationService};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailService;

impl EmailService {
    pub fn new() -> Self {
        Self
    }

    pub fn send_email(&self, message: &str) -> Delivery {
        tracing::info!(channel = %Channel::Email, message, "sending email");
        Delivery::new(Channel::Email, message)
    }
}

impl NotificationService for EmailService {
    fn send_notification(&self, message: &str) -> Result<Delivery, NotificationError> {
        Ok(self.send_email(message))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkypeService;

impl SkypeService {
    pub fn new() -> Self {
        Self
    }

    pub fn send_skype(&self, message: &str) -> Delivery {
        tracing::info!(channel = %Channel::Skype, message, "sending skype message");
        Delivery::new(Channel::Skype, message)
    }
}

impl NotificationService for SkypeService {
    fn send_notification(&self, message: &str) -> Result<Delivery, NotificationError> {
        Ok(self.send_skype(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_delivers_on_email_channel() {
        let delivery = EmailService::new().send_notification("hi").unwrap();
        assert_eq!(delivery, Delivery::new(Channel::Email, "hi"));
    }

    #[test]
    fn skype_delivers_on_skype_channel() {
        let delivery = SkypeService::new().send_notification("hi").unwrap();
        assert_eq!(delivery.channel, Channel::Skype);
        assert_eq!(delivery.channel.to_string(), "skype");
    }
}
