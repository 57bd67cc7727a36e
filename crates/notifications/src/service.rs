//! Notification abstraction (mechanics only).

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Transport a notification went out on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Email,
    Skype,
    Memory,
}

impl core::fmt::Display for Channel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Channel::Email => "email",
            Channel::Skype => "skype",
            Channel::Memory => "memory",
        };
        f.write_str(name)
    }
}

/// Record of one sent notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub channel: Channel,
    pub message: String,
}

impl Delivery {
    pub fn new(channel: Channel, message: impl Into<String>) -> Self {
        Self {
            channel,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotificationError {
    /// Internal lock poisoning.
    #[error("notifier state poisoned")]
    Poisoned,

    /// The transport refused the message.
    #[error("notification rejected: {0}")]
    Rejected(String),
}

/// Something that can deliver a text notification.
///
/// High-level services depend on this trait, never on a concrete transport.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationService {
    fn send_notification(&self, message: &str) -> Result<Delivery, NotificationError>;
}

impl<N> NotificationService for Arc<N>
where
    N: NotificationService + ?Sized,
{
    fn send_notification(&self, message: &str) -> Result<Delivery, NotificationError> {
        (**self).send_notification(message)
    }
}

impl<N> NotificationService for &N
where
    N: NotificationService + ?Sized,
{
    fn send_notification(&self, message: &str) -> Result<Delivery, NotificationError> {
        (**self).send_notification(message)
    }
}

impl<N> NotificationService for Box<N>
where
    N: NotificationService + ?Sized,
{
    fn send_notification(&self, message: &str) -> Result<Delivery, NotificationError> {
        (**self).send_notification(message)
    }
}
