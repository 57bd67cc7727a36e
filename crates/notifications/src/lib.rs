//! Notifications and the order service that uses them.
//!
//! [`CoupledOrderService`] creates its own email and Skype senders and is
//! stuck with them. [`OrderService`] receives any [`NotificationService`] at
//! construction and only ever talks to that abstraction.

pub mod channel;
pub mod in_memory;
pub mod order;
pub mod service;

pub use channel::{EmailService, SkypeService};
pub use in_memory::InMemoryNotifier;
pub use order::{CoupledOrderService, ORDER_PLACED_MESSAGE, OrderReceipt, OrderService};
pub use service::{Channel, Delivery, NotificationError, NotificationService};
