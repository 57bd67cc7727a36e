use serde::{Deserialize, Serialize};

use solidforge_core::OrderId;

use crate::channel::{EmailService, SkypeService};
use crate::service::{Delivery, NotificationError, NotificationService};

/// Text sent whenever an order is placed.
pub const ORDER_PLACED_MESSAGE: &str = "Order placed!";

/// Outcome of [`OrderService::place_order`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: OrderId,
    pub delivery: Delivery,
}

/// Order service hard-wired to its transports.
///
/// Swapping a channel, or testing without one, means editing this type.
#[derive(Debug, Default)]
pub struct CoupledOrderService {
    email: EmailService,
    skype: SkypeService,
}

impl CoupledOrderService {
    pub fn new() -> Self {
        Self {
            email: EmailService::new(),
            skype: SkypeService::new(),
        }
    }

    /// Place an order and notify on both built-in channels.
    pub fn place_order(&self) -> Vec<Delivery> {
        tracing::info!("placing order (coupled)");
        vec![
            self.email.send_email(ORDER_PLACED_MESSAGE),
            self.skype.send_skype(ORDER_PLACED_MESSAGE),
        ]
    }
}

/// Order service that depends only on [`NotificationService`].
#[derive(Debug)]
pub struct OrderService<N> {
    notifier: N,
}

impl<N> OrderService<N>
where
    N: NotificationService,
{
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Place an order and send exactly one notification through the injected
    /// notifier.
    pub fn place_order(&self) -> Result<OrderReceipt, NotificationError> {
        let order_id = OrderId::new();
        tracing::info!(%order_id, "placing order");

        let delivery = self
            .notifier
            .send_notification(ORDER_PLACED_MESSAGE)
            .inspect_err(|e| tracing::warn!(%order_id, error = %e, "order notification failed"))?;

        Ok(OrderReceipt { order_id, delivery })
    }
}
