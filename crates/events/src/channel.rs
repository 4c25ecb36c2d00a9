//! Notification channels.
//!
//! A [`NotificationChannel`] delivers one notification to one notifiable.
//! [`BroadcastChannel`] is the real-time implementation: it routes the
//! notification with [`BroadcastRouter`] and publishes the result through a
//! [`Broadcaster`]. Nothing is stored.

use std::sync::Arc;

use async_trait::async_trait;
use herald_core::{BroadcastRouter, Notifiable, Notification, Payload, RouteError};

use crate::broadcaster::{self, BroadcastError, Broadcaster};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for notification channel delivery.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Broadcast(#[from] BroadcastError),

    #[error("Notification channel not registered: {0}")]
    UnknownChannel(String),
}

// ---------------------------------------------------------------------------
// NotificationChannel
// ---------------------------------------------------------------------------

#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// Deliver `notification` to `notifiable`.
    async fn send(
        &self,
        notifiable: &Notifiable<'_>,
        notification: &dyn Notification,
    ) -> Result<(), ChannelError>;

    /// Options the channel was registered with.
    fn config(&self) -> &Payload;
}

// ---------------------------------------------------------------------------
// BroadcastChannel
// ---------------------------------------------------------------------------

/// Sends notifications to the broadcaster for real-time delivery.
pub struct BroadcastChannel {
    broadcaster: Arc<dyn Broadcaster>,
    router: BroadcastRouter,
    config: Payload,
}

impl BroadcastChannel {
    pub fn new(broadcaster: Arc<dyn Broadcaster>) -> Self {
        Self::with_config(broadcaster, Payload::new())
    }

    pub fn with_config(broadcaster: Arc<dyn Broadcaster>, config: Payload) -> Self {
        Self {
            broadcaster,
            router: BroadcastRouter::new(),
            config,
        }
    }

    pub fn router(&self) -> &BroadcastRouter {
        &self.router
    }
}

#[async_trait]
impl NotificationChannel for BroadcastChannel {
    /// Route and publish.
    ///
    /// The notification's `broadcast_queue()` decides between queued and
    /// immediate delivery. Routing and transport errors are returned as-is.
    async fn send(
        &self,
        notifiable: &Notifiable<'_>,
        notification: &dyn Notification,
    ) -> Result<(), ChannelError> {
        let routed = self.router.route(notifiable, notification)?;

        tracing::debug!(
            notification_id = %notification.id(),
            event = %routed.event_name,
            channels = routed.channels.len(),
            "Broadcasting notification"
        );

        let pending = broadcaster::to(self.broadcaster.as_ref(), routed.channels)
            .event(routed.event_name)
            .data(routed.payload);

        match notification.broadcast_queue() {
            Some(queue) => pending.queue(queue).await?,
            None => pending.send().await?,
        }

        Ok(())
    }

    fn config(&self) -> &Payload {
        &self.config
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
