//! The broadcaster boundary.
//!
//! A [`Broadcaster`] publishes a fully-resolved [`BroadcastDelivery`] to
//! WebSocket/Pusher-style channels. Callers build deliveries with the
//! pending-broadcast builder:
//!
//! ```rust
//! use herald_core::ChannelRef;
//! use herald_events::broadcaster;
//! use herald_events::NullBroadcaster;
//!
//! # async fn run() -> Result<(), herald_events::BroadcastError> {
//! let sink = NullBroadcaster;
//! broadcaster::to(&sink, vec![ChannelRef::private("users.1")])
//!     .event("order.shipped")
//!     .queue("broadcasts")
//!     .await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use herald_core::{ChannelRef, Payload};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Delivery
// ---------------------------------------------------------------------------

/// How the broadcaster should publish a delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "queue", rename_all = "snake_case")]
pub enum DeliveryMode {
    /// Publish before `send` returns.
    Immediate,
    /// Hand off to the broadcaster's queue with the given name.
    Queued(String),
}

/// One broadcast, ready for the transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BroadcastDelivery {
    pub channels: Vec<ChannelRef>,
    pub event: String,
    pub payload: Payload,
    pub mode: DeliveryMode,
    /// When the delivery was handed to the broadcaster (UTC).
    pub timestamp: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for broadcaster failures.
#[derive(Debug, thiserror::Error)]
pub enum BroadcastError {
    /// The transport rejected or failed to publish the delivery.
    #[error("Broadcast transport failed: {0}")]
    Transport(String),

    /// The broadcaster no longer accepts deliveries.
    #[error("Broadcaster is closed")]
    Closed,
}

// ---------------------------------------------------------------------------
// Broadcaster
// ---------------------------------------------------------------------------

/// External real-time transport.
///
/// Implementations own retries, queues and connection handling; failures
/// are returned to the caller as-is.
#[async_trait]
pub trait Broadcaster: Send + Sync {
    async fn deliver(&self, delivery: BroadcastDelivery) -> Result<(), BroadcastError>;
}

/// Start a broadcast to `channels`.
pub fn to(broadcaster: &dyn Broadcaster, channels: Vec<ChannelRef>) -> PendingBroadcast<'_> {
    PendingBroadcast {
        broadcaster,
        channels,
        event: String::new(),
        payload: Payload::new(),
    }
}

/// A broadcast under construction. Nothing is published until
/// [`send`](PendingBroadcast::send) or [`queue`](PendingBroadcast::queue).
pub struct PendingBroadcast<'a> {
    broadcaster: &'a dyn Broadcaster,
    channels: Vec<ChannelRef>,
    event: String,
    payload: Payload,
}

impl PendingBroadcast<'_> {
    pub fn event(mut self, name: impl Into<String>) -> Self {
        self.event = name.into();
        self
    }

    pub fn data(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    pub fn channels(&self) -> &[ChannelRef] {
        &self.channels
    }

    /// Publish immediately.
    pub async fn send(self) -> Result<(), BroadcastError> {
        self.dispatch(DeliveryMode::Immediate).await
    }

    /// Publish through the named queue.
    pub async fn queue(self, queue: impl Into<String>) -> Result<(), BroadcastError> {
        self.dispatch(DeliveryMode::Queued(queue.into())).await
    }

    async fn dispatch(self, mode: DeliveryMode) -> Result<(), BroadcastError> {
        let delivery = BroadcastDelivery {
            channels: self.channels,
            event: self.event,
            payload: self.payload,
            mode,
            timestamp: Utc::now(),
        };
        self.broadcaster.deliver(delivery).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
