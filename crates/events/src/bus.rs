//! In-process broadcasters.
//!
//! [`LocalBroadcaster`] fans every [`BroadcastDelivery`] out to in-process
//! subscribers over a `tokio::sync::broadcast` channel. It is meant to be
//! shared via `Arc` and is what a WebSocket gateway living in the same
//! process subscribes to. [`NullBroadcaster`] accepts and drops everything.

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::broadcaster::{BroadcastDelivery, BroadcastError, Broadcaster, DeliveryMode};

// ---------------------------------------------------------------------------
// LocalBroadcaster
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out broadcaster.
///
/// # Usage
///
/// ```rust
/// use herald_events::bus::LocalBroadcaster;
///
/// let bus = LocalBroadcaster::default();
/// let mut rx = bus.subscribe();
/// assert_eq!(bus.subscriber_count(), 1);
/// ```
pub struct LocalBroadcaster {
    sender: broadcast::Sender<BroadcastDelivery>,
}

impl LocalBroadcaster {
    /// Create a broadcaster with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed deliveries are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to every delivery published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<BroadcastDelivery> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for LocalBroadcaster {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[async_trait]
impl Broadcaster for LocalBroadcaster {
    /// Queued and immediate deliveries are both published right away; the
    /// mode travels with the delivery for subscribers that care.
    async fn deliver(&self, delivery: BroadcastDelivery) -> Result<(), BroadcastError> {
        tracing::trace!(
            event = %delivery.event,
            channels = delivery.channels.len(),
            queued = matches!(delivery.mode, DeliveryMode::Queued(_)),
            "Local broadcast"
        );
        // A SendError only means there are zero subscribers.
        let _ = self.sender.send(delivery);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// NullBroadcaster
// ---------------------------------------------------------------------------

/// Broadcaster that drops every delivery.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBroadcaster;

#[async_trait]
impl Broadcaster for NullBroadcaster {
    async fn deliver(&self, delivery: BroadcastDelivery) -> Result<(), BroadcastError> {
        tracing::debug!(event = %delivery.event, "Null broadcaster dropped delivery");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
