//! Notification capability trait.
//!
//! Every broadcast capability is a provided method whose default means
//! "not implemented"; a notification overrides only what it needs:
//!
//! ```rust
//! use herald_core::{BroadcastMessage, BroadcastPayload, BoxError, Notifiable, Notification};
//!
//! struct OrderShipped {
//!     id: String,
//!     order_id: i64,
//! }
//!
//! impl Notification for OrderShipped {
//!     fn id(&self) -> String {
//!         self.id.clone()
//!     }
//!
//!     fn to_broadcast(
//!         &self,
//!         _notifiable: &Notifiable<'_>,
//!     ) -> Result<Option<BroadcastPayload>, BoxError> {
//!         Ok(Some(BroadcastMessage::default().with("order_id", self.order_id).into()))
//!     }
//! }
//! ```

use serde_json::Value;

use crate::channel_ref::ChannelRef;
use crate::channels::CHANNEL_BROADCAST;
use crate::message::BroadcastMessage;
use crate::notifiable::Notifiable;
use crate::types::{BoxError, Payload};

/// What `to_broadcast` produced.
#[derive(Debug, Clone, PartialEq)]
pub enum BroadcastPayload {
    Message(BroadcastMessage),
    /// Raw JSON data; must be an object.
    Data(Value),
}

impl From<BroadcastMessage> for BroadcastPayload {
    fn from(message: BroadcastMessage) -> Self {
        Self::Message(message)
    }
}

impl From<Value> for BroadcastPayload {
    fn from(value: Value) -> Self {
        Self::Data(value)
    }
}

impl From<Payload> for BroadcastPayload {
    fn from(payload: Payload) -> Self {
        Self::Data(Value::Object(payload))
    }
}

pub trait Notification: Send + Sync {
    /// Opaque identifier attached to every broadcast payload.
    fn id(&self) -> String;

    /// Fully-qualified type name. Defaults to the Rust type path.
    fn type_identifier(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Names of the registry channels this notification is delivered through.
    fn via(&self, _notifiable: &Notifiable<'_>) -> Vec<String> {
        vec![CHANNEL_BROADCAST.to_string()]
    }

    /// Explicit broadcast channels. Empty means "derive from the notifiable".
    fn broadcast_on(&self) -> Vec<ChannelRef> {
        Vec::new()
    }

    /// Explicit event name. `None` means "derive from the type identifier".
    fn broadcast_as(&self) -> Option<String> {
        None
    }

    /// Queue to broadcast through. `None` means deliver immediately.
    fn broadcast_queue(&self) -> Option<String> {
        None
    }

    /// Broadcast representation of the notification.
    ///
    /// Defaults to [`to_array`](Notification::to_array), so notifications
    /// that already expose a generic array form broadcast it unchanged.
    fn to_broadcast(
        &self,
        notifiable: &Notifiable<'_>,
    ) -> Result<Option<BroadcastPayload>, BoxError> {
        Ok(self.to_array(notifiable).map(BroadcastPayload::from))
    }

    /// Channel-agnostic data representation.
    fn to_array(&self, _notifiable: &Notifiable<'_>) -> Option<Payload> {
        None
    }
}
