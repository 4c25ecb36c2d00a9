//! Fluent builder for broadcast payloads.
//!
//! A [`BroadcastMessage`] is what a notification's `to_broadcast` usually
//! returns:
//!
//! ```rust
//! use herald_core::BroadcastMessage;
//!
//! let message = BroadcastMessage::default()
//!     .title("New Message")
//!     .message("You have a new message")
//!     .action_url("/messages/1")
//!     .on_queue("broadcasts")
//!     .on_connection("redis");
//!
//! assert_eq!(message.to_array()["title"], "New Message");
//! assert_eq!(message.queue(), Some("broadcasts"));
//! ```
//!
//! The builder is consumed by value and is not meant to be reused after it
//! has been handed to the router.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::Payload;

/// Broadcast payload plus optional transport hints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BroadcastMessage {
    data: Payload,
    connection: Option<String>,
    queue: Option<String>,
}

impl BroadcastMessage {
    /// Create a message pre-seeded with `data`.
    pub fn new(data: Payload) -> Self {
        Self {
            data,
            connection: None,
            queue: None,
        }
    }

    /// Replace the payload wholesale.
    pub fn with_data(mut self, data: Payload) -> Self {
        self.data = data;
        self
    }

    /// Insert a single payload entry, replacing any previous value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn title(self, title: impl Into<String>) -> Self {
        self.with("title", title.into())
    }

    pub fn message(self, message: impl Into<String>) -> Self {
        self.with("message", message.into())
    }

    pub fn action_url(self, url: impl Into<String>) -> Self {
        self.with("action_url", url.into())
    }

    pub fn icon(self, icon: impl Into<String>) -> Self {
        self.with("icon", icon.into())
    }

    /// Set the transport connection hint.
    pub fn on_connection(mut self, connection: impl Into<String>) -> Self {
        self.connection = Some(connection.into());
        self
    }

    /// Set the queue name hint.
    pub fn on_queue(mut self, queue: impl Into<String>) -> Self {
        self.queue = Some(queue.into());
        self
    }

    pub fn data(&self) -> &Payload {
        &self.data
    }

    pub fn connection(&self) -> Option<&str> {
        self.connection.as_deref()
    }

    pub fn queue(&self) -> Option<&str> {
        self.queue.as_deref()
    }

    /// The payload exactly as built.
    pub fn to_array(&self) -> &Payload {
        &self.data
    }

    /// Consume the message, keeping only the payload.
    pub fn into_array(self) -> Payload {
        self.data
    }
}

impl From<Payload> for BroadcastMessage {
    fn from(data: Payload) -> Self {
        Self::new(data)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
