//! Shared fixtures for broadcast channel integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::broadcast;

use herald_core::{
    BoxError, BroadcastMessage, BroadcastPayload, ChannelRef, Entity, Notifiable, Notification,
};
use herald_events::{
    BroadcastDelivery, BroadcastError, Broadcaster, BroadcastingPlugin, ChannelRegistry,
    LocalBroadcaster, NotificationConfig,
};

// ---------------------------------------------------------------------------
// Broadcasters
// ---------------------------------------------------------------------------

/// Broadcaster whose transport always fails.
pub struct FailingBroadcaster;

#[async_trait]
impl Broadcaster for FailingBroadcaster {
    async fn deliver(&self, _delivery: BroadcastDelivery) -> Result<(), BroadcastError> {
        Err(BroadcastError::Transport("connection refused".into()))
    }
}

/// Registry wired through the plugin over a local broadcaster, plus a
/// subscription to everything it publishes.
pub fn local_registry() -> (ChannelRegistry, broadcast::Receiver<BroadcastDelivery>) {
    let broadcaster = Arc::new(LocalBroadcaster::default());
    let rx = broadcaster.subscribe();
    let mut registry = ChannelRegistry::new();
    BroadcastingPlugin::new(broadcaster).bootstrap(&mut registry, &NotificationConfig::default());
    (registry, rx)
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// Generic ORM-style record keyed by `id`.
pub struct Record {
    pub id: i64,
}

impl Entity for Record {
    fn type_identifier(&self) -> &'static str {
        "Cake\\ORM\\Entity"
    }

    fn primary_key_fields(&self) -> Result<Vec<String>, BoxError> {
        Ok(vec!["id".to_string()])
    }

    fn get(&self, field: &str) -> Option<Value> {
        (field == "id").then(|| json!(self.id))
    }
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// Fixed channel and event name, payload built from the notifiable.
pub struct TestBroadcastNotification {
    pub id: String,
}

impl Notification for TestBroadcastNotification {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn broadcast_on(&self) -> Vec<ChannelRef> {
        vec![ChannelRef::private("test-channel")]
    }

    fn broadcast_as(&self) -> Option<String> {
        Some("notification.test.broadcast".to_string())
    }

    fn to_broadcast(
        &self,
        notifiable: &Notifiable<'_>,
    ) -> Result<Option<BroadcastPayload>, BoxError> {
        let message = BroadcastMessage::default()
            .with("message", "Test notification")
            .with("user_id", notifiable.get("id").unwrap_or(Value::Null));
        Ok(Some(message.into()))
    }
}

/// Relies on every default except a queue.
pub struct QueuedNotification;

impl Notification for QueuedNotification {
    fn id(&self) -> String {
        "queued-1".to_string()
    }

    fn type_identifier(&self) -> &'static str {
        "App\\Notifications\\OrderShipped"
    }

    fn broadcast_queue(&self) -> Option<String> {
        Some("broadcasts".to_string())
    }
}

/// Asks for a channel nobody registered.
pub struct SmsNotification;

impl Notification for SmsNotification {
    fn id(&self) -> String {
        "sms-1".to_string()
    }

    fn via(&self, _notifiable: &Notifiable<'_>) -> Vec<String> {
        vec!["broadcast".to_string(), "sms".to_string()]
    }
}

/// `to_broadcast` returns a JSON scalar.
pub struct MalformedNotification;

impl Notification for MalformedNotification {
    fn id(&self) -> String {
        "malformed-1".to_string()
    }

    fn to_broadcast(
        &self,
        _notifiable: &Notifiable<'_>,
    ) -> Result<Option<BroadcastPayload>, BoxError> {
        Ok(Some(json!(42).into()))
    }
}
