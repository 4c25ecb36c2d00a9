//! Shared fixtures for routing integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::{json, Value};

use herald_core::{
    BoxError, BroadcastMessage, BroadcastPayload, ChannelRef, Entity, Notifiable, Notification,
    Payload,
};

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// Generic record with a configurable type identifier and key layout.
pub struct Record {
    pub type_identifier: &'static str,
    pub primary_key: Vec<String>,
    pub fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new(type_identifier: &'static str, id: Value) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert("id".to_string(), id);
        Self {
            type_identifier,
            primary_key: vec!["id".to_string()],
            fields,
        }
    }

    pub fn with_field(mut self, field: &str, value: Value) -> Self {
        self.fields.insert(field.to_string(), value);
        self
    }

    pub fn with_primary_key(mut self, fields: &[&str]) -> Self {
        self.primary_key = fields.iter().map(|f| f.to_string()).collect();
        self
    }
}

impl Entity for Record {
    fn type_identifier(&self) -> &'static str {
        self.type_identifier
    }

    fn primary_key_fields(&self) -> Result<Vec<String>, BoxError> {
        Ok(self.primary_key.clone())
    }

    fn get(&self, field: &str) -> Option<Value> {
        self.fields.get(field).cloned()
    }
}

/// User that names its own broadcast channel.
pub struct User {
    pub id: i64,
}

impl Entity for User {
    fn type_identifier(&self) -> &'static str {
        "TestApp\\Model\\Entity\\User"
    }

    fn primary_key_fields(&self) -> Result<Vec<String>, BoxError> {
        Ok(vec!["id".to_string()])
    }

    fn get(&self, field: &str) -> Option<Value> {
        (field == "id").then(|| json!(self.id))
    }

    fn receives_broadcast_notifications_on(&self) -> Option<String> {
        Some(format!("users.{}", self.id))
    }
}

/// Entity whose schema lookup fails.
pub struct Unmapped;

#[derive(Debug)]
pub struct SchemaMissing;

impl std::fmt::Display for SchemaMissing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("table for Unmapped is not registered")
    }
}

impl std::error::Error for SchemaMissing {}

impl Entity for Unmapped {
    fn primary_key_fields(&self) -> Result<Vec<String>, BoxError> {
        Err(Box::new(SchemaMissing))
    }

    fn get(&self, _field: &str) -> Option<Value> {
        None
    }
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// Notification whose capabilities are all configurable.
#[derive(Default)]
pub struct Configurable {
    pub id: String,
    pub type_identifier: &'static str,
    pub channels: Vec<ChannelRef>,
    pub event: Option<String>,
    pub queue: Option<String>,
    pub payload: Option<BroadcastPayload>,
    pub failure: Option<String>,
}

impl Configurable {
    pub fn new(id: &str, type_identifier: &'static str) -> Self {
        Self {
            id: id.to_string(),
            type_identifier,
            ..Self::default()
        }
    }
}

impl Notification for Configurable {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn type_identifier(&self) -> &'static str {
        self.type_identifier
    }

    fn broadcast_on(&self) -> Vec<ChannelRef> {
        self.channels.clone()
    }

    fn broadcast_as(&self) -> Option<String> {
        self.event.clone()
    }

    fn broadcast_queue(&self) -> Option<String> {
        self.queue.clone()
    }

    fn to_broadcast(
        &self,
        _notifiable: &Notifiable<'_>,
    ) -> Result<Option<BroadcastPayload>, BoxError> {
        match &self.failure {
            Some(reason) => Err(reason.clone().into()),
            None => Ok(self.payload.clone()),
        }
    }
}

/// Mirrors a typical application notification: fixed channel and event
/// name, payload built from the notifiable.
pub struct TestBroadcastNotification {
    pub id: String,
    pub calls: AtomicUsize,
}

impl TestBroadcastNotification {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            calls: AtomicUsize::new(0),
        }
    }
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
        self.calls.fetch_add(1, Ordering::SeqCst);
        let message = BroadcastMessage::default()
            .with("message", "Test notification")
            .with("user_id", notifiable.get("id").unwrap_or(Value::Null));
        Ok(Some(message.into()))
    }
}

pub fn object(value: Value) -> Payload {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}
