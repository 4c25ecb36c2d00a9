//! Broadcast routing.
//!
//! [`BroadcastRouter`] resolves a notifiable/notification pair into the
//! channels, event name and payload a broadcaster should publish. It is
//! stateless; every decision is a function of the two inputs.
//!
//! Precedence, in order:
//!
//! 1. Payload from `to_broadcast`, or `{}` when absent.
//! 2. Channels from `broadcast_on`, or a single private channel named after
//!    the notifiable.
//! 3. Event name from `broadcast_as`, or the dotted type identifier.
//! 4. `id` and `type` are written over whatever the payload already holds.

use serde::Serialize;
use serde_json::Value;

use crate::channel_ref::ChannelRef;
use crate::channels::{ANONYMOUS_CHANNEL, CHANNEL_BROADCAST, PAYLOAD_ID_KEY, PAYLOAD_TYPE_KEY};
use crate::error::RouteError;
use crate::naming::{dotted, json_kind, key_segment};
use crate::notifiable::{Entity, Notifiable};
use crate::notification::{BroadcastPayload, Notification};
use crate::types::Payload;

/// Everything a broadcaster needs to publish one notification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingResult {
    pub channels: Vec<ChannelRef>,
    pub event_name: String,
    pub payload: Payload,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BroadcastRouter;

impl BroadcastRouter {
    pub fn new() -> Self {
        Self
    }

    /// Resolve channels, event name and final payload.
    ///
    /// Failures raised by the notification or entity capabilities are
    /// returned unchanged inside [`RouteError`].
    pub fn route(
        &self,
        notifiable: &Notifiable<'_>,
        notification: &dyn Notification,
    ) -> Result<RoutingResult, RouteError> {
        let data = self.payload(notifiable, notification)?;
        let channels = self.channels(notifiable, notification)?;
        let event_name = self.event_name(notification);

        Ok(RoutingResult {
            channels,
            event_name,
            payload: with_reserved_keys(data, notification),
        })
    }

    /// Payload produced by the notification, before reserved keys are added.
    pub fn payload(
        &self,
        notifiable: &Notifiable<'_>,
        notification: &dyn Notification,
    ) -> Result<Payload, RouteError> {
        let produced = notification
            .to_broadcast(notifiable)
            .map_err(RouteError::Notification)?;

        match produced {
            None => Ok(Payload::new()),
            Some(BroadcastPayload::Message(message)) => Ok(message.into_array()),
            Some(BroadcastPayload::Data(Value::Object(map))) => Ok(map),
            Some(BroadcastPayload::Data(other)) => Err(RouteError::PayloadType {
                found: json_kind(&other),
            }),
        }
    }

    /// Channels to publish on.
    pub fn channels(
        &self,
        notifiable: &Notifiable<'_>,
        notification: &dyn Notification,
    ) -> Result<Vec<ChannelRef>, RouteError> {
        let channels = notification.broadcast_on();
        if !channels.is_empty() {
            return Ok(channels);
        }

        let identity = self.notifiable_channel(notifiable)?;
        Ok(vec![ChannelRef::Private(identity)])
    }

    /// Event name clients listen for.
    pub fn event_name(&self, notification: &dyn Notification) -> String {
        notification
            .broadcast_as()
            .unwrap_or_else(|| dotted(notification.type_identifier()))
    }

    /// Default channel identity of a notifiable.
    ///
    /// Anonymous notifiables use their `broadcast` route or `anonymous`.
    /// Entities use `receives_broadcast_notifications_on` when provided and
    /// `{dotted type}.{primary key}` otherwise.
    pub fn notifiable_channel(&self, notifiable: &Notifiable<'_>) -> Result<String, RouteError> {
        match notifiable {
            Notifiable::Anonymous(anon) => Ok(anon
                .route_notification_for(CHANNEL_BROADCAST)
                .unwrap_or(ANONYMOUS_CHANNEL)
                .to_string()),
            Notifiable::Identified(entity) => match entity.receives_broadcast_notifications_on() {
                Some(channel) => Ok(channel),
                None => entity_channel(*entity),
            },
        }
    }
}

/// `{dotted type}.{value of the first primary-key field}`.
fn entity_channel(entity: &dyn Entity) -> Result<String, RouteError> {
    let fields = entity.primary_key_fields().map_err(RouteError::Entity)?;

    if fields.len() > 1 {
        tracing::debug!(
            entity = entity.type_identifier(),
            fields = ?fields,
            "Composite primary key, deriving broadcast channel from the first field"
        );
    }

    let value = fields
        .first()
        .and_then(|field| entity.get(field))
        .filter(|value| !value.is_null())
        .ok_or_else(|| RouteError::MissingPrimaryKey {
            entity: entity.type_identifier().to_string(),
        })?;

    Ok(format!(
        "{}.{}",
        dotted(entity.type_identifier()),
        key_segment(&value)
    ))
}

/// Add `id` and `type`, overriding anything the notification supplied.
fn with_reserved_keys(mut payload: Payload, notification: &dyn Notification) -> Payload {
    payload.insert(PAYLOAD_ID_KEY.to_string(), Value::String(notification.id()));
    payload.insert(
        PAYLOAD_TYPE_KEY.to_string(),
        Value::String(notification.type_identifier().to_string()),
    );
    payload
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
