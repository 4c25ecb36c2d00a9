//! The audience of a notification.
//!
//! A [`Notifiable`] is either an identified [`Entity`] (a persisted record
//! owned by some external data layer) or an [`AnonymousNotifiable`] that
//! only carries per-channel routing overrides.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::types::BoxError;

/// A persisted record that can receive notifications.
///
/// Only the primary key description and field access are required; the
/// data layer behind them is out of scope.
pub trait Entity: Send + Sync {
    /// Fully-qualified type name used when deriving the default broadcast
    /// channel. Defaults to the Rust type path.
    fn type_identifier(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Declared primary-key fields, in declaration order.
    ///
    /// This usually consults schema metadata and may fail; the error is
    /// propagated unchanged by the router.
    fn primary_key_fields(&self) -> Result<Vec<String>, BoxError>;

    /// Read a field value, `None` when the field is not set.
    fn get(&self, field: &str) -> Option<Value>;

    /// Channel name this entity receives broadcast notifications on.
    ///
    /// When `Some`, the value is used verbatim instead of the derived
    /// `{type}.{key}` name.
    fn receives_broadcast_notifications_on(&self) -> Option<String> {
        None
    }
}

/// An ad-hoc recipient with no stored identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnonymousNotifiable {
    routes: BTreeMap<String, String>,
}

impl AnonymousNotifiable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a routing override for a delivery channel.
    pub fn route(mut self, channel: impl Into<String>, target: impl Into<String>) -> Self {
        self.routes.insert(channel.into(), target.into());
        self
    }

    /// The routing override for `channel`, if one was given.
    pub fn route_notification_for(&self, channel: &str) -> Option<&str> {
        self.routes.get(channel).map(String::as_str)
    }

    pub fn routes(&self) -> &BTreeMap<String, String> {
        &self.routes
    }
}

/// Borrowed view of whoever receives a notification.
#[derive(Clone, Copy)]
pub enum Notifiable<'a> {
    Identified(&'a dyn Entity),
    Anonymous(&'a AnonymousNotifiable),
}

impl<'a> Notifiable<'a> {
    pub fn identified(entity: &'a dyn Entity) -> Self {
        Self::Identified(entity)
    }

    pub fn anonymous(notifiable: &'a AnonymousNotifiable) -> Self {
        Self::Anonymous(notifiable)
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous(_))
    }

    /// Read a field of an identified notifiable. Anonymous notifiables have
    /// no fields.
    pub fn get(&self, field: &str) -> Option<Value> {
        match self {
            Self::Identified(entity) => entity.get(field),
            Self::Anonymous(_) => None,
        }
    }
}

impl<'a> From<&'a AnonymousNotifiable> for Notifiable<'a> {
    fn from(notifiable: &'a AnonymousNotifiable) -> Self {
        Self::Anonymous(notifiable)
    }
}

impl fmt::Debug for Notifiable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identified(entity) => f
                .debug_tuple("Identified")
                .field(&entity.type_identifier())
                .finish(),
            Self::Anonymous(notifiable) => f.debug_tuple("Anonymous").field(notifiable).finish(),
        }
    }
}
