use std::fmt;

use serde::{Deserialize, Serialize};

/// A delivery destination recognised by the external broadcaster.
///
/// The wire name follows the Pusher convention: private and presence
/// channels are prefixed, public channels are not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum ChannelRef {
    Public(String),
    Private(String),
    Presence(String),
}

impl ChannelRef {
    pub fn public(name: impl Into<String>) -> Self {
        Self::Public(name.into())
    }

    pub fn private(name: impl Into<String>) -> Self {
        Self::Private(name.into())
    }

    pub fn presence(name: impl Into<String>) -> Self {
        Self::Presence(name.into())
    }

    /// The unprefixed channel name.
    pub fn name(&self) -> &str {
        match self {
            Self::Public(name) | Self::Private(name) | Self::Presence(name) => name,
        }
    }

    /// The name the broadcaster publishes on, e.g. `private-users.1`.
    pub fn broadcast_name(&self) -> String {
        match self {
            Self::Public(name) => name.clone(),
            Self::Private(name) => format!("private-{name}"),
            Self::Presence(name) => format!("presence-{name}"),
        }
    }
}

impl fmt::Display for ChannelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.broadcast_name())
    }
}
