//! Startup wiring for the broadcast notification channel.
//!
//! The application builds a [`ChannelRegistry`] and calls
//! [`BroadcastingPlugin::bootstrap`] once before sending notifications:
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use herald_events::{BroadcastingPlugin, ChannelRegistry, LocalBroadcaster, NotificationConfig};
//!
//! let broadcaster = Arc::new(LocalBroadcaster::default());
//! let mut registry = ChannelRegistry::new();
//!
//! BroadcastingPlugin::new(broadcaster).bootstrap(&mut registry, &NotificationConfig::default());
//!
//! assert!(registry.has("broadcast"));
//! ```

use std::sync::Arc;

use crate::broadcaster::Broadcaster;
use crate::config::NotificationConfig;
use crate::provider::{BroadcastChannelProvider, ChannelProvider};
use crate::registry::ChannelRegistry;

pub struct BroadcastingPlugin {
    provider: BroadcastChannelProvider,
}

impl BroadcastingPlugin {
    pub fn new(broadcaster: Arc<dyn Broadcaster>) -> Self {
        Self {
            provider: BroadcastChannelProvider::new(broadcaster),
        }
    }

    /// Register the broadcast channel into `registry`.
    pub fn bootstrap(&self, registry: &mut ChannelRegistry, config: &NotificationConfig) {
        self.provider.register(registry, config);
        tracing::info!(
            channels = ?self.provider.provides(),
            "Broadcast notification channel registered"
        );
    }
}
