//! Channel providers.
//!
//! A [`ChannelProvider`] knows how to build one or more notification
//! channels and register them, with their configuration, into a
//! [`ChannelRegistry`].

use std::sync::Arc;

use herald_core::channels::CHANNEL_BROADCAST;
use herald_core::Payload;

use crate::broadcaster::Broadcaster;
use crate::channel::BroadcastChannel;
use crate::config::NotificationConfig;
use crate::registry::ChannelRegistry;

pub trait ChannelProvider {
    /// Names of the channels this provider registers.
    fn provides(&self) -> Vec<&'static str>;

    /// Options every registered channel starts from.
    fn default_config(&self) -> Payload {
        Payload::new()
    }

    /// Build the channels and load them into `registry`.
    fn register(&self, registry: &mut ChannelRegistry, config: &NotificationConfig);
}

/// Registers [`BroadcastChannel`] as `"broadcast"`.
pub struct BroadcastChannelProvider {
    broadcaster: Arc<dyn Broadcaster>,
}

impl BroadcastChannelProvider {
    pub fn new(broadcaster: Arc<dyn Broadcaster>) -> Self {
        Self { broadcaster }
    }
}

impl ChannelProvider for BroadcastChannelProvider {
    fn provides(&self) -> Vec<&'static str> {
        vec![CHANNEL_BROADCAST]
    }

    /// Configured options are merged over the defaults, key by key.
    fn register(&self, registry: &mut ChannelRegistry, config: &NotificationConfig) {
        let mut options = self.default_config();
        options.extend(config.channel(CHANNEL_BROADCAST));

        let channel = BroadcastChannel::with_config(Arc::clone(&self.broadcaster), options);
        registry.load(CHANNEL_BROADCAST, Arc::new(channel));
    }
}
