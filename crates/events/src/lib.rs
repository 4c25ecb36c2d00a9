//! Herald broadcast notification channel.
//!
//! This crate connects the routing core in `herald-core` to a real-time
//! broadcaster:
//!
//! - [`Broadcaster`]: the external transport boundary, driven through
//!   [`broadcaster::to`] and [`PendingBroadcast`].
//! - [`LocalBroadcaster`] / [`NullBroadcaster`]: in-process fan-out backed
//!   by `tokio::sync::broadcast`, and a sink that drops everything.
//! - [`BroadcastChannel`]: the `"broadcast"` notification channel.
//! - [`ChannelRegistry`], [`BroadcastChannelProvider`] and
//!   [`BroadcastingPlugin`]: wiring the channel into a registry at startup.
//! - [`NotificationConfig`]: per-channel configuration.

pub mod broadcaster;
pub mod bus;
pub mod channel;
pub mod config;
pub mod plugin;
pub mod provider;
pub mod registry;

pub use broadcaster::{
    BroadcastDelivery, BroadcastError, Broadcaster, DeliveryMode, PendingBroadcast,
};
pub use bus::{LocalBroadcaster, NullBroadcaster};
pub use channel::{BroadcastChannel, ChannelError, NotificationChannel};
pub use config::{ConfigError, NotificationConfig};
pub use plugin::BroadcastingPlugin;
pub use provider::{BroadcastChannelProvider, ChannelProvider};
pub use registry::ChannelRegistry;
