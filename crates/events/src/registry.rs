//! Named notification channels.
//!
//! The registry is populated once at startup (see
//! [`BroadcastingPlugin`](crate::BroadcastingPlugin)) and then only read.

use std::collections::HashMap;
use std::sync::Arc;

use herald_core::{Notifiable, Notification};

use crate::channel::{ChannelError, NotificationChannel};

#[derive(Default)]
pub struct ChannelRegistry {
    channels: HashMap<String, Arc<dyn NotificationChannel>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `channel` under `name`, returning the channel it replaced.
    pub fn load(
        &mut self,
        name: impl Into<String>,
        channel: Arc<dyn NotificationChannel>,
    ) -> Option<Arc<dyn NotificationChannel>> {
        let name = name.into();
        tracing::debug!(channel = %name, "Loading notification channel");
        self.channels.insert(name, channel)
    }

    pub fn has(&self, name: &str) -> bool {
        self.channels.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn NotificationChannel>> {
        self.channels.get(name).cloned()
    }

    /// Registered channel names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.channels.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Send `notification` through every channel its `via()` names.
    ///
    /// Stops at the first failure. An unregistered name fails with
    /// [`ChannelError::UnknownChannel`].
    pub async fn dispatch(
        &self,
        notifiable: &Notifiable<'_>,
        notification: &dyn Notification,
    ) -> Result<(), ChannelError> {
        for name in notification.via(notifiable) {
            let channel = self
                .channels
                .get(&name)
                .ok_or_else(|| ChannelError::UnknownChannel(name.clone()))?;
            channel.send(notifiable, notification).await?;
        }
        Ok(())
    }
}
