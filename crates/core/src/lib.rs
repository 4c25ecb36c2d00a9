//! Herald broadcast routing core.
//!
//! Decides how a notification is broadcast: which channels it goes to,
//! under which event name, and with which payload.
//!
//! - [`BroadcastMessage`]: fluent payload builder with transport hints.
//! - [`Notification`]: capability trait; every capability has an
//!   "absent" default.
//! - [`Notifiable`]: the audience, either an [`Entity`] or an
//!   [`AnonymousNotifiable`].
//! - [`BroadcastRouter`]: resolves a notifiable/notification pair into a
//!   [`RoutingResult`].

pub mod channel_ref;
pub mod channels;
pub mod error;
pub mod message;
pub mod naming;
pub mod notifiable;
pub mod notification;
pub mod router;
pub mod types;

pub use channel_ref::ChannelRef;
pub use error::RouteError;
pub use message::BroadcastMessage;
pub use notifiable::{AnonymousNotifiable, Entity, Notifiable};
pub use notification::{BroadcastPayload, Notification};
pub use router::{BroadcastRouter, RoutingResult};
pub use types::{BoxError, Payload};
