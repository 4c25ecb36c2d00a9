//! Well-known channel names and reserved payload keys.
//!
//! These must match the names the notification registry uses when looking
//! up delivery channels and the keys clients read from broadcast payloads.

/// Real-time delivery through the external broadcaster. Nothing is stored.
pub const CHANNEL_BROADCAST: &str = "broadcast";

/// Channel identity used for anonymous notifiables without a broadcast route.
pub const ANONYMOUS_CHANNEL: &str = "anonymous";

/// Payload key carrying the notification id. Always overrides caller data.
pub const PAYLOAD_ID_KEY: &str = "id";

/// Payload key carrying the notification type identifier. Always overrides
/// caller data.
pub const PAYLOAD_TYPE_KEY: &str = "type";
