use crate::types::BoxError;

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// A notification capability (e.g. `to_broadcast`) failed.
    #[error(transparent)]
    Notification(BoxError),

    /// The entity failed to describe its primary key.
    #[error(transparent)]
    Entity(BoxError),

    #[error("Broadcast payload must be a JSON object, got {found}")]
    PayloadType { found: &'static str },

    #[error("Entity {entity} has no primary key value to derive a broadcast channel from")]
    MissingPrimaryKey { entity: String },
}
