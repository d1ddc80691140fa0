//! Registration errors.

use thiserror::Error;

/// Error returned when a shape cannot be registered.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The name is already used by a shape of any kind.
    #[error("shape with name '{0}' already exists")]
    NameCollision(String),

    /// The name is empty or contains characters outside `[A-Za-z0-9_]`.
    #[error("'{0}' is not a valid shape name")]
    InvalidName(String),
}
