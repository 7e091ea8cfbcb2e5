/// Convenience result type used across the crate.
pub type CardStackResult<T> = Result<T, CardStackError>;

/// Top-level error taxonomy.
///
/// Layout operations never fail; errors only surface at the data boundary (deck and config files)
/// and in the command line front-end.
#[derive(thiserror::Error, Debug)]
pub enum CardStackError {
    /// Invalid user-provided deck or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardStackError {
    /// Build a [`CardStackError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CardStackError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
