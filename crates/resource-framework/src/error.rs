//! # Framework Errors
//!
//! Each concern owns its error enum so callers can match on exactly what went wrong.
//! [`ResourceError`] unifies them for code that only needs to propagate.

/// A generic mapping could not be turned into a [`ResourceIdentifier`](crate::ResourceIdentifier).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    #[error("Missing key: {0}")]
    MissingKey(String),
    #[error("Value for key `{key}` is not a string")]
    TypeMismatch { key: String },
    #[error("Unexpected key: {0}")]
    UnexpectedKey(String),
}

/// Failures while writing or reading an [`Archive`](crate::Archive).
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("Archive serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid value for key `{key}`: {source}")]
    InvalidValue {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Missing key: {0}")]
    MissingKey(String),
    #[error("Archived resource type `{found}` cannot be decoded as `{expected}`")]
    TypeMismatch { expected: String, found: String },
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Schema registration and lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Resource type already registered: {0}")]
    DuplicateType(String),
    #[error("Field `{field}` declared twice on `{resource_type}`")]
    DuplicateField {
        resource_type: String,
        field: String,
    },
    #[error("Field name `{field}` is reserved (on `{resource_type}`)")]
    ReservedField {
        resource_type: String,
        field: String,
    },
    #[error("Unknown resource type: {0}")]
    UnknownType(String),
}

/// Umbrella error for callers that mix identifier, archive and registry operations.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error(transparent)]
    Identifier(#[from] IdentifierError),
    #[error(transparent)]
    Archive(#[from] ArchiveError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
