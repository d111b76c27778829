//! Repository error types
//!
//! Structured errors for repository operations, carrying which operation
//! failed, why, and which entity was involved.
//!
//! # Example
//!
//! ```rust
//! use users_service::repository::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
//!
//! let error = RepositoryError::not_found(RepositoryOperation::FindById, "User", 7);
//! assert!(matches!(error.kind, RepositoryErrorKind::NotFound));
//! assert_eq!(error.entity_id.as_deref(), Some("7"));
//! ```

use std::fmt;

/// Operation being performed when the repository error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryOperation {
    /// Finding a single entity by ID
    FindById,
    /// Creating a new entity
    Create,
    /// Updating an existing entity
    Update,
    /// Deleting an entity
    Delete,
}

impl fmt::Display for RepositoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FindById => write!(f, "find_by_id"),
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Category of repository error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryErrorKind {
    /// Entity was not found
    NotFound,
    /// Input rejected before it reached the store
    ValidationFailed,
}

impl fmt::Display for RepositoryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::ValidationFailed => write!(f, "validation_failed"),
        }
    }
}

/// Structured repository error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryError {
    /// The operation being performed when the error occurred
    pub operation: RepositoryOperation,
    /// The category of error
    pub kind: RepositoryErrorKind,
    /// Human-readable error message, safe to show to clients
    pub message: String,
    /// The type of entity involved (e.g., "User")
    pub entity_type: Option<String>,
    /// The ID of the entity involved
    pub entity_id: Option<String>,
}

impl RepositoryError {
    /// Create a "not found" error with entity context
    ///
    /// The message reads `"{entity_type} not found"`.
    pub fn not_found(
        operation: RepositoryOperation,
        entity_type: impl Into<String>,
        entity_id: impl fmt::Display,
    ) -> Self {
        let entity_type = entity_type.into();
        Self {
            operation,
            kind: RepositoryErrorKind::NotFound,
            message: format!("{} not found", entity_type),
            entity_type: Some(entity_type),
            entity_id: Some(entity_id.to_string()),
        }
    }

    /// Create a validation failed error
    pub fn validation_failed(
        operation: RepositoryOperation,
        entity_type: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            kind: RepositoryErrorKind::ValidationFailed,
            message: message.into(),
            entity_type: Some(entity_type.into()),
            entity_id: None,
        }
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Repository {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;
        match (&self.entity_type, &self.entity_id) {
            (Some(entity_type), Some(id)) => write!(f, " [{}: {}]", entity_type, id),
            (Some(entity_type), None) => write!(f, " [{}]", entity_type),
            _ => Ok(()),
        }
    }
}

impl std::error::Error for RepositoryError {}
