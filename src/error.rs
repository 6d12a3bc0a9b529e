//! Error taxonomy for store operations.

use crate::domain::ProductId;
use std::path::PathBuf;

/// Coarse classification used by callers that only need to pick a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Validation,
    Persistence,
}

/// Why a create request was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure {
    #[error("product \"{title}\" already exists")]
    AlreadyExists { title: String },

    #[error("code \"{code}\" is already in use, change it on product \"{title}\"")]
    CodeCollision { code: String, title: String },

    #[error("product \"{title}\" is missing required fields: {}", .missing.join(", "))]
    IncompleteFields {
        title: String,
        missing: Vec<&'static str>,
    },

    #[error("no product id left after {max}")]
    IdSpaceExhausted { max: ProductId },
}

#[derive(Debug, thiserror::Error)]
pub enum PersistenceSource {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed product file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Product with id {id} does not exist")]
    NotFound { id: ProductId },

    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error("persistence failure on {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: PersistenceSource,
    },
}

impl StoreError {
    pub(crate) fn persistence(path: impl Into<PathBuf>, source: impl Into<PersistenceSource>) -> Self {
        StoreError::Persistence {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::NotFound { .. } => ErrorKind::NotFound,
            StoreError::Validation(_) => ErrorKind::Validation,
            StoreError::Persistence { .. } => ErrorKind::Persistence,
        }
    }
}
