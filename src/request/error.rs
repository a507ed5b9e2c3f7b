use std::path::PathBuf;

use thiserror::Error;

use crate::constraints::ValidationError;

/// Errors raised while loading a request document.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read input file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
