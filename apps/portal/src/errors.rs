use serde_json::{json, Value};
use thiserror::Error;

/// Application-level error type.
/// Filtering and aggregation never fail; only page resolution, selection
/// parsing and startup plumbing produce one of these.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable code for the error body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Process exit status: 2 for caller mistakes, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::NotFound(_) | AppError::Validation(_) => 2,
            AppError::Internal(_) => 1,
        }
    }

    /// Renders the error as the JSON body printed in place of a page view.
    /// Internal details are logged, not exposed.
    pub fn to_body(&self) -> Value {
        let message = match self {
            AppError::NotFound(msg) | AppError::Validation(msg) => msg.clone(),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal error occurred".to_string()
            }
        };

        json!({
            "error": {
                "code": self.code(),
                "message": message
            }
        })
    }
}
