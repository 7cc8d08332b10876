// src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Failures raised by the persistence gateway.
///
/// Row absence is never an error at this layer; gateway operations report it
/// as `Ok(None)` and the handler decides what absence means for the request.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("Constraint violation: {0}")]
  Constraint(String),

  #[error("Database Error: {0}")]
  Database(#[from] sqlx::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  // The operation-specific message is what the caller sees; the store cause
  // is logged but never exposed in the response body.
  #[error("{message}")]
  Store {
    message: String,
    #[source]
    source: StoreError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl AppError {
  /// Wraps a gateway failure with the message the caller should see.
  pub fn store(message: impl Into<String>, source: StoreError) -> Self {
    AppError::Store {
      message: message.into(),
      source,
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Config(_) | AppError::Store { .. } | AppError::Internal(_) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error chain when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");

    let message = match self {
      AppError::Validation(m) | AppError::NotFound(m) => m.clone(),
      AppError::Store { message, .. } => message.clone(),
      AppError::Config(_) => "Server configuration error".to_string(),
      AppError::Internal(_) => "An internal error occurred".to_string(),
    };

    // Error envelope: `{success: false, message}`, never a `data` key.
    HttpResponse::build(self.status_code()).json(json!({
      "success": false,
      "message": message,
    }))
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
