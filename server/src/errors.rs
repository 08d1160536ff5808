// produto_api/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use produto_core::{ProdutoError, ValidationErrors};
use serde_json::json;
use thiserror::Error;

pub const VALIDATION_TITLE: &str = "One or more validation errors occurred.";
const GENERIC_INTERNAL_MESSAGE: &str = "Erro interno ao processar produto";

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(ValidationErrors),

  /// The request could not be decoded (malformed JSON, bad path or query value).
  #[error("Bad Request: {0}")]
  BadRequest(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  /// Holds the message shown to the caller; the cause was logged when this was built.
  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl AppError {
  /// Maps a service failure, using `internal_message` as the public text of any 5xx.
  pub fn from_produto(err: ProdutoError, internal_message: &str) -> Self {
    match err {
      ProdutoError::Validation(errors) => AppError::Validation(errors),
      ProdutoError::NotFound { .. } => AppError::NotFound(err.to_string()),
      ProdutoError::Conflict { id } => {
        tracing::error!(id, "Unresolved write conflict.");
        AppError::Internal(internal_message.to_string())
      }
      ProdutoError::Store(source) => {
        tracing::error!(error = %source, "Store failure.");
        AppError::Internal(internal_message.to_string())
      }
    }
  }
}

impl From<ProdutoError> for AppError {
  fn from(err: ProdutoError) -> Self {
    AppError::from_produto(err, GENERIC_INTERNAL_MESSAGE)
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    if self.status_code().is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, "Responding with error");
    }
    match self {
      AppError::Validation(errors) => HttpResponse::BadRequest().json(json!({
        "title": VALIDATION_TITLE,
        "status": 400,
        "errors": errors.fields(),
      })),
      AppError::BadRequest(m) => HttpResponse::BadRequest().json(json!({
        "title": "Invalid request.",
        "status": 400,
        "detail": m,
      })),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({ "message": m })),
      AppError::Config(_) => HttpResponse::InternalServerError().json(json!({ "message": "Erro de configuração" })),
      AppError::Internal(m) => HttpResponse::InternalServerError().json(json!({ "message": m })),
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
