use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use crate::money;

/// Error taxonomy for the core operations. Every variant surfaces distinctly
/// at the transport boundary so callers can pick the right response.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("unknown {entity} id(s): {}", format_ids(.missing))]
    ReferentialIntegrity {
        entity: &'static str,
        missing: Vec<Uuid>,
    },

    #[error(
        "payment of {} exceeds remaining balance of {}",
        money::format(*.attempted),
        money::format(*.remaining)
    )]
    Overpayment { attempted: i64, remaining: i64 },

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

fn format_ids(ids: &[Uuid]) -> String {
    ids.iter()
        .map(Uuid::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::ReferentialIntegrity { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Overpayment { .. } => StatusCode::CONFLICT,
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("{self}");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
