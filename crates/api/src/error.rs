use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{Map, Value};

/// Application-level error type for HTTP handlers.
///
/// The API contract fixes, per route, both the JSON field name (`message`,
/// `errorMessage`, or `error`) and the message text, so every variant
/// carries its own key/message pair rather than deriving them from a shared
/// taxonomy. Implements [`IntoResponse`] to produce the single-field JSON
/// error bodies clients depend on.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required field was missing or empty. Always a 400.
    #[error("{message}")]
    Validation {
        key: &'static str,
        message: &'static str,
    },

    /// No record matched the given id. The status varies by route (400 on
    /// reads, 404 on writes).
    #[error("{message}")]
    NoMatch {
        status: StatusCode,
        key: &'static str,
        message: &'static str,
    },

    /// The storage call itself failed. Always a 500; the underlying sqlx
    /// error is logged server-side and never leaked to the client.
    #[error("{message}")]
    Store {
        key: &'static str,
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation(key: &'static str, message: &'static str) -> Self {
        AppError::Validation { key, message }
    }

    pub fn no_match(status: StatusCode, key: &'static str, message: &'static str) -> Self {
        AppError::NoMatch {
            status,
            key,
            message,
        }
    }

    /// Adapter for `map_err` on repository calls:
    ///
    /// ```ignore
    /// ProjectRepo::list(&pool).await.map_err(AppError::store("message", "..."))?
    /// ```
    pub fn store(
        key: &'static str,
        message: &'static str,
    ) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| AppError::Store {
            key,
            message,
            source,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, key, message) = match self {
            AppError::Validation { key, message } => (StatusCode::BAD_REQUEST, key, message),
            AppError::NoMatch {
                status,
                key,
                message,
            } => (status, key, message),
            AppError::Store {
                key,
                message,
                source,
            } => {
                tracing::error!(error = %source, "Storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, key, message)
            }
        };

        let mut body = Map::new();
        body.insert(key.to_string(), Value::String(message.to_string()));
        (status, Json(Value::Object(body))).into_response()
    }
}
