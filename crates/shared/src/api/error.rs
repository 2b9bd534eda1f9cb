use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every failure a route can produce. Rendered as a plain text body with the
/// status from [`ServerError::code`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
pub enum ServerError {
    /// Missing or malformed request input
    #[error("{message}")]
    Validation { message: String },
    /// A referenced record doesn't exist
    #[error("{message}")]
    NotFound { message: String },
    /// A store constraint rejected the write
    #[error("{message}")]
    Conflict { message: String },
    #[error("not found")]
    RouteNotFound,
    #[error("{}", other_message(.message))]
    Other { message: String },
}

const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

fn other_message(message: &str) -> &str {
    if message.is_empty() {
        INTERNAL_SERVER_ERROR
    } else {
        message
    }
}

impl ServerError {
    pub fn code(&self) -> StatusCode {
        use ServerError::*;
        match self {
            Validation { .. } | NotFound { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Conflict { .. } => StatusCode::BAD_REQUEST,
            RouteNotFound => StatusCode::NOT_FOUND,
            Other { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text sent to the client. Server errors only go into the logs in full
    pub fn response_body(&self) -> String {
        if self.code().is_server_error() {
            INTERNAL_SERVER_ERROR.to_owned()
        } else {
            self.to_string()
        }
    }
}

#[macro_export]
macro_rules! validation_error {
    ($($arg:tt)*) => {
        $crate::api::error::ServerError::Validation { message: format!($($arg)*) }
    };
}

#[macro_export]
macro_rules! not_found_error {
    ($($arg:tt)*) => {
        $crate::api::error::ServerError::NotFound { message: format!($($arg)*) }
    };
}

#[macro_export]
macro_rules! other_error {
    ($($arg:tt)*) => {
        $crate::api::error::ServerError::Other { message: format!($($arg)*) }
    };
}

#[cfg(feature = "backend")]
mod backend {
    use axum::response::{IntoResponse, Response};
    use deadpool_sqlite::{HookError, InteractError, PoolError};
    use rusqlite::ErrorCode;
    use tracing::{error, warn};

    use super::ServerError;

    // Render ServerError into a plain text response
    impl IntoResponse for ServerError {
        fn into_response(self) -> Response {
            let code = self.code();
            if code.is_server_error() {
                error!(%code, error = ?self, "Request failed");
            } else {
                warn!(%code, message = %self, "Request rejected");
            }
            (code, self.response_body()).into_response()
        }
    }

    impl From<rusqlite::Error> for ServerError {
        fn from(err: rusqlite::Error) -> Self {
            match &err {
                rusqlite::Error::SqliteFailure(e, Some(msg))
                    if e.code == ErrorCode::ConstraintViolation =>
                {
                    ServerError::Conflict {
                        message: constraint_message(msg),
                    }
                }
                _ => other_error!("Database error: {:?}", err),
            }
        }
    }

    /// Turns sqlite's "UNIQUE constraint failed: user.username, ..." into a
    /// message about the first field named
    pub(crate) fn constraint_message(msg: &str) -> String {
        let field = |rest: &str| {
            let first = rest.split(',').next().unwrap_or(rest).trim();
            first.rsplit('.').next().unwrap_or(first).to_owned()
        };

        if let Some(rest) = msg.strip_prefix("UNIQUE constraint failed: ") {
            format!("{} must be unique", field(rest))
        } else if let Some(rest) = msg.strip_prefix("NOT NULL constraint failed: ") {
            format!("{} is required", field(rest))
        } else {
            msg.to_owned()
        }
    }

    impl From<InteractError> for ServerError {
        fn from(err: InteractError) -> Self {
            other_error!("Database interact: {:?}", err)
        }
    }

    impl From<PoolError> for ServerError {
        fn from(err: PoolError) -> Self {
            other_error!("Database pool: {:?}", err)
        }
    }

    impl From<ServerError> for HookError {
        fn from(err: ServerError) -> Self {
            Self::Message(err.to_string())
        }
    }
}
