//! Pocketbook is a personal-finance bookkeeping backend.
//!
//! This library provides a bearer-token-authenticated JSON API for storing
//! per-user transactions, budgets, and spending categories. Every stored row
//! is scoped to the owner resolved from the request credential, and every
//! read and write filters by that scope.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

pub mod auth;
pub mod budget;
pub mod category;
pub mod db;
pub mod endpoints;
pub mod pagination;
pub mod routing;
pub mod state;
pub mod transaction;

pub use db::initialize as initialize_db;
pub use routing::build_router;
pub use state::AppState;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request credential was missing, malformed, or failed verification
    /// against the identity provider.
    ///
    /// The inner string is a short reason suitable for the client; details
    /// such as provider error bodies should only be logged on the server.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The requested resource was not found under the caller's identity.
    ///
    /// A row owned by a different user produces this same error, so the
    /// client cannot distinguish "never existed" from "belongs to someone
    /// else".
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to update a transaction that does not exist for the caller
    #[error("tried to update a transaction that is not in the database")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that does not exist for the caller
    #[error("tried to delete a transaction that is not in the database")]
    DeleteMissingTransaction,

    /// Tried to update a budget that does not exist for the caller
    #[error("tried to update a budget that is not in the database")]
    UpdateMissingBudget,

    /// Tried to delete a budget that does not exist for the caller
    #[error("tried to delete a budget that is not in the database")]
    DeleteMissingBudget,

    /// Tried to update a category that does not exist for the caller
    #[error("tried to update a category that is not in the database")]
    UpdateMissingCategory,

    /// Tried to delete a category that does not exist for the caller
    #[error("tried to delete a category that is not in the database")]
    DeleteMissingCategory,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::Unauthorized(reason) => {
                (StatusCode::UNAUTHORIZED, format!("unauthorized: {reason}"))
            }
            Error::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            Error::UpdateMissingTransaction | Error::DeleteMissingTransaction => {
                (StatusCode::NOT_FOUND, "Transaction not found".to_owned())
            }
            Error::UpdateMissingBudget | Error::DeleteMissingBudget => {
                (StatusCode::NOT_FOUND, "Budget not found".to_owned())
            }
            Error::UpdateMissingCategory | Error::DeleteMissingCategory => {
                (StatusCode::NOT_FOUND, "Category not found".to_owned())
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong, check the server logs for more details".to_owned(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod error_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::Error;

    #[tokio::test]
    async fn unauthorized_maps_to_401() {
        let response = Error::Unauthorized("token expired".to_owned()).into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn missing_rows_map_to_404() {
        for error in [
            Error::NotFound,
            Error::UpdateMissingTransaction,
            Error::DeleteMissingTransaction,
            Error::UpdateMissingBudget,
            Error::DeleteMissingBudget,
            Error::UpdateMissingCategory,
            Error::DeleteMissingCategory,
        ] {
            let response = error.into_response();

            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn sql_error_maps_to_500() {
        let response = Error::SqlError(rusqlite::Error::InvalidQuery).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
