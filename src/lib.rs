//! Scoreboard is a small web app for tracking points per person across a
//! handful of categories.
//!
//! This library provides a REST API that directly serves HTML pages. Anyone
//! can view the scoreboard; editing is unlocked by logging in with the
//! built-in credentials.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod auth;
mod db;
mod endpoints;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod score;
mod scoreboard;
mod stats;
mod storage;
mod theme;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use logging::logging_middleware;
pub use routing::build_router;
pub use score::{DataOrigin, ScoreBoard, load_scores};

use crate::{
    alert::Alert,
    internal_server_error::{InternalServerError, render_internal_server_error},
    not_found::get_404_not_found_response,
};

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
    /// An empty string was used as a user name.
    #[error("User name cannot be empty")]
    EmptyUserName,

    /// An empty string was used as a category name.
    #[error("Category name cannot be empty")]
    EmptyCategoryName,

    /// A user with the same name is already on the scoreboard.
    #[error("the user \"{0}\" already exists")]
    DuplicateUser(String),

    /// A category with the same name already exists for at least one user.
    #[error("the category \"{0}\" already exists")]
    DuplicateCategory(String),

    /// The named user is not on the scoreboard.
    #[error("the user \"{0}\" does not exist")]
    UserNotFound(String),

    /// A score edit was not a whole number.
    #[error("\"{0}\" is not a whole number")]
    InvalidScore(String),

    /// The score data source could not be read.
    ///
    /// Callers should pass in the path and the original error as a string.
    #[error("could not read score data from \"{0}\": {1}")]
    SourceUnavailable(String, String),

    /// The score data was read but is not in either of the supported shapes.
    #[error("invalid score data: {0}")]
    InvalidScoreData(String),

    /// The saved theme is not a `{"name": ..., "vars": {...}}` object.
    #[error("invalid theme data: {0}")]
    InvalidThemeData(String),

    /// An error occurred while serializing a struct as JSON
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),

    /// Today's date could not be formatted for a file name.
    #[error("could not format the date")]
    DateFormatError,

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// Could not acquire the lock on the in-memory scores or theme state.
    #[error("could not acquire the application state lock")]
    StateLockError,
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

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::JSONSerializationError(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::DatabaseLockError | Error::StateLockError => {
                render_internal_server_error(InternalServerError {
                    description: "Busy",
                    fix: "The scoreboard is in a bad state. Restart the server and try again.",
                })
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                render_internal_server_error(Default::default())
            }
        }
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        match self {
            Error::EmptyUserName | Error::EmptyCategoryName => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid name".to_owned(),
                    details: "Please enter a name that is not blank.".to_owned(),
                },
            )
                .into_response(),
            Error::DuplicateUser(name) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Duplicate user".to_owned(),
                    details: format!(
                        "{name} is already on the scoreboard. Choose a different name."
                    ),
                },
            )
                .into_response(),
            Error::DuplicateCategory(name) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Duplicate category".to_owned(),
                    details: format!("The category {name} already exists."),
                },
            )
                .into_response(),
            Error::UserNotFound(name) => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not update score".to_owned(),
                    details: format!(
                        "{name} is not on the scoreboard. \
                        Try refreshing the page to see if they have been removed."
                    ),
                },
            )
                .into_response(),
            Error::InvalidScore(value) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid score".to_owned(),
                    details: format!("{value:?} is not a whole number."),
                },
            )
                .into_response(),
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Something went wrong".to_owned(),
                        details: "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                    },
                )
                    .into_response()
            }
        }
    }
}
