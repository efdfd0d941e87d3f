//! Shared plumbing for the endpoints that edit the score map.

use std::sync::{Arc, Mutex};

use axum::{
    extract::FromRef,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::html;
use rusqlite::Connection;

use crate::{
    AppState, Error,
    alert::Alert,
    score::{CategoryFilter, ScoreBoard, persist_scores},
    scoreboard::view::{ScoreboardView, scoreboard_section},
};

/// The state needed by the score editing endpoints.
#[derive(Debug, Clone)]
pub struct MutationState {
    pub scores: Arc<Mutex<ScoreBoard>>,
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for MutationState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            scores: state.scores.clone(),
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Apply `mutation` to the score map, save the result and render the
/// scoreboard section for `filter` in edit mode.
///
/// `mutation` returns the alert to show, or `None` if it changed nothing.
/// The scores are only saved when the alert is a success. Both locks are held until the
/// response is rendered, so concurrent edits are applied one at a time. If the
/// mutation or the save fails, the score map is left as it was and an error
/// alert is returned.
pub(super) fn mutate_and_render<F>(
    state: &MutationState,
    filter: CategoryFilter,
    mutation: F,
) -> Response
where
    F: FnOnce(&mut ScoreBoard, &Connection) -> Result<Option<Alert>, Error>,
{
    let mut scores = match state.scores.lock() {
        Ok(scores) => scores,
        Err(error) => {
            tracing::error!("could not acquire scores lock: {error}");
            return Error::StateLockError.into_alert_response();
        }
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    let previous = scores.clone();

    let alert = match mutation(&mut *scores, &*connection) {
        Ok(alert) => alert,
        Err(error) => {
            *scores = previous;
            return error.into_alert_response();
        }
    };

    if alert.as_ref().is_some_and(Alert::is_success) {
        if let Err(error) = persist_scores(&scores, &connection) {
            tracing::error!("Could not save scores, rolling back: {error}");
            *scores = previous;
            return error.into_alert_response();
        }
    }

    let section = scoreboard_section(&ScoreboardView {
        scores: &scores,
        filter: &filter,
        edit_mode: true,
    });

    let markup = html! {
        (section)

        @if let Some(alert) = alert {
            (alert.into_oob_html())
        }
    };

    (StatusCode::OK, Html(markup.into_string())).into_response()
}
