//! Downloading the current scores as a JSON document.
//!
//! The export keeps the data file's name so the operator can drop it in place
//! of the old one. The download is dated for keeping backups.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::header,
    response::{IntoResponse, Response},
};
use time::{
    Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description,
};

use crate::{AppState, Error, score::ScoreBoard};

/// The state needed to export the scores.
#[derive(Debug, Clone)]
pub struct ExportState {
    pub scores: Arc<Mutex<ScoreBoard>>,
    pub source_file_name: String,
}

impl FromRef<AppState> for ExportState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            scores: state.scores.clone(),
            source_file_name: state.source_file_name.clone(),
        }
    }
}

/// Date format for download file names, e.g. "2024-03-09".
const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

fn dated_file_name(date: Date) -> Result<String, Error> {
    let date = date.format(DATE_FORMAT).map_err(|error| {
        tracing::error!("could not format {date} for a file name: {error}");
        Error::DateFormatError
    })?;

    Ok(format!("scores-{date}.json"))
}

fn json_attachment(state: &ExportState, file_name: &str) -> Result<Response, Error> {
    let json = match state.scores.lock() {
        Ok(scores) => serde_json::to_string_pretty(&*scores)?,
        Err(error) => {
            tracing::error!("could not acquire scores lock: {error}");
            return Err(Error::StateLockError);
        }
    };

    // Quotes would end the file name parameter early.
    let file_name = file_name.replace('"', "");

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        json,
    )
        .into_response())
}

/// Download the scores under the data file's name.
pub async fn export_scores_endpoint(State(state): State<ExportState>) -> Response {
    json_attachment(&state, &state.source_file_name)
        .unwrap_or_else(|error| error.into_response())
}

/// Download the scores under a file name with today's date.
pub async fn download_scores_endpoint(State(state): State<ExportState>) -> Response {
    dated_file_name(OffsetDateTime::now_utc().date())
        .and_then(|file_name| json_attachment(&state, &file_name))
        .unwrap_or_else(|error| error.into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};
    use time::macros::date;

    use crate::{
        score::ScoreBoard,
        test_utils::{assert_content_type, get_header},
    };

    use super::{ExportState, dated_file_name, download_scores_endpoint, export_scores_endpoint};

    fn get_state() -> ExportState {
        let scores: ScoreBoard =
            serde_json::from_str(r#"{"Ana": {"Chess": 3}, "Bo": {"Chess": -1}}"#).unwrap();

        ExportState {
            scores: Arc::new(Mutex::new(scores)),
            source_file_name: "scores.json".to_owned(),
        }
    }

    async fn body_text(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[test]
    fn dated_file_name_pads_month_and_day() {
        assert_eq!(
            dated_file_name(date!(2024 - 03 - 09)),
            Ok("scores-2024-03-09.json".to_owned())
        );
    }

    #[tokio::test]
    async fn export_uses_source_file_name() {
        let response = export_scores_endpoint(State(get_state())).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "application/json");
        assert_eq!(
            get_header(&response, "content-disposition"),
            "attachment; filename=\"scores.json\""
        );
    }

    #[tokio::test]
    async fn export_body_is_the_score_map() {
        let state = get_state();
        let want = state.scores.lock().unwrap().clone();

        let response = export_scores_endpoint(State(state)).await;

        let text = body_text(response).await;
        assert!(text.contains('\n'), "want pretty-printed JSON, got {text}");
        let got: ScoreBoard = serde_json::from_str(&text).unwrap();
        assert_eq!(got, want);
    }

    #[tokio::test]
    async fn download_uses_dated_file_name() {
        let response = download_scores_endpoint(State(get_state())).await;

        assert_eq!(response.status(), StatusCode::OK);
        let disposition = get_header(&response, "content-disposition");
        assert!(
            disposition.starts_with("attachment; filename=\"scores-")
                && disposition.ends_with(".json\""),
            "got {disposition}"
        );
    }
}
