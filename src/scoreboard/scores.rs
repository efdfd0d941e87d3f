//! Endpoints for editing, adjusting and resetting scores.

use axum::{Form, extract::State, response::Response};
use serde::Deserialize;

use crate::{
    Error,
    alert::Alert,
    score::{CategoryFilter, CategoryName, default_scores},
    scoreboard::mutation::{MutationState, mutate_and_render},
};

/// The form data for the inline score editor.
///
/// `value` is kept as text so that a bad entry can be reported back to the
/// user instead of being rejected by the form extractor.
#[derive(Debug, Deserialize)]
pub struct ScoreForm {
    pub user: String,
    pub category: String,
    pub value: String,
    #[serde(default)]
    pub view: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AdjustForm {
    pub user: String,
    pub category: String,
    pub delta: i64,
    #[serde(default)]
    pub view: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ViewForm {
    #[serde(default)]
    pub view: Option<String>,
}

fn parse_score(value: &str) -> Result<i64, Error> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidScore(value.to_owned()))
}

/// Overwrite a score with the value typed into the score editor.
pub async fn set_score_endpoint(
    State(state): State<MutationState>,
    Form(form): Form<ScoreForm>,
) -> Response {
    let filter = CategoryFilter::from_query(form.view.as_deref());

    mutate_and_render(&state, filter, |scores, _| {
        let value = parse_score(&form.value)?;
        let category = CategoryName::new(&form.category)?;
        scores.set_score(&form.user, &category, value)?;
        tracing::info!("Set {} {category} score to {value}", form.user);

        Ok(Some(Alert::SuccessSimple {
            message: format!("Updated the {category} score for {}", form.user),
        }))
    })
}

/// Add to or subtract from a score.
pub async fn adjust_score_endpoint(
    State(state): State<MutationState>,
    Form(form): Form<AdjustForm>,
) -> Response {
    let filter = CategoryFilter::from_query(form.view.as_deref());

    mutate_and_render(&state, filter, |scores, _| {
        let category = CategoryName::new(&form.category)?;
        let score = scores.adjust_score(&form.user, &category, form.delta)?;
        tracing::info!("Adjusted {} {category} score to {score}", form.user);

        Ok(Some(Alert::SuccessSimple {
            message: format!("Updated the {category} score for {}", form.user),
        }))
    })
}

/// Throw away every edit and go back to the scores loaded at startup.
pub async fn reset_scores_endpoint(
    State(state): State<MutationState>,
    Form(form): Form<ViewForm>,
) -> Response {
    let filter = CategoryFilter::from_query(form.view.as_deref());

    mutate_and_render(&state, filter, |scores, connection| {
        *scores = default_scores(connection);
        tracing::info!("Reset scores");

        Ok(Some(Alert::Success {
            message: "Scores reset".to_owned(),
            details: "The scoreboard is back to the original scores.".to_owned(),
        }))
    })
}
