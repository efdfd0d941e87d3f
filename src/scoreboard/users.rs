//! Endpoints for adding and removing users.

use axum::{Form, extract::State, response::Response};
use serde::Deserialize;

use crate::{
    alert::Alert,
    score::{CategoryFilter, UserName},
    scoreboard::mutation::{MutationState, mutate_and_render},
};

/// The form data for the add user and add category forms.
#[derive(Debug, Deserialize)]
pub struct NameForm {
    pub name: String,
    /// The category filter of the page the form was submitted from.
    #[serde(default)]
    pub view: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UserForm {
    pub user: String,
    #[serde(default)]
    pub view: Option<String>,
}

/// Add a user with a zero score in every category.
pub async fn add_user_endpoint(
    State(state): State<MutationState>,
    Form(form): Form<NameForm>,
) -> Response {
    let filter = CategoryFilter::from_query(form.view.as_deref());

    mutate_and_render(&state, filter, |scores, _| {
        let name = UserName::new(&form.name)?;
        scores.add_user(&name)?;
        tracing::info!("Added user {name}");

        Ok(Some(Alert::SuccessSimple {
            message: format!("Added {name} to the scoreboard"),
        }))
    })
}

/// Remove a user and all of their scores. Unknown users are ignored.
pub async fn delete_user_endpoint(
    State(state): State<MutationState>,
    Form(form): Form<UserForm>,
) -> Response {
    let filter = CategoryFilter::from_query(form.view.as_deref());

    mutate_and_render(&state, filter, |scores, _| {
        if !scores.delete_user(&form.user) {
            tracing::debug!("Ignoring request to delete unknown user {:?}", form.user);
            return Ok(None);
        }

        tracing::info!("Deleted user {}", form.user);
        Ok(Some(Alert::SuccessSimple {
            message: format!("Removed {} from the scoreboard", form.user),
        }))
    })
}
