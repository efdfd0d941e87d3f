//! Endpoints for adding and removing categories.

use axum::{Form, extract::State, response::Response};
use serde::Deserialize;

use crate::{
    alert::Alert,
    score::{CategoryFilter, CategoryName},
    scoreboard::{
        mutation::{MutationState, mutate_and_render},
        users::NameForm,
    },
};

#[derive(Debug, Deserialize)]
pub struct CategoryForm {
    pub category: String,
    #[serde(default)]
    pub view: Option<String>,
}

/// Add a category with a zero score for every user.
pub async fn add_category_endpoint(
    State(state): State<MutationState>,
    Form(form): Form<NameForm>,
) -> Response {
    let filter = CategoryFilter::from_query(form.view.as_deref());

    mutate_and_render(&state, filter, |scores, _| {
        let name = CategoryName::new(&form.name)?;
        scores.add_category(&name)?;

        if scores.is_empty() {
            tracing::debug!("Category {name} not added since there are no users");
            return Ok(Some(Alert::Info {
                message: "No category added".to_owned(),
                details: format!(
                    "Categories belong to users. Add a user before adding {name}."
                ),
            }));
        }

        tracing::info!("Added category {name}");
        Ok(Some(Alert::SuccessSimple {
            message: format!("Added the category {name}"),
        }))
    })
}

/// Remove a category from every user.
///
/// If the category was being viewed, the aggregate view is shown instead.
pub async fn delete_category_endpoint(
    State(state): State<MutationState>,
    Form(form): Form<CategoryForm>,
) -> Response {
    let filter = CategoryFilter::from_query(form.view.as_deref()).reset_if_deleted(&form.category);

    mutate_and_render(&state, filter, |scores, _| {
        if !scores.delete_category(&form.category) {
            return Ok(None);
        }

        tracing::info!("Deleted category {}", form.category);
        Ok(Some(Alert::SuccessSimple {
            message: format!("Removed the category {}", form.category),
        }))
    })
}
