//! Route handlers for selecting, toggling and resetting the theme.
//!
//! Every handler answers with an HTMX redirect back to the scoreboard view the
//! request came from, so the page is redrawn with the new colours.

use axum::{
    Form,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use axum_htmx::HxRedirect;
use serde::Deserialize;

use crate::{
    Error,
    endpoints::format_scoreboard_url,
    score::CategoryFilter,
    theme::{
        ThemeState,
        cookie::{clear_mode_cookie, mode_from_cookies, set_mode_cookie},
        store::{ColorSchemePreference, apply_theme, reset_theme, resolve_page_theme},
    },
};

/// The form data for selecting a theme preset.
#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    pub theme: String,
    /// The category filter of the page the form was submitted from.
    #[serde(default)]
    pub view: Option<String>,
}

/// The form data for the theme buttons that take no input.
#[derive(Debug, Deserialize)]
pub struct ThemeViewForm {
    #[serde(default)]
    pub view: Option<String>,
}

fn redirect_to_view(jar: CookieJar, view: Option<&str>) -> Response {
    let url = format_scoreboard_url(&CategoryFilter::from_query(view));
    (jar, HxRedirect(url), StatusCode::OK).into_response()
}

/// Select a theme preset. Unknown presets are ignored.
///
/// Selecting a preset also drops the caller's light/dark toggle.
pub async fn apply_theme_endpoint(
    State(state): State<ThemeState>,
    jar: CookieJar,
    Form(form): Form<ThemeForm>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match apply_theme(&form.theme, &connection) {
        Ok(true) => {
            tracing::info!("Applied theme {:?}", form.theme);
            redirect_to_view(clear_mode_cookie(jar), form.view.as_deref())
        }
        Ok(false) => redirect_to_view(jar, form.view.as_deref()),
        Err(error) => error.into_alert_response(),
    }
}

/// Flip between light and dark text styles without changing the preset.
///
/// Open to every visitor: the choice is kept in the visitor's own cookie.
pub async fn toggle_theme_endpoint(
    State(state): State<ThemeState>,
    headers: HeaderMap,
    jar: CookieJar,
    Form(form): Form<ThemeViewForm>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    let current = resolve_page_theme(
        &connection,
        ColorSchemePreference::from_headers(&headers),
        mode_from_cookies(&jar),
    );
    let mode = current.mode.toggled();
    tracing::debug!("Toggled theme mode to {}", mode.as_str());

    redirect_to_view(set_mode_cookie(jar, mode), form.view.as_deref())
}

/// Forget the selected theme and go back to the default preset.
pub async fn reset_theme_endpoint(
    State(state): State<ThemeState>,
    jar: CookieJar,
    Form(form): Form<ThemeViewForm>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    if let Err(error) = reset_theme(&connection) {
        return error.into_alert_response();
    }

    redirect_to_view(clear_mode_cookie(jar), form.view.as_deref())
}
