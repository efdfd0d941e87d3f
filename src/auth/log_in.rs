//! This file defines the routes for displaying the log-in page and handling log-in requests.
//! The credential check and cookie handling live in the sibling modules.

use axum::{
    Form,
    extract::{FromRef, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{CookieJar, PrivateCookieJar, cookie::Key};
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::{
    AppState,
    auth::{
        cookie::{is_edit_enabled, set_edit_cookie},
        credentials::check_credentials,
    },
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, LINK_STYLE, base,
        form_card, loading_spinner,
    },
    theme::{COLOR_SCHEME_HINT, ThemeState},
};

pub const INVALID_CREDENTIALS_ERROR_MSG: &str = "Incorrect username or password.";

fn log_in_form(username: &str, error_message: Option<&str>) -> Markup {
    html! {
        form
            hx-post=(endpoints::LOG_IN_API)
            hx-swap="outerHTML"
            hx-indicator="#indicator"
            hx-disabled-elt="#username, #password, #submit-button"
            class="stack"
        {
            div
            {
                label for="username" class=(FORM_LABEL_STYLE) { "Username" }

                input
                    type="text"
                    name="username"
                    id="username"
                    class=(FORM_TEXT_INPUT_STYLE)
                    autocomplete="username"
                    required
                    autofocus
                    value=(username);
            }

            div
            {
                label for="password" class=(FORM_LABEL_STYLE) { "Password" }

                input
                    type="password"
                    name="password"
                    id="password"
                    placeholder="••••••••"
                    class=(FORM_TEXT_INPUT_STYLE)
                    autocomplete="current-password"
                    required;

                @if let Some(error_message) = error_message
                {
                    p class="form-error" { (error_message) }
                }
            }

            button type="submit" id="submit-button" class=(BUTTON_PRIMARY_STYLE)
            {
                span class="htmx-indicator" id="indicator"
                {
                    (loading_spinner())
                }
                "Log in"
            }

            p class="muted"
            {
                "Just looking? "
                a href=(endpoints::ROOT) class=(LINK_STYLE) { "Back to the scoreboard" }
            }
        }
    }
}

/// The state needed to display the log-in page and perform a log-in.
#[derive(Debug, Clone)]
pub struct LogInState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
    pub theme: ThemeState,
}

impl FromRef<AppState> for LogInState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
            theme: ThemeState::from_ref(state),
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<LogInState> for Key {
    fn from_ref(state: &LogInState) -> Self {
        state.cookie_key.clone()
    }
}

/// Display the log-in page, or go straight to the scoreboard if edit mode is
/// already on.
pub async fn get_log_in_page(
    State(state): State<LogInState>,
    jar: PrivateCookieJar,
    cookies: CookieJar,
    headers: HeaderMap,
) -> Response {
    if is_edit_enabled(&jar) {
        return Redirect::to(endpoints::ROOT).into_response();
    }

    let theme = match state.theme.page_theme(&headers, &cookies) {
        Ok(theme) => theme,
        Err(error) => return error.into_response(),
    };

    let content = form_card("Log in to edit the scoreboard", &log_in_form("", None));

    (
        [("accept-ch", COLOR_SCHEME_HINT)],
        base("Log In", &theme, &[], &content),
    )
        .into_response()
}

/// The raw data entered by the user in the log-in form.
#[derive(Clone, Serialize, Deserialize)]
pub struct LogInData {
    pub username: String,
    /// Password entered during log-in.
    pub password: String,
}

/// Handler for log-in requests via the POST method.
///
/// On a successful log-in request, the edit mode cookie is set and the client
/// is redirected to the scoreboard. Otherwise, the form is returned with an
/// error message.
pub async fn post_log_in(
    State(_state): State<LogInState>,
    jar: PrivateCookieJar,
    Form(user_data): Form<LogInData>,
) -> Response {
    if !check_credentials(&user_data.username, &user_data.password) {
        tracing::info!("Rejected log in attempt for {:?}", user_data.username.trim());
        return log_in_form(&user_data.username, Some(INVALID_CREDENTIALS_ERROR_MSG))
            .into_response();
    }

    tracing::info!("Edit mode enabled");

    (
        StatusCode::SEE_OTHER,
        HxRedirect(endpoints::ROOT.to_owned()),
        set_edit_cookie(jar),
    )
        .into_response()
}
