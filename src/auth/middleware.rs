//! Middleware that keeps the editing routes behind the edit mode cookie.

use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};
use axum_htmx::HxRedirect;

use crate::{AppState, auth::cookie::is_edit_enabled, endpoints};

/// The state needed for the edit guard middleware.
#[derive(Clone)]
pub struct EditGuardState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
}

impl FromRef<AppState> for EditGuardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<EditGuardState> for Key {
    fn from_ref(state: &EditGuardState) -> Self {
        state.cookie_key.clone()
    }
}

/// How a request without edit mode is turned away.
#[derive(Debug, Clone, Copy)]
enum Rejection {
    /// A plain `303 See Other`, for links the browser follows itself.
    Redirect,
    /// An `HX-Redirect` header, for requests sent by htmx.
    HxRedirect,
}

impl Rejection {
    fn to_log_in(self) -> Response {
        match self {
            Rejection::Redirect => Redirect::to(endpoints::LOG_IN_VIEW).into_response(),
            Rejection::HxRedirect => (
                HxRedirect(endpoints::LOG_IN_VIEW.to_owned()),
                StatusCode::OK,
            )
                .into_response(),
        }
    }
}

async fn guard(
    state: EditGuardState,
    request: Request,
    next: Next,
    rejection: Rejection,
) -> Response {
    let (mut parts, body) = request.into_parts();

    let edit_mode = match PrivateCookieJar::from_request_parts(&mut parts, &state).await {
        Ok(jar) => is_edit_enabled(&jar),
        Err(error) => {
            tracing::error!("Could not read cookies: {error:?}");
            false
        }
    };

    if !edit_mode {
        tracing::debug!(
            "Rejected {} {} without edit mode",
            parts.method,
            parts.uri.path()
        );
        return rejection.to_log_in();
    }

    next.run(Request::from_parts(parts, body)).await
}

/// Only let the request through in edit mode, otherwise redirect to the
/// log-in page.
///
/// Used for plain links such as the score downloads.
pub async fn edit_guard(
    State(state): State<EditGuardState>,
    request: Request,
    next: Next,
) -> Response {
    guard(state, request, next, Rejection::Redirect).await
}

/// Like [edit_guard], but answers with an `HX-Redirect` so that htmx requests
/// load the log-in page instead of swapping it into the scoreboard.
pub async fn edit_guard_hx(
    State(state): State<EditGuardState>,
    request: Request,
    next: Next,
) -> Response {
    guard(state, request, next, Rejection::HxRedirect).await
}
