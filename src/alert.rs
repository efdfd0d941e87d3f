//! Alert fragments for displaying success and error messages to users.
//!
//! Error alerts are swapped into `#alert-container` by the htmx
//! `response-targets` extension. Success alerts ride along with a normal
//! response as an out-of-band swap.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::{Markup, html};

/// A dismissable message shown at the bottom of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// Something worked, with extra details.
    Success { message: String, details: String },
    /// Something worked.
    SuccessSimple { message: String },
    /// Nothing changed, and the user should know why.
    Info { message: String, details: String },
    /// Something went wrong and the user should know what to do about it.
    Error { message: String, details: String },
}

impl Alert {
    fn parts(&self) -> (&str, &str, &str) {
        match self {
            Alert::Success { message, details } => ("alert alert-success", message, details),
            Alert::SuccessSimple { message } => ("alert alert-success", message, ""),
            Alert::Info { message, details } => ("alert alert-info", message, details),
            Alert::Error { message, details } => ("alert alert-error", message, details),
        }
    }

    /// Whether the alert reports a change that went through.
    pub fn is_success(&self) -> bool {
        matches!(self, Alert::Success { .. } | Alert::SuccessSimple { .. })
    }

    /// Render the alert as an element to be placed in `#alert-container`.
    pub fn into_html(self) -> Markup {
        let (class, message, details) = self.parts();

        html! {
            div class=(class) role="alert"
            {
                p class="alert-message" { (message) }

                @if !details.is_empty() {
                    p class="alert-details" { (details) }
                }

                button
                    type="button"
                    class="alert-close"
                    aria-label="Dismiss"
                    onclick="this.parentElement.remove()"
                {
                    "×"
                }
            }
        }
    }

    /// Render the alert so that htmx swaps it into `#alert-container` out of
    /// band, next to whatever the main response replaces.
    pub fn into_oob_html(self) -> Markup {
        html! {
            div id="alert-container" hx-swap-oob="true"
            {
                (self.into_html())
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        (StatusCode::OK, Html(self.into_html().into_string())).into_response()
    }
}
