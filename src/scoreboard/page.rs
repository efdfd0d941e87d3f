//! The scoreboard page.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use axum_extra::extract::{CookieJar, PrivateCookieJar, cookie::Key};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error,
    auth::is_edit_enabled,
    endpoints,
    html::{BUTTON_SECONDARY_STYLE, CARD_STYLE, HeadElement, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
    score::{CategoryFilter, DataOrigin, ScoreBoard},
    scoreboard::{
        table::ALERT_TARGET,
        view::{ScoreboardView, scoreboard_section},
    },
    theme::{COLOR_SCHEME_HINT, PRESETS, PageTheme, ThemeMode, ThemePreset, ThemeState},
};

/// The state needed to display the scoreboard page.
#[derive(Debug, Clone)]
pub struct ScoreboardState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
    pub scores: Arc<Mutex<ScoreBoard>>,
    pub data_origin: DataOrigin,
    pub theme: ThemeState,
}

impl FromRef<AppState> for ScoreboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
            scores: state.scores.clone(),
            data_origin: state.data_origin,
            theme: ThemeState::from_ref(state),
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<ScoreboardState> for Key {
    fn from_ref(state: &ScoreboardState) -> Self {
        state.cookie_key.clone()
    }
}

/// The query parameters for the scoreboard page.
#[derive(Debug, Deserialize)]
pub struct ScoreboardQuery {
    /// The category to show, or the aggregate view if missing.
    pub category: Option<String>,
}

fn data_origin_notice(origin: DataOrigin) -> Option<&'static str> {
    match origin {
        DataOrigin::Source => None,
        DataOrigin::Cache => Some(
            "The score data file could not be read, \
            showing the scores saved from the last session.",
        ),
        DataOrigin::Sample => Some("No score data was found, showing sample scores."),
    }
}

fn theme_swatch(preset: &ThemePreset, is_active: bool, filter: &CategoryFilter) -> Markup {
    let colour = |key: &str| preset.var(key).unwrap_or_default();
    let style = format!(
        "background: {}; color: {}; border-color: {};",
        colour("--bg"),
        colour("--text"),
        colour("--primary"),
    );

    html! {
        form hx-post=(endpoints::THEME) hx-target-error=(ALERT_TARGET) class="swatch-form"
        {
            input type="hidden" name="theme" value=(preset.name);
            input type="hidden" name="view" value=[filter.as_query()];

            button
                type="submit"
                role="radio"
                aria-checked=(is_active)
                data-active=[is_active.then_some("true")]
                class="swatch"
                style=(style)
                title=(preset.name)
            {
                (preset.name)
            }
        }
    }
}

/// The light/dark switch, shown to every visitor.
fn theme_toggle(theme: &PageTheme, filter: &CategoryFilter) -> Markup {
    let label = match theme.mode {
        ThemeMode::Light => "Dark mode",
        ThemeMode::Dark => "Light mode",
    };

    html! {
        form
            id="theme-toggle"
            class="theme-toggle"
            hx-post=(endpoints::TOGGLE_THEME)
            hx-target-error=(ALERT_TARGET)
        {
            input type="hidden" name="view" value=[filter.as_query()];
            button type="submit" class=(BUTTON_SECONDARY_STYLE) { (label) }
        }
    }
}

fn theme_palette(theme: &PageTheme, filter: &CategoryFilter) -> Markup {
    html! {
        section class=(CARD_STYLE) aria-labelledby="theme-heading"
        {
            h2 id="theme-heading" class="card-title" { "Theme" }

            div class="swatches" role="radiogroup" aria-labelledby="theme-heading"
            {
                @for preset in &PRESETS {
                    (theme_swatch(preset, preset.name == theme.name, filter))
                }
            }

            div class="theme-actions"
            {
                form hx-post=(endpoints::RESET_THEME) hx-target-error=(ALERT_TARGET)
                {
                    input type="hidden" name="view" value=[filter.as_query()];
                    button type="submit" class=(BUTTON_SECONDARY_STYLE) { "Reset theme" }
                }
            }
        }
    }
}

/// Display the scoreboard for the `category` in the query string.
///
/// Edit controls and the theme palette are only shown in edit mode. The
/// light/dark toggle is shown to everyone.
pub async fn get_scoreboard_page(
    State(state): State<ScoreboardState>,
    Query(query): Query<ScoreboardQuery>,
    jar: PrivateCookieJar,
    cookies: CookieJar,
    headers: HeaderMap,
) -> Response {
    let edit_mode = is_edit_enabled(&jar);
    let filter = CategoryFilter::from_query(query.category.as_deref());

    let scores = match state.scores.lock() {
        Ok(scores) => scores,
        Err(error) => {
            tracing::error!("could not acquire scores lock: {error}");
            return Error::StateLockError.into_response();
        }
    };

    let theme = match state.theme.page_theme(&headers, &cookies) {
        Ok(theme) => theme,
        Err(error) => return error.into_response(),
    };

    let content = html! {
        (NavBar::new(endpoints::ROOT, edit_mode).into_html())

        main class=(PAGE_CONTAINER_STYLE)
        {
            (theme_toggle(&theme, &filter))

            @if let Some(notice) = data_origin_notice(state.data_origin) {
                p class="notice" role="status" { (notice) }
            }

            (scoreboard_section(&ScoreboardView {
                scores: &scores,
                filter: &filter,
                edit_mode,
            }))

            @if edit_mode {
                (theme_palette(&theme, &filter))
            }
        }
    };

    let scripts = [HeadElement::ScriptLink(
        "/static/echarts.6.0.0.min.js".to_owned(),
    )];

    (
        [("accept-ch", COLOR_SCHEME_HINT)],
        base("Scoreboard", &theme, &scripts, &content),
    )
        .into_response()
}
