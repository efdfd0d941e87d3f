//! The API endpoints URIs.
//!
//! For links to a filtered scoreboard, use [format_scoreboard_url].

use crate::score::CategoryFilter;

/// The scoreboard page, filtered with the `category` query parameter.
pub const ROOT: &str = "/";
/// The route for getting the log in page.
pub const LOG_IN_VIEW: &str = "/log_in";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for unlocking edit mode.
pub const LOG_IN_API: &str = "/api/log_in";
/// The route for leaving edit mode.
pub const LOG_OUT: &str = "/api/log_out";
/// The route to add a user.
pub const USERS: &str = "/api/users";
/// The route to delete a user.
pub const DELETE_USER: &str = "/api/users/delete";
/// The route to add a category.
pub const CATEGORIES: &str = "/api/categories";
/// The route to delete a category.
pub const DELETE_CATEGORY: &str = "/api/categories/delete";
/// The route to overwrite a score.
pub const SCORES: &str = "/api/scores";
/// The route to add to or subtract from a score.
pub const ADJUST_SCORE: &str = "/api/scores/adjust";
/// The route to restore the scores loaded at startup.
pub const RESET_SCORES: &str = "/api/scores/reset";
/// The route to download the scores under the data file's name.
pub const EXPORT_SCORES: &str = "/api/scores/export";
/// The route to download the scores under a dated file name.
pub const DOWNLOAD_SCORES: &str = "/api/scores/download";
/// The route to select a theme preset.
pub const THEME: &str = "/api/theme";
/// The route to flip between light and dark text styles.
pub const TOGGLE_THEME: &str = "/api/theme/toggle";
/// The route to go back to the default theme.
pub const RESET_THEME: &str = "/api/theme/reset";

/// The scoreboard URL showing `filter`.
pub fn format_scoreboard_url(filter: &CategoryFilter) -> String {
    let Some(category) = filter.as_query() else {
        return ROOT.to_owned();
    };

    match serde_urlencoded::to_string(&[("category", category)][..]) {
        Ok(query) => format!("{ROOT}?{query}"),
        Err(error) => {
            tracing::error!("Could not encode category {category:?} as a query: {error}");
            ROOT.to_owned()
        }
    }
}
