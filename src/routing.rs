//! Application router configuration with protected and unprotected route definitions.

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    auth::{edit_guard, edit_guard_hx, get_log_in_page, post_log_in, post_log_out},
    endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    scoreboard::{
        add_category_endpoint, add_user_endpoint, adjust_score_endpoint, delete_category_endpoint,
        delete_user_endpoint, download_scores_endpoint, export_scores_endpoint,
        get_scoreboard_page, reset_scores_endpoint, set_score_endpoint,
    },
    theme::{apply_theme_endpoint, reset_theme_endpoint, toggle_theme_endpoint},
};

/// Return a router with all the app's routes.
///
/// The scoreboard can be viewed by anyone, and anyone can switch between
/// light and dark mode for themselves. Every route that changes the scores or
/// the shared theme, or exports the scores, requires edit mode.
pub fn build_router(state: AppState) -> Router {
    let unprotected_routes = Router::new()
        .route(endpoints::ROOT, get(get_scoreboard_page))
        .route(endpoints::LOG_IN_VIEW, get(get_log_in_page))
        .route(endpoints::LOG_IN_API, post(post_log_in))
        .route(endpoints::TOGGLE_THEME, post(toggle_theme_endpoint))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let protected_routes = Router::new()
        .route(endpoints::EXPORT_SCORES, get(export_scores_endpoint))
        .route(endpoints::DOWNLOAD_SCORES, get(download_scores_endpoint))
        .layer(middleware::from_fn_with_state(state.clone(), edit_guard));

    // These POST routes need to use the HX-REDIRECT header for log-in redirects to work properly for HTMX requests.
    let protected_routes = protected_routes.merge(
        Router::new()
            .route(endpoints::LOG_OUT, post(post_log_out))
            .route(endpoints::USERS, post(add_user_endpoint))
            .route(endpoints::DELETE_USER, post(delete_user_endpoint))
            .route(endpoints::CATEGORIES, post(add_category_endpoint))
            .route(endpoints::DELETE_CATEGORY, post(delete_category_endpoint))
            .route(endpoints::SCORES, post(set_score_endpoint))
            .route(endpoints::ADJUST_SCORE, post(adjust_score_endpoint))
            .route(endpoints::RESET_SCORES, post(reset_scores_endpoint))
            .route(endpoints::THEME, post(apply_theme_endpoint))
            .route(endpoints::RESET_THEME, post(reset_theme_endpoint))
            .layer(middleware::from_fn_with_state(state.clone(), edit_guard_hx)),
    );

    protected_routes
        .merge(unprotected_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}
