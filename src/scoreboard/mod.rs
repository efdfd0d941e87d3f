//! The scoreboard page and the endpoints that edit the scores.
//!
//! Every edit endpoint answers with a fresh `#scoreboard` section, so the
//! table, chart and statistics always agree with the saved scores.

mod categories;
mod chart;
mod export;
mod mutation;
mod page;
mod scores;
mod table;
mod users;
mod view;

pub use categories::{add_category_endpoint, delete_category_endpoint};
pub use export::{download_scores_endpoint, export_scores_endpoint};
pub use page::get_scoreboard_page;
pub use scores::{adjust_score_endpoint, reset_scores_endpoint, set_score_endpoint};
pub use users::{add_user_endpoint, delete_user_endpoint};
