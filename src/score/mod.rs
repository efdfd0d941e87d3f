//! The score map: users, derived categories and totals, legacy migration,
//! persistence and the startup load order.

mod board;
mod domain;
mod load;
mod migration;
mod persistence;

pub use board::ScoreBoard;
pub use domain::{CategoryFilter, CategoryName, GENERAL_LABEL, UserName, category_icon};
pub use load::{DataOrigin, load_scores};
pub use persistence::{default_scores, persist_scores};
