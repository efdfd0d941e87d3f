//! Parsing score documents, including the legacy one-number-per-user shape.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{
    Error,
    score::{
        board::{ScoreBoard, UserScores},
        domain::{DEFAULT_CATEGORIES, PRIMARY_CATEGORY},
    },
};

/// A user's entry as it may appear in a score document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawUserRecord {
    /// The old format: a single score per user.
    Legacy(i64),
    /// A score per category.
    Categorised(UserScores),
}

/// Convert raw records into a score board.
///
/// A legacy score is moved into the primary category and every other default
/// category starts at zero. Categorised records are kept as they are.
pub fn migrate(raw: BTreeMap<String, RawUserRecord>) -> ScoreBoard {
    let records = raw
        .into_iter()
        .map(|(user, record)| {
            let scores = match record {
                RawUserRecord::Legacy(score) => DEFAULT_CATEGORIES
                    .iter()
                    .map(|&category| {
                        let value = if category == PRIMARY_CATEGORY { score } else { 0 };
                        (category.to_owned(), value)
                    })
                    .collect(),
                RawUserRecord::Categorised(scores) => scores,
            };

            (user, scores)
        })
        .collect();

    ScoreBoard::new(records)
}

/// Parse a JSON score document in either shape, records may be mixed.
///
/// # Errors
///
/// Returns [Error::InvalidScoreData] if `text` is not a JSON object of
/// integers or objects of integers.
pub fn parse_score_data(text: &str) -> Result<ScoreBoard, Error> {
    let raw: BTreeMap<String, RawUserRecord> =
        serde_json::from_str(text).map_err(|error| Error::InvalidScoreData(error.to_string()))?;

    Ok(migrate(raw))
}

/// The built-in dataset used when there is nothing else to show.
pub fn sample_scores() -> ScoreBoard {
    let sample: [(&str, [i64; 5]); 3] = [
        ("Alice", [15, 20, 5, 10, 8]),
        ("Bob", [-10, 15, -5, 8, 2]),
        ("Charlie", [5, 12, 3, 7, 6]),
    ];

    let records = sample
        .into_iter()
        .map(|(user, scores)| {
            let scores = DEFAULT_CATEGORIES
                .iter()
                .zip(scores)
                .map(|(category, score)| (category.to_string(), score))
                .collect();
            (user.to_owned(), scores)
        })
        .collect();

    ScoreBoard::new(records)
}
