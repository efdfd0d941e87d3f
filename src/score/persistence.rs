//! Saving and restoring score maps in local storage.

use rusqlite::Connection;

use crate::{
    Error,
    score::{
        board::ScoreBoard,
        migration::{parse_score_data, sample_scores},
    },
    storage::{DEFAULT_SCORES_KEY, SCORES_KEY, get_item, set_item},
};

/// Save the whole score map as the current scores.
pub fn persist_scores(scores: &ScoreBoard, connection: &Connection) -> Result<(), Error> {
    let json = serde_json::to_string(scores)?;
    set_item(SCORES_KEY, &json, connection)
}

/// Get the saved score map, `None` if nothing has been saved.
///
/// # Errors
///
/// Returns [Error::InvalidScoreData] if the stored value cannot be parsed.
pub fn restore_scores(connection: &Connection) -> Result<Option<ScoreBoard>, Error> {
    get_item(SCORES_KEY, connection)?
        .map(|text| parse_score_data(&text))
        .transpose()
}

/// Save the scores as they were read from the data file, for [default_scores].
pub fn save_default_snapshot(scores: &ScoreBoard, connection: &Connection) -> Result<(), Error> {
    let json = serde_json::to_string(scores)?;
    set_item(DEFAULT_SCORES_KEY, &json, connection)
}

pub fn get_default_snapshot(connection: &Connection) -> Result<Option<ScoreBoard>, Error> {
    get_item(DEFAULT_SCORES_KEY, connection)?
        .map(|text| parse_score_data(&text))
        .transpose()
}

/// The scores to go back to on reset: the default snapshot, or the sample
/// dataset if there is no usable snapshot.
pub fn default_scores(connection: &Connection) -> ScoreBoard {
    match get_default_snapshot(connection) {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) => sample_scores(),
        Err(error) => {
            tracing::warn!("Ignoring unusable default snapshot: {error}");
            sample_scores()
        }
    }
}
