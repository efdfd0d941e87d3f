//! The in-memory score map and the operations that edit it.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    score::domain::{CategoryFilter, CategoryName, UserName},
};

/// The scores of one user, keyed by category.
pub type UserScores = BTreeMap<String, i64>;

/// Every user's scores, keyed by user name.
///
/// Categories are not stored separately: a category exists while at least one
/// user has a score for it. Users and categories iterate in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreBoard(BTreeMap<String, UserScores>);

impl ScoreBoard {
    pub fn new(records: BTreeMap<String, UserScores>) -> Self {
        Self(records)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn user_count(&self) -> usize {
        self.0.len()
    }

    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn contains_user(&self, user: &str) -> bool {
        self.0.contains_key(user)
    }

    /// The union of the category keys of every user.
    pub fn categories(&self) -> BTreeSet<String> {
        self.0
            .values()
            .flat_map(|scores| scores.keys().cloned())
            .collect()
    }

    /// The score of `user` in `category`, where a missing entry counts as zero.
    pub fn score(&self, user: &str, category: &str) -> i64 {
        self.0
            .get(user)
            .and_then(|scores| scores.get(category))
            .copied()
            .unwrap_or(0)
    }

    /// The sum of every score of `user`, zero for unknown users.
    pub fn total(&self, user: &str) -> i64 {
        self.0
            .get(user)
            .map(|scores| {
                scores
                    .values()
                    .fold(0i64, |total, &score| total.saturating_add(score))
            })
            .unwrap_or(0)
    }

    /// One value per user in name order: the total for the aggregate view or
    /// the category score otherwise.
    pub fn values_for(&self, filter: &CategoryFilter) -> Vec<i64> {
        self.users()
            .map(|user| match filter {
                CategoryFilter::General => self.total(user),
                CategoryFilter::Category(category) => self.score(user, category),
            })
            .collect()
    }

    /// Add a user with a zero score in every known category.
    ///
    /// # Errors
    ///
    /// Returns [Error::DuplicateUser] if the user is already on the board.
    pub fn add_user(&mut self, name: &UserName) -> Result<(), Error> {
        if self.contains_user(name.as_ref()) {
            return Err(Error::DuplicateUser(name.to_string()));
        }

        let scores = self
            .categories()
            .into_iter()
            .map(|category| (category, 0))
            .collect();
        self.0.insert(name.to_string(), scores);

        Ok(())
    }

    /// Remove a user and all their scores. Returns whether the user existed.
    pub fn delete_user(&mut self, name: &str) -> bool {
        self.0.remove(name).is_some()
    }

    /// Add a category with a zero score for every user.
    ///
    /// With no users on the board the category cannot exist yet, since the
    /// category set is derived from user records.
    ///
    /// # Errors
    ///
    /// Returns [Error::DuplicateCategory] if any user already has the category.
    pub fn add_category(&mut self, name: &CategoryName) -> Result<(), Error> {
        if self.categories().contains(name.as_ref()) {
            return Err(Error::DuplicateCategory(name.to_string()));
        }

        for scores in self.0.values_mut() {
            scores.insert(name.to_string(), 0);
        }

        Ok(())
    }

    /// Remove a category from every user. Returns whether any user had it.
    pub fn delete_category(&mut self, name: &str) -> bool {
        let mut removed = false;

        for scores in self.0.values_mut() {
            removed |= scores.remove(name).is_some();
        }

        removed
    }

    /// Overwrite the score of `user` in `category`.
    ///
    /// # Errors
    ///
    /// Returns [Error::UserNotFound] if the user is not on the board.
    pub fn set_score(
        &mut self,
        user: &str,
        category: &CategoryName,
        value: i64,
    ) -> Result<(), Error> {
        let scores = self
            .0
            .get_mut(user)
            .ok_or_else(|| Error::UserNotFound(user.to_owned()))?;

        scores.insert(category.to_string(), value);

        Ok(())
    }

    /// Add `delta` to the score of `user` in `category` and return the new score.
    ///
    /// # Errors
    ///
    /// Returns [Error::UserNotFound] if the user is not on the board.
    pub fn adjust_score(
        &mut self,
        user: &str,
        category: &CategoryName,
        delta: i64,
    ) -> Result<i64, Error> {
        let scores = self
            .0
            .get_mut(user)
            .ok_or_else(|| Error::UserNotFound(user.to_owned()))?;

        let score = scores.entry(category.to_string()).or_insert(0);
        *score = score.saturating_add(delta);

        Ok(*score)
    }
}
