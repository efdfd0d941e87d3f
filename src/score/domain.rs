//! Names and view filters for the scoreboard.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Error;

/// The category that a legacy integer score is migrated into.
pub const PRIMARY_CATEGORY: &str = "Atividade";

/// The categories every migrated legacy record gets, in display order.
pub const DEFAULT_CATEGORIES: [&str; 5] =
    ["Atividade", "Experiencia", "Bonus", "Maturidade", "Evento"];

/// The label for the aggregate view across all categories.
pub const GENERAL_LABEL: &str = "General";

/// A validated, non-empty user name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct UserName(String);

impl UserName {
    /// Create a user name from untrusted input, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyUserName] if `name` is empty
    /// after trimming.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyUserName)
        } else {
            Ok(Self(name.to_string()))
        }
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated, non-empty category name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name from untrusted input, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyCategoryName] if `name` is
    /// empty after trimming.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyCategoryName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which scores the table and chart show.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every category, summed into a total per user.
    #[default]
    General,
    /// A single category.
    Category(String),
}

impl CategoryFilter {
    /// Build a filter from the `category` query parameter or the `view` form
    /// field. A missing or blank value selects the aggregate view.
    pub fn from_query(category: Option<&str>) -> Self {
        match category.map(str::trim) {
            None | Some("") => Self::General,
            Some(category) => Self::Category(category.to_owned()),
        }
    }

    /// The value to send back as the `category` query parameter, `None` for
    /// the aggregate view.
    pub fn as_query(&self) -> Option<&str> {
        match self {
            Self::General => None,
            Self::Category(category) => Some(category),
        }
    }

    /// Switch back to the aggregate view if `deleted` is the active category.
    pub fn reset_if_deleted(self, deleted: &str) -> Self {
        match self {
            Self::Category(category) if category == deleted => Self::General,
            filter => filter,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::General => GENERAL_LABEL,
            Self::Category(category) => category,
        }
    }
}

/// The emoji shown next to a category tab.
pub fn category_icon(category: &str) -> &'static str {
    match category {
        GENERAL_LABEL => "📊",
        "Atividade" => "💪",
        "Experiencia" => "⭐",
        "Bonus" => "🎁",
        "Maturidade" => "🌱",
        "Evento" => "🎉",
        _ => "📌",
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use super::{CategoryFilter, CategoryName, UserName, category_icon};

    #[test]
    fn user_name_is_trimmed() {
        let name = UserName::new("  Alice \n").unwrap();

        assert_eq!(name.as_ref(), "Alice");
    }

    #[test]
    fn blank_user_name_is_rejected() {
        assert_eq!(UserName::new("   "), Err(Error::EmptyUserName));
    }

    #[test]
    fn blank_category_name_is_rejected() {
        assert_eq!(CategoryName::new(""), Err(Error::EmptyCategoryName));
    }

    #[test]
    fn missing_or_blank_query_selects_general() {
        assert_eq!(CategoryFilter::from_query(None), CategoryFilter::General);
        assert_eq!(CategoryFilter::from_query(Some(" ")), CategoryFilter::General);
    }

    #[test]
    fn query_selects_category() {
        assert_eq!(
            CategoryFilter::from_query(Some("Bonus")),
            CategoryFilter::Category("Bonus".to_owned())
        );
    }

    #[test]
    fn deleting_active_category_resets_filter() {
        let filter = CategoryFilter::Category("Bonus".to_owned());

        assert_eq!(filter.reset_if_deleted("Bonus"), CategoryFilter::General);
    }

    #[test]
    fn deleting_other_category_keeps_filter() {
        let filter = CategoryFilter::Category("Bonus".to_owned());

        assert_eq!(filter.clone().reset_if_deleted("Evento"), filter);
    }

    #[test]
    fn unknown_category_gets_pin_icon() {
        assert_eq!(category_icon("Atividade"), "💪");
        assert_eq!(category_icon("Chess"), "📌");
    }
}
