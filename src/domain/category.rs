use serde::{Deserialize, Serialize};

pub const INCOME_CATEGORY: &str = "Income";
pub const DEFAULT_EXPENSE_CATEGORY: &str = "Miscellaneous";

/// A normalized, non-empty category label.
///
/// Normalization trims surrounding whitespace, uppercases the first character
/// and lowercases the rest ("  groceries " -> "Groceries"). Blank input falls
/// back to [`DEFAULT_EXPENSE_CATEGORY`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::miscellaneous();
        }

        let mut chars = trimmed.chars();
        let normalized = match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => DEFAULT_EXPENSE_CATEGORY.to_string(),
        };
        Self(normalized)
    }

    pub fn income() -> Self {
        Self(INCOME_CATEGORY.to_string())
    }

    pub fn miscellaneous() -> Self {
        Self(DEFAULT_EXPENSE_CATEGORY.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_income(&self) -> bool {
        self.0 == INCOME_CATEGORY
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::miscellaneous()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
