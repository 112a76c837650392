use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::SearchError;

/// Which search strategy drives a run. Chosen once, before any query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    /// Unsorted scan of every sighting per query.
    Linear,
    /// Sort once by the search order, then bisect per query.
    Binary,
}

impl SearchStrategy {
    pub const ALL: [SearchStrategy; 2] = [SearchStrategy::Linear, SearchStrategy::Binary];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Binary => "binary",
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the short (`l`, `b`) and long (`linear`, `binary`) forms,
/// case-insensitively, ignoring surrounding whitespace.
impl FromStr for SearchStrategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "linear" => Ok(Self::Linear),
            "b" | "binary" => Ok(Self::Binary),
            _ => Err(SearchError::InvalidSelection(s.trim().to_string())),
        }
    }
}
