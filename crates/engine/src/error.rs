use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Strategy name outside {linear, binary}.
    InvalidSelection(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSelection(choice) => {
                write!(f, "invalid search method '{choice}' (expected linear or binary)")
            }
        }
    }
}

impl std::error::Error for SearchError {}
