//! Sort options offered by the sort selector.

use std::{fmt::Display, str::FromStr};

use thiserror::Error;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortChoice {
    #[default]
    Relevance,
    Newest,
    Oldest,
    Members,
}

impl SortChoice {
    /// All options in the order the selector lists them.
    pub const ALL: [SortChoice; 4] = [
        SortChoice::Relevance,
        SortChoice::Newest,
        SortChoice::Oldest,
        SortChoice::Members,
    ];

    /// Machine value, used as the `<option>` value.
    pub fn value(self) -> &'static str {
        match self {
            SortChoice::Relevance => "relevance",
            SortChoice::Newest => "newest",
            SortChoice::Oldest => "oldest",
            SortChoice::Members => "members",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortChoice::Relevance => "Relevance",
            SortChoice::Newest => "Newest First",
            SortChoice::Oldest => "Oldest First",
            SortChoice::Members => "Most Members",
        }
    }
}

impl Display for SortChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort option: {0:?}")]
pub struct UnknownOptionError(pub String);

impl FromStr for SortChoice {
    type Err = UnknownOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortChoice::ALL
            .into_iter()
            .find(|choice| choice.value() == s)
            .ok_or_else(|| UnknownOptionError(s.to_string()))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_option_value_parses_back() {
        for choice in SortChoice::ALL {
            assert_eq!(choice.value().parse::<SortChoice>(), Ok(choice));
        }
    }

    #[test]
    fn labels_match_selector_text() {
        let labels = SortChoice::ALL.map(SortChoice::label);
        assert_eq!(labels, ["Relevance", "Newest First", "Oldest First", "Most Members"]);
    }

    #[test]
    fn default_is_relevance() {
        assert_eq!(SortChoice::default(), SortChoice::Relevance);
    }

    #[test]
    fn label_is_not_a_value() {
        let err = "Most Members".parse::<SortChoice>().unwrap_err();
        assert_eq!(err, UnknownOptionError("Most Members".to_string()));
        assert_eq!(err.to_string(), "unknown sort option: \"Most Members\"");
    }
}
