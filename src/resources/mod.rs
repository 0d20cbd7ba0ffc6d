pub mod issue;
pub mod issue_comment;
pub mod milestone;
pub mod notification;
pub mod pull_request;
pub mod repo;
pub mod user;

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Ordering applied to a sorted listing.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,

    #[serde(rename = "desc")]
    Descending,
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Ascending
    }
}

impl Display for SortDirection {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        write!(
            formatter,
            "{}",
            match self {
                SortDirection::Ascending => "Ascending",
                SortDirection::Descending => "Descending",
            }
        )
    }
}

/// Open/closed filter shared by issue, milestone and pull request listings.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Open,
    Closed,
    All,
}

impl Default for State {
    fn default() -> Self {
        State::Open
    }
}

impl Display for State {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        write!(
            formatter,
            "{}",
            match self {
                State::Open => "Open",
                State::Closed => "Closed",
                State::All => "All",
            }
        )
    }
}
