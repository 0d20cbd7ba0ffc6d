use crate::resources::{user::User, SortDirection, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Number(pub u64);

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Sort {
    Created,
    Updated,
    Popularity,
    LongRunning,
}

impl Default for Sort {
    fn default() -> Self {
        Sort::Created
    }
}

impl Display for Sort {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        write!(
            formatter,
            "{}",
            match self {
                Sort::Created => "Created",
                Sort::Updated => "Updated",
                Sort::Popularity => "Popularity",
                Sort::LongRunning => "LongRunning",
            }
        )
    }
}

/// Parameters accepted by the pull request listing route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ListParams {
    pub state: State,

    /// Filter by head user or organisation and branch, as `user:ref-name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<String>,

    /// Filter by base branch name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    pub sort: Sort,

    pub direction: SortDirection,
}

// The server returns pull request listings newest first.
impl Default for ListParams {
    fn default() -> Self {
        ListParams {
            state: State::default(),
            head: None,
            base: None,
            sort: Sort::default(),
            direction: SortDirection::Descending,
        }
    }
}

impl ListParams {
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PullRequest {
    pub number: Number,
    pub title: String,
    pub state: State,
    pub user: User,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
