use crate::{
    query,
    resources::{user::User, SortDirection, State},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Number(pub u64);

/// Relationship between the authenticated account and the listed issues.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    Assigned,
    Created,
    Mentioned,
    Subscribed,
    All,
}

impl Default for Filter {
    fn default() -> Self {
        Filter::Assigned
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sort {
    Created,
    Updated,
    Comments,
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
                Sort::Comments => "Comments",
            }
        )
    }
}

/// Parameters accepted by the issue listing routes.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ListParams {
    pub filter: Filter,

    pub state: State,

    /// Only issues carrying every one of these labels are returned.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,

    pub sort: Sort,

    pub direction: SortDirection,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "query::serialize_opt_timestamp"
    )]
    pub since: Option<DateTime<Utc>>,
}

// The server returns issue listings newest first, unlike comment listings.
impl Default for ListParams {
    fn default() -> Self {
        ListParams {
            filter: Filter::default(),
            state: State::default(),
            labels: Vec::new(),
            sort: Sort::default(),
            direction: SortDirection::Descending,
            since: None,
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
pub struct Issue {
    pub number: Number,
    pub title: String,
    pub state: State,
    pub user: User,
    pub comments: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: Option<String>,
}
