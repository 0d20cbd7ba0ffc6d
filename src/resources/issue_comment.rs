use crate::{
    query,
    resources::{user::User, SortDirection},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use url::Url;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(pub u64);

/// Field a comment listing is ordered by.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sort {
    Created,
    Updated,
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
            }
        )
    }
}

/// Parameters accepted by the comment listing routes.
///
/// `Default` matches the server's own behaviour: ordered by creation time,
/// oldest first, with no lower bound on the update time.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct ListParams {
    pub sort: Sort,

    pub direction: SortDirection,

    /// Only comments updated at or after this time are returned.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "query::serialize_opt_timestamp"
    )]
    pub since: Option<DateTime<Utc>>,
}

impl ListParams {
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }
}

impl Display for ListParams {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        write!(
            formatter,
            "Sort: {}, Direction: {}, Since: {}",
            self.sort,
            self.direction,
            self.since
                .as_ref()
                .map(query::format_timestamp)
                .unwrap_or_default(),
        )
    }
}

/// A comment on an issue or pull request.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct IssueComment {
    pub id: Id,
    pub body: String,
    pub user: User,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub html_url: Url,
}

/// Request body for creating or editing a comment.
#[derive(Debug, Clone, Serialize)]
pub struct NewComment<'a> {
    pub body: &'a str,
}
