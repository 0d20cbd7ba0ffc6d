use crate::resources::{SortDirection, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Number(pub u64);

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sort {
    DueOn,
    Completeness,
}

impl Default for Sort {
    fn default() -> Self {
        Sort::DueOn
    }
}

impl Display for Sort {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        write!(
            formatter,
            "{}",
            match self {
                Sort::DueOn => "DueOn",
                Sort::Completeness => "Completeness",
            }
        )
    }
}

/// Parameters accepted by the milestone listing route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct ListParams {
    pub state: State,
    pub sort: Sort,
    pub direction: SortDirection,
}

impl ListParams {
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Milestone {
    pub number: Number,
    pub title: String,
    pub state: State,
    pub open_issues: u64,
    pub closed_issues: u64,
    pub due_on: Option<DateTime<Utc>>,
}
