use crate::{
    error::{Error, Result},
    query,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct Id(pub String);

/// Parameters accepted by the notification listing routes.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct ListParams {
    /// Include notifications already marked as read.
    pub all: bool,

    /// Restrict to threads the account is participating in or mentioned on.
    pub participating: bool,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "query::serialize_opt_timestamp"
    )]
    pub since: Option<DateTime<Utc>>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "query::serialize_opt_timestamp"
    )]
    pub before: Option<DateTime<Utc>>,
}

impl ListParams {
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }
}

/// Why the authenticated account was notified about a thread.
///
/// The server adds reasons over time, so unrecognised tokens are preserved
/// rather than rejected.
#[derive(Debug, Clone, SerializeDisplay, DeserializeFromStr, PartialEq, Eq, Hash)]
pub enum Reason {
    Assign,
    Author,
    Comment,
    Invitation,
    Manual,
    Mention,
    ReviewRequested,
    SecurityAlert,
    StateChange,
    Subscribed,
    TeamMention,
    Unknown(Box<str>),
}

impl FromStr for Reason {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self> {
        Ok(match string {
            "assign" => Reason::Assign,
            "author" => Reason::Author,
            "comment" => Reason::Comment,
            "invitation" => Reason::Invitation,
            "manual" => Reason::Manual,
            "mention" => Reason::Mention,
            "review_requested" => Reason::ReviewRequested,
            "security_alert" => Reason::SecurityAlert,
            "state_change" => Reason::StateChange,
            "subscribed" => Reason::Subscribed,
            "team_mention" => Reason::TeamMention,
            value => Reason::Unknown(value.into()),
        })
    }
}

impl Display for Reason {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        write!(
            formatter,
            "{}",
            match self {
                Reason::Assign => "assign",
                Reason::Author => "author",
                Reason::Comment => "comment",
                Reason::Invitation => "invitation",
                Reason::Manual => "manual",
                Reason::Mention => "mention",
                Reason::ReviewRequested => "review_requested",
                Reason::SecurityAlert => "security_alert",
                Reason::StateChange => "state_change",
                Reason::Subscribed => "subscribed",
                Reason::TeamMention => "team_mention",
                Reason::Unknown(value) => value.as_ref(),
            }
        )
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Subject {
    pub title: String,

    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Notification {
    pub id: Id,
    pub unread: bool,
    pub reason: Reason,
    pub updated_at: DateTime<Utc>,
    pub last_read_at: Option<DateTime<Utc>>,
    pub subject: Subject,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_params_keep_both_booleans_on_the_wire() {
        assert_eq!(
            query::string(&ListParams::new()).expect(""),
            "all=false&participating=false"
        );
    }

    #[test]
    fn time_window_params_render_as_wire_timestamps() {
        let params = ListParams {
            all: true,
            participating: false,
            since: Some(chrono::Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap()),
            before: Some(chrono::Utc.with_ymd_and_hms(2021, 6, 1, 12, 30, 5).unwrap()),
        };
        assert_eq!(
            query::pairs(&params).expect(""),
            vec![
                ("all".to_owned(), "true".to_owned()),
                ("before".to_owned(), "2021-06-01T12:30:05Z".to_owned()),
                ("participating".to_owned(), "false".to_owned()),
                ("since".to_owned(), "2021-01-01T00:00:00Z".to_owned()),
            ]
        );
    }

    #[test]
    fn known_reasons_roundtrip_through_their_tokens() {
        for (reason, token) in [
            (Reason::Assign, "assign"),
            (Reason::Author, "author"),
            (Reason::Comment, "comment"),
            (Reason::Invitation, "invitation"),
            (Reason::Manual, "manual"),
            (Reason::Mention, "mention"),
            (Reason::ReviewRequested, "review_requested"),
            (Reason::SecurityAlert, "security_alert"),
            (Reason::StateChange, "state_change"),
            (Reason::Subscribed, "subscribed"),
            (Reason::TeamMention, "team_mention"),
        ] {
            assert_eq!(token.parse::<Reason>().expect(""), reason);
            assert_eq!(
                serde_json::to_string(&reason).expect(""),
                format!("\"{}\"", token)
            );
        }
    }

    #[test]
    fn unknown_reasons_are_preserved() {
        let reason: Reason = serde_json::from_str("\"ci_activity\"").expect("");
        match &reason {
            Reason::Unknown(value) => assert_eq!(value.as_ref(), "ci_activity"),
            other => panic!("Expected an unknown reason, got {:?}", other),
        }
        assert_eq!(
            serde_json::to_string(&reason).expect(""),
            "\"ci_activity\""
        );
    }

    #[test]
    fn notifications_deserialize_from_api_payloads() {
        let notification: Notification = serde_json::from_str(
            r#"{
                "id": "1",
                "unread": true,
                "reason": "review_requested",
                "updated_at": "2014-11-07T22:01:45Z",
                "last_read_at": null,
                "subject": {
                    "title": "Greetings",
                    "url": "https://api.github.com/repos/octocat/Hello-World/issues/123",
                    "type": "Issue"
                }
            }"#,
        )
        .expect("");
        assert_eq!(notification.reason, Reason::ReviewRequested);
        assert_eq!(notification.subject.kind, "Issue");
        assert_eq!(notification.last_read_at, None);
    }
}
