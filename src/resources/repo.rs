use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct Owner(pub String);

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct Name(pub String);

/// A repository addressed as `<owner>/<repo>`.
///
/// The halves are kept separate so routes can push them as individual path
/// segments; the wire form is the joined string.
#[derive(Debug, Clone, SerializeDisplay, DeserializeFromStr, PartialEq, Eq, Hash)]
pub struct FullName {
    pub owner: Owner,
    pub name: Name,
}

impl FromStr for FullName {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self> {
        let mut splits = string.split('/');
        match (splits.next(), splits.next(), splits.next()) {
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
                Ok(FullName {
                    owner: Owner(owner.to_owned()),
                    name: Name(name.to_owned()),
                })
            }
            _ => Err(Error::BadRepoName {
                name: string.to_owned(),
            }),
        }
    }
}

impl Display for FullName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        write!(formatter, "{}/{}", self.owner.0, self.name.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_names_parse_from_owner_slash_repo() {
        let full_name: FullName = "octocat/Hello-World".parse().unwrap();
        assert_eq!(full_name.owner, Owner("octocat".to_owned()));
        assert_eq!(full_name.name, Name("Hello-World".to_owned()));
        assert_eq!(full_name.to_string(), "octocat/Hello-World");
    }

    #[test]
    fn full_names_reject_malformed_input() {
        for string in ["octocat", "octocat/a/b", "/Hello-World", "octocat/", ""] {
            assert!(
                string.parse::<FullName>().is_err(),
                "`{}` should not parse",
                string
            );
        }
    }

    #[test]
    fn full_names_roundtrip_through_json_strings() {
        let full_name: FullName = serde_json::from_str("\"octocat/Hello-World\"").unwrap();
        assert_eq!(
            serde_json::to_string(&full_name).unwrap(),
            "\"octocat/Hello-World\""
        );
    }
}
