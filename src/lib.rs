#![deny(clippy::all)]
mod error;
pub mod query;
pub mod resources;

use once_cell::sync::Lazy;
use url::Url;

pub use crate::{
    error::{Error, Result},
    resources::{
        issue::{
            Filter as IssueFilter, Issue, ListParams as IssueListParams, Number as IssueNumber,
            Sort as IssueSort,
        },
        issue_comment::{
            Id as CommentId, IssueComment, ListParams as IssueCommentListParams, NewComment,
            Sort as IssueCommentSort,
        },
        milestone::{
            ListParams as MilestoneListParams, Milestone, Number as MilestoneNumber,
            Sort as MilestoneSort,
        },
        notification::{
            Id as ThreadId, ListParams as NotificationListParams, Notification,
            Reason as NotificationReason, Subject as NotificationSubject,
        },
        pull_request::{
            ListParams as PullRequestListParams, Number as PullRequestNumber, PullRequest,
            Sort as PullRequestSort,
        },
        repo::{FullName as RepoFullName, Name as RepoName, Owner as RepoOwner},
        user::{Id as UserId, User, Username},
        SortDirection, State,
    },
};

/// Request routes for an API deployment.
///
/// Builds full request URLs from a base endpoint; pair them with a
/// `ListParams` via [`query::apply`] and hand the result to any HTTP client.
#[derive(Debug)]
pub struct Endpoints {
    base: Url,
    issues_dashboard: Url,
    notifications: Url,
}

fn construct_endpoint(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut endpoint = base.clone();

    let mut endpoint_segments = endpoint
        .path_segments_mut()
        .map_err(|_| Error::BadEndpoint {
            endpoint: base.clone(),
        })?;

    for segment in segments {
        endpoint_segments.push(segment);
    }

    drop(endpoint_segments);

    Ok(endpoint)
}

impl Endpoints {
    pub fn new(base: Url) -> Result<Self> {
        let issues_dashboard = construct_endpoint(&base, &["issues"])?;
        let notifications = construct_endpoint(&base, &["notifications"])?;

        Ok(Endpoints {
            base,
            issues_dashboard,
            notifications,
        })
    }

    /// The API root this instance builds routes under.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Every issue comment in a repository, in the order given by
    /// `issue_comment::ListParams`.
    pub fn issue_comments(&self, repo: &RepoFullName) -> Result<Url> {
        construct_endpoint(
            &self.base,
            &["repos", &repo.owner.0, &repo.name.0, "issues", "comments"],
        )
    }

    /// Comments on a single issue.
    pub fn issue_comments_for(&self, repo: &RepoFullName, number: IssueNumber) -> Result<Url> {
        construct_endpoint(
            &self.base,
            &[
                "repos",
                &repo.owner.0,
                &repo.name.0,
                "issues",
                &number.0.to_string(),
                "comments",
            ],
        )
    }

    pub fn issue_comment(&self, repo: &RepoFullName, id: CommentId) -> Result<Url> {
        construct_endpoint(
            &self.base,
            &[
                "repos",
                &repo.owner.0,
                &repo.name.0,
                "issues",
                "comments",
                &id.0.to_string(),
            ],
        )
    }

    pub fn issues(&self, repo: &RepoFullName) -> Result<Url> {
        construct_endpoint(
            &self.base,
            &["repos", &repo.owner.0, &repo.name.0, "issues"],
        )
    }

    /// Issues across every repository visible to the authenticated account.
    pub fn issues_dashboard(&self) -> &Url {
        &self.issues_dashboard
    }

    pub fn milestones(&self, repo: &RepoFullName) -> Result<Url> {
        construct_endpoint(
            &self.base,
            &["repos", &repo.owner.0, &repo.name.0, "milestones"],
        )
    }

    pub fn notifications(&self) -> &Url {
        &self.notifications
    }

    pub fn repo_notifications(&self, repo: &RepoFullName) -> Result<Url> {
        construct_endpoint(
            &self.base,
            &["repos", &repo.owner.0, &repo.name.0, "notifications"],
        )
    }

    pub fn pulls(&self, repo: &RepoFullName) -> Result<Url> {
        construct_endpoint(&self.base, &["repos", &repo.owner.0, &repo.name.0, "pulls"])
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints::new(DEFAULT_ENDPOINT.clone()).expect("Default endpoint is well-formed")
    }
}

pub static DEFAULT_ENDPOINT: Lazy<Url> =
    Lazy::new(|| Url::parse("https://api.github.com").expect("Default URL is well-formed"));

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> RepoFullName {
        "octocat/Hello-World".parse().expect("")
    }

    #[test]
    fn test_construct_endpoint() {
        let url = construct_endpoint(
            &Url::parse("https://github.example.com/api/v3").unwrap(),
            &["repos", "octocat", "Hello-World", "issues", "comments"],
        )
        .unwrap();

        assert_eq!(
            url.to_string(),
            "https://github.example.com/api/v3/repos/octocat/Hello-World/issues/comments"
        )
    }

    #[test]
    fn routes_follow_the_documented_paths() {
        let endpoints = Endpoints::default();
        let repo = repo();

        assert_eq!(
            endpoints.issue_comments(&repo).unwrap().as_str(),
            "https://api.github.com/repos/octocat/Hello-World/issues/comments"
        );
        assert_eq!(
            endpoints
                .issue_comments_for(&repo, IssueNumber(1347))
                .unwrap()
                .as_str(),
            "https://api.github.com/repos/octocat/Hello-World/issues/1347/comments"
        );
        assert_eq!(
            endpoints.issue_comment(&repo, CommentId(1)).unwrap().as_str(),
            "https://api.github.com/repos/octocat/Hello-World/issues/comments/1"
        );
        assert_eq!(
            endpoints.issues(&repo).unwrap().as_str(),
            "https://api.github.com/repos/octocat/Hello-World/issues"
        );
        assert_eq!(
            endpoints.issues_dashboard().as_str(),
            "https://api.github.com/issues"
        );
        assert_eq!(
            endpoints.milestones(&repo).unwrap().as_str(),
            "https://api.github.com/repos/octocat/Hello-World/milestones"
        );
        assert_eq!(
            endpoints.notifications().as_str(),
            "https://api.github.com/notifications"
        );
        assert_eq!(
            endpoints.repo_notifications(&repo).unwrap().as_str(),
            "https://api.github.com/repos/octocat/Hello-World/notifications"
        );
        assert_eq!(
            endpoints.pulls(&repo).unwrap().as_str(),
            "https://api.github.com/repos/octocat/Hello-World/pulls"
        );
    }

    #[test]
    fn enterprise_roots_are_preserved() {
        let base = Url::parse("https://github.example.com/api/v3").unwrap();
        let endpoints = Endpoints::new(base.clone()).unwrap();

        assert_eq!(endpoints.base_url(), &base);
        assert_eq!(
            endpoints.issues_dashboard().as_str(),
            "https://github.example.com/api/v3/issues"
        );
        assert_eq!(
            endpoints.issue_comments(&repo()).unwrap().as_str(),
            "https://github.example.com/api/v3/repos/octocat/Hello-World/issues/comments"
        );
    }

    #[test]
    fn a_listing_url_composes_with_params() {
        let endpoints = Endpoints::default();
        let mut url = endpoints.issue_comments(&repo()).unwrap();
        let params = IssueCommentListParams {
            sort: IssueCommentSort::Updated,
            ..IssueCommentListParams::new()
        };

        query::apply(&mut url, &params).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/octocat/Hello-World/issues/comments?direction=asc&sort=updated"
        );
    }

    #[test]
    fn bad_endpoints_are_rejected() {
        match Endpoints::new(Url::parse("mailto:octocat@github.com").unwrap()) {
            Err(Error::BadEndpoint { .. }) => (),
            other => panic!("Expected a bad endpoint error, got {:?}", other),
        }
    }
}
