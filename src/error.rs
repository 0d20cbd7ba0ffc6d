use url::Url;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid endpoint `{}`", endpoint)]
    BadEndpoint { endpoint: Url },

    #[error("Expected <owner>/<repo>, got: {}", name)]
    BadRepoName { name: String },

    #[error("Could not serialize query parameters.")]
    BadQueryParams(#[source] serde_json::Error),

    #[error("Query parameters must serialize to an object, got {}", found)]
    BadQueryShape { found: &'static str },

    #[error("Query parameter `{}` does not serialize to a scalar value", key)]
    BadQueryValue { key: String },
}
