use serde::{Deserialize, Serialize};

/// Title used when a response payload does not carry one.
pub const DEFAULT_POST_TITLE: &str = "Received response";

/// The request message for `GetPostComments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRequest {
    /// The subreddit to search in (e.g. `AskReddit`).
    pub subreddit: String,
    /// The search query.
    pub query: String,
    /// Maximum number of comments to return. Forwarded as constructed; valid
    /// ranges are the caller's concern.
    pub limit: u32,
}

impl PostRequest {
    pub fn new(subreddit: impl Into<String>, query: impl Into<String>, limit: u32) -> Self {
        Self {
            subreddit: subreddit.into(),
            query: query.into(),
            limit,
        }
    }
}

/// A single comment of the matched post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub body: String,
}

/// The response message for `GetPostComments`.
///
/// Produced only by [`crate::grpc::codec::decode`], either from a parsed
/// payload (with the serde defaults below for absent fields) or as the
/// decode-failure fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentsResponse {
    #[serde(default = "default_post_title")]
    pub post_title: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

fn default_post_title() -> String {
    DEFAULT_POST_TITLE.to_string()
}
