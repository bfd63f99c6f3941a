//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Author name pair as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub first_name: String,
    pub last_name: String,
}

/// Request to create a blog post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBlogPostRequest {
    pub title: String,
    pub author: AuthorDto,
    pub content: String,
}

/// Request to overwrite some fields of a blog post.
///
/// `id`, when present, must equal the id in the request path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlogPostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Public representation of a stored post, with the author rendered as one string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostResponse {
    pub id: String,
    pub title: String,
    pub author: String,
    pub content: String,
    pub created: String,
}

/// Response to a create request. The author echoes the submitted object shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedBlogPostResponse {
    pub id: String,
    pub title: String,
    pub author: AuthorDto,
    pub content: String,
    pub created: String,
}
