use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Author name pair attached to every blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// "First Last", trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    fn collect_errors(&self, errors: &mut Vec<String>) {
        if self.first_name.trim().is_empty() {
            errors.push("author.firstName must not be blank".to_string());
        }
        if self.last_name.trim().is_empty() {
            errors.push("author.lastName must not be blank".to_string());
        }
    }
}

/// BlogPost entity - the canonical stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub author: Author,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl BlogPost {
    /// Create a post from caller-supplied fields, assigning a fresh id.
    pub fn new(fields: NewBlogPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: fields.title,
            author: fields.author,
            content: fields.content,
            // Postgres timestamps keep microseconds.
            created_at: Utc::now().trunc_subsecs(6),
        }
    }
}

/// Fields accepted when creating a post. The id is never caller-supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBlogPost {
    pub title: String,
    pub author: Author,
    pub content: String,
}

impl NewBlogPost {
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push("title must not be blank".to_string());
        }
        self.author.collect_errors(&mut errors);
        if self.content.trim().is_empty() {
            errors.push("content must not be blank".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(errors))
        }
    }
}

/// Partial update. Only supplied fields overwrite the stored record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub author: Option<Author>,
    pub content: Option<String>,
}

impl BlogPostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.content.is_none()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut errors = Vec::new();
        if self.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            errors.push("title must not be blank".to_string());
        }
        if let Some(author) = &self.author {
            author.collect_errors(&mut errors);
        }
        if self.content.as_deref().is_some_and(|c| c.trim().is_empty()) {
            errors.push("content must not be blank".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(errors))
        }
    }

    /// Overwrite the supplied fields on `post`. `id` and `created_at` never change.
    pub fn apply(self, post: &mut BlogPost) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(author) = self.author {
            post.author = author;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
    }
}
