use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use crate::error::RepoError;

/// Generic repository trait shared by every persisted entity.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID. Absence is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Return every stored entity. Callers must not rely on ordering.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Delete an entity by its ID. Fails with `RepoError::NotFound` if nothing matched.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Blog post record store.
#[async_trait]
pub trait BlogPostRepository: BaseRepository<BlogPost, Uuid> {
    /// Persist one post, assigning its id.
    async fn insert_one(&self, fields: NewBlogPost) -> Result<BlogPost, RepoError>;

    /// Persist several posts at once, all or nothing. Output keeps input order.
    async fn insert_many(&self, fields: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, RepoError>;

    /// Overwrite the supplied fields of an existing post and return the result.
    async fn update_by_id(&self, id: Uuid, patch: BlogPostPatch) -> Result<BlogPost, RepoError>;

    /// Number of stored posts.
    async fn count(&self) -> Result<u64, RepoError>;

    /// Remove every post. Only used to reset state between test runs.
    async fn drop_all(&self) -> Result<(), RepoError>;
}
