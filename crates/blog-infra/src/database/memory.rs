//! In-memory blog post store - used when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, BlogPostRepository};

/// Blog post store backed by a `Vec` behind an async RwLock.
///
/// Records are kept in insertion order. Data is lost on process restart.
pub struct InMemoryBlogPostRepository {
    store: RwLock<Vec<BlogPost>>,
}

impl InMemoryBlogPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryBlogPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for InMemoryBlogPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|p| p.id != id);

        if store.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn insert_one(&self, fields: NewBlogPost) -> Result<BlogPost, RepoError> {
        let post = BlogPost::new(fields);
        self.store.write().await.push(post.clone());
        Ok(post)
    }

    async fn insert_many(&self, fields: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, RepoError> {
        let posts: Vec<BlogPost> = fields.into_iter().map(BlogPost::new).collect();
        self.store.write().await.extend(posts.iter().cloned());
        Ok(posts)
    }

    async fn update_by_id(&self, id: Uuid, patch: BlogPostPatch) -> Result<BlogPost, RepoError> {
        let mut store = self.store.write().await;
        let post = store
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        patch.apply(post);
        Ok(post.clone())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.store.read().await.len() as u64)
    }

    async fn drop_all(&self) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        tracing::warn!(rows = store.len(), "Dropped all blog posts");
        store.clear();
        Ok(())
    }
}
