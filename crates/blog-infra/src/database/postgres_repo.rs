//! PostgreSQL blog post repository.

use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, PaginatorTrait};
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;

use super::entity::blog_post::{self, Entity as BlogPostEntity};
use super::postgres_base::{PostgresBaseRepository, query_error};

/// PostgreSQL blog post repository.
pub type PostgresBlogPostRepository = PostgresBaseRepository<BlogPostEntity>;

fn write_error(e: DbErr) -> RepoError {
    let err_str = e.to_string();
    if err_str.contains("duplicate") || err_str.contains("unique") {
        RepoError::Constraint("Blog post already exists".to_string())
    } else {
        query_error(e)
    }
}

/// Only the fields carried by the patch end up in the `SET` clause.
fn patch_model(id: Uuid, patch: BlogPostPatch) -> blog_post::ActiveModel {
    let (first_name, last_name) = match patch.author {
        Some(author) => (Set(author.first_name), Set(author.last_name)),
        None => (NotSet, NotSet),
    };

    blog_post::ActiveModel {
        id: Unchanged(id),
        title: patch.title.map_or(NotSet, Set),
        author_first_name: first_name,
        author_last_name: last_name,
        content: patch.content.map_or(NotSet, Set),
        created_at: NotSet,
    }
}

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn insert_one(&self, fields: NewBlogPost) -> Result<BlogPost, RepoError> {
        let active: blog_post::ActiveModel = BlogPost::new(fields).into();
        let model = active.insert(self.conn()).await.map_err(write_error)?;

        tracing::debug!(post_id = %model.id, "Inserted blog post");
        Ok(model.into())
    }

    async fn insert_many(&self, fields: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, RepoError> {
        if fields.is_empty() {
            return Ok(Vec::new());
        }

        let posts: Vec<BlogPost> = fields.into_iter().map(BlogPost::new).collect();
        // One multi-row INSERT, so the batch lands atomically.
        let inserted = BlogPostEntity::insert_many(
            posts.iter().cloned().map(blog_post::ActiveModel::from),
        )
        .exec_without_returning(self.conn())
        .await
        .map_err(write_error)?;

        tracing::debug!(rows = inserted, "Inserted blog post batch");
        Ok(posts)
    }

    async fn update_by_id(&self, id: Uuid, patch: BlogPostPatch) -> Result<BlogPost, RepoError> {
        if patch.is_empty() {
            return BlogPostEntity::find_by_id(id)
                .one(self.conn())
                .await
                .map_err(query_error)?
                .map(BlogPost::from)
                .ok_or(RepoError::NotFound);
        }

        let updated = patch_model(id, patch)
            .update(self.conn())
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => RepoError::NotFound,
                other => write_error(other),
            })?;

        tracing::debug!(post_id = %id, "Updated blog post");
        Ok(updated.into())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        BlogPostEntity::find()
            .count(self.conn())
            .await
            .map_err(query_error)
    }

    async fn drop_all(&self) -> Result<(), RepoError> {
        let result = BlogPostEntity::delete_many()
            .exec(self.conn())
            .await
            .map_err(query_error)?;

        tracing::warn!(rows = result.rows_affected, "Dropped all blog posts");
        Ok(())
    }
}
