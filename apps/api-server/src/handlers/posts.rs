//! Blog post resource handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::domain::{Author, BlogPost, BlogPostPatch, NewBlogPost};
use blog_core::error::{DomainError, RepoError};
use blog_shared::dto::{
    AuthorDto, BlogPostResponse, CreateBlogPostRequest, CreatedBlogPostResponse,
    UpdateBlogPostRequest,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const ENTITY: &str = "BlogPost";

fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::BadRequest(format!("'{}' is not a valid blog post id", raw)))
}

/// Name the missing id instead of a generic "resource not found".
fn lookup_error(err: RepoError, id: Uuid) -> AppError {
    match err {
        RepoError::NotFound => DomainError::NotFound {
            entity_type: ENTITY,
            id,
        }
        .into(),
        other => other.into(),
    }
}

fn author_from_dto(dto: AuthorDto) -> Author {
    Author::new(dto.first_name, dto.last_name)
}

fn to_response(post: BlogPost) -> BlogPostResponse {
    BlogPostResponse {
        id: post.id.to_string(),
        title: post.title,
        author: post.author.full_name(),
        content: post.content,
        created: post.created_at.to_rfc3339(),
    }
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    tracing::debug!(count = posts.len(), "Listing blog posts");

    let body: Vec<BlogPostResponse> = posts.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: ENTITY,
            id,
        })?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let fields = NewBlogPost {
        title: req.title,
        author: author_from_dto(req.author),
        content: req.content,
    };
    fields.validate()?;

    let post = state.posts.insert_one(fields).await?;
    tracing::info!(post_id = %post.id, "Blog post created");

    Ok(HttpResponse::Created().json(CreatedBlogPostResponse {
        id: post.id.to_string(),
        title: post.title,
        author: AuthorDto {
            first_name: post.author.first_name,
            last_name: post.author.last_name,
        },
        content: post.content,
        created: post.created_at.to_rfc3339(),
    }))
}

/// PUT /posts/{id}
///
/// The path id is authoritative. A body id, if sent, must name the same post.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let req = body.into_inner();

    if let Some(body_id) = &req.id {
        if Uuid::parse_str(body_id).ok() != Some(id) {
            return Err(AppError::BadRequest(format!(
                "Request path id ({}) and request body id ({}) must match",
                id, body_id
            )));
        }
    }

    let patch = BlogPostPatch {
        title: req.title,
        author: req.author.map(author_from_dto),
        content: req.content,
    };
    patch.validate()?;

    state
        .posts
        .update_by_id(id, patch)
        .await
        .map_err(|e| lookup_error(e, id))?;
    tracing::info!(post_id = %id, "Blog post updated");

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    state
        .posts
        .delete(id)
        .await
        .map_err(|e| lookup_error(e, id))?;
    tracing::info!(post_id = %id, "Blog post deleted");

    Ok(HttpResponse::NoContent().finish())
}
