//! Post collection handlers - list, search, create, update, delete.
//!
//! Handlers stay thin: extract parameters, call into the store or the query
//! engine, serialize the result. All domain failures surface through
//! [`crate::middleware::error::AppError`] as `{error}` payloads.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use masterblog_core::ports::{PostDraft, PostPatch};
use masterblog_core::query::{self, SearchCriteria, SortSpec};
use masterblog_shared::MessageBody;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Query parameters for the listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    pub sort: Option<String>,
    pub direction: Option<String>,
}

/// GET /posts - all posts, optionally sorted.
pub async fn list_posts(
    state: web::Data<AppState>,
    params: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let spec = SortSpec::from_params(params.sort.as_deref(), params.direction.as_deref())?;

    let mut posts = state.posts.list_all().await;
    if let Some(spec) = spec {
        query::sort_posts(&mut posts, &spec);
    }

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /posts/search - posts matching any of the given criteria.
pub async fn search_posts(
    state: web::Data<AppState>,
    criteria: web::Query<SearchCriteria>,
) -> HttpResponse {
    let posts = state.posts.list_all().await;
    let matches = query::search_posts(posts, &criteria);

    HttpResponse::Ok().json(matches)
}

/// POST /posts - create a post from a full draft.
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostDraft>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(body.into_inner()).await?;

    Ok(HttpResponse::Created().json(post))
}

/// PUT /posts/{id} - apply a partial update.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    body: web::Json<PostPatch>,
) -> AppResult<HttpResponse> {
    let post = state.posts.update(path.into_inner(), body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.delete(id).await?;

    Ok(HttpResponse::Ok().json(MessageBody::new(format!(
        "Post with id {} has been deleted successfully.",
        id
    ))))
}
