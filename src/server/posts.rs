//! CRUD handlers over the content store
//!
//! Each handler is a stateless read-modify-write against the injected store.
//! Mutating handlers hold the state's write lock for the whole cycle so two
//! admin writes in one process cannot interleave.

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::content::post::is_url_safe;
use crate::content::{NewPost, Post, PostPatch, PostStatus};

use super::auth::require_bearer;
use super::{ApiError, ApiResult, AppState};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListQuery {
    pub published_only: bool,
}

/// GET /api/posts
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<Post>>> {
    let mut posts = state.store.read_all().await?;
    if query.published_only {
        posts.retain(|p| p.status == PostStatus::Published);
    }
    Ok(Json(posts))
}

/// GET /api/posts/:slug
pub async fn get_one(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Post>> {
    let posts = state.store.read_all().await?;
    posts
        .into_iter()
        .find(|p| p.slug == slug)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("no post with slug {slug:?}")))
}

/// POST /api/posts
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> ApiResult<Json<Post>> {
    require_bearer(&state, &headers)?;

    let input: NewPost =
        serde_json::from_value(body).map_err(|err| ApiError::validation(err.to_string()))?;
    let post = input
        .into_post()
        .map_err(|err| ApiError::validation(err.to_string()))?;

    let _guard = state.write_lock.lock().await;
    let mut posts = state.store.read_all().await?;

    // Uniqueness is enforced at creation time only
    if posts.iter().any(|p| p.slug == post.slug) {
        return Err(ApiError::validation(format!(
            "slug already exists: {}",
            post.slug
        )));
    }

    posts.push(post.clone());
    state.store.write_all(&posts).await?;

    tracing::info!(slug = %post.slug, "post created");
    Ok(Json(post))
}

/// PUT /api/posts/:slug
pub async fn update(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> ApiResult<Json<Post>> {
    require_bearer(&state, &headers)?;

    let patch: PostPatch =
        serde_json::from_value(body).map_err(|err| ApiError::validation(err.to_string()))?;
    if let Some(new_slug) = &patch.slug {
        if !is_url_safe(new_slug) {
            return Err(ApiError::validation(format!(
                "slug is not URL-safe: {new_slug:?}"
            )));
        }
    }

    let _guard = state.write_lock.lock().await;
    let mut posts = state.store.read_all().await?;

    let updated = {
        let post = posts
            .iter_mut()
            .find(|p| p.slug == slug)
            .ok_or_else(|| ApiError::not_found(format!("no post with slug {slug:?}")))?;
        patch.apply(post);
        post.clone()
    };

    state.store.write_all(&posts).await?;

    tracing::info!(slug = %slug, "post updated");
    Ok(Json(updated))
}

/// DELETE /api/posts/:slug
pub async fn remove(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> ApiResult<Json<Value>> {
    require_bearer(&state, &headers)?;

    let _guard = state.write_lock.lock().await;
    let mut posts = state.store.read_all().await?;

    let before = posts.len();
    posts.retain(|p| p.slug != slug);
    if posts.len() == before {
        return Err(ApiError::not_found(format!("no post with slug {slug:?}")));
    }

    state.store.write_all(&posts).await?;

    tracing::info!(slug = %slug, "post deleted");
    Ok(Json(serde_json::json!({ "success": true })))
}
