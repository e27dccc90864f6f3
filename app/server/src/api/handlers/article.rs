use axum::{extract::State, Json};
use domain::models::{Article, CreateArticle};
use domain::repositories::ArticleRepository;
use serde::Serialize;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::api::extract::{ArticleId, DbConn, ValidJson};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Confirmation returned after a delete
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct MessageResponse {
    pub message: String,
}

/// Create a new article
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/articulos/",
    tag = "articulos",
    request_body = CreateArticle,
    responses(
        (status = 200, description = "Article created", body = Article),
        (status = 422, description = "Invalid request body")
    )
))]
pub async fn create_article(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateArticle>,
) -> AppResult<Json<Article>> {
    let DbConn(mut conn) = DbConn::acquire(&state).await?;
    let article = ArticleRepository::create(&mut *conn, &payload).await?;
    tracing::info!("Created article {} ({})", article.id, article.name);
    Ok(Json(article))
}

/// List all articles
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/articulos/",
    tag = "articulos",
    responses(
        (status = 200, description = "All articles", body = Vec<Article>)
    )
))]
pub async fn list_articles(DbConn(mut conn): DbConn) -> AppResult<Json<Vec<Article>>> {
    let articles = ArticleRepository::get_all(&mut *conn).await?;
    Ok(Json(articles))
}

/// Get an article by ID
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/articulos/{id}",
    tag = "articulos",
    params(
        ("id" = i64, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Article found", body = Article),
        (status = 404, description = "Article not found"),
        (status = 422, description = "Invalid article ID")
    )
))]
pub async fn get_article(
    ArticleId(id): ArticleId,
    DbConn(mut conn): DbConn,
) -> AppResult<Json<Article>> {
    match ArticleRepository::get_by_id(&mut *conn, id).await? {
        Some(article) => Ok(Json(article)),
        None => {
            tracing::debug!("Article {} not found", id);
            Err(AppError::article_not_found())
        }
    }
}

/// Replace every field of an article
#[cfg_attr(feature = "openapi", utoipa::path(
    put,
    path = "/articulos/{id}",
    tag = "articulos",
    params(
        ("id" = i64, Path, description = "Article ID")
    ),
    request_body = CreateArticle,
    responses(
        (status = 200, description = "Article updated", body = Article),
        (status = 404, description = "Article not found"),
        (status = 422, description = "Invalid article ID or request body")
    )
))]
pub async fn update_article(
    ArticleId(id): ArticleId,
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateArticle>,
) -> AppResult<Json<Article>> {
    let DbConn(mut conn) = DbConn::acquire(&state).await?;
    match ArticleRepository::update(&mut *conn, id, &payload).await? {
        Some(article) => {
            tracing::info!("Updated article {}", id);
            Ok(Json(article))
        }
        None => {
            tracing::debug!("Article {} not found for update", id);
            Err(AppError::article_not_found())
        }
    }
}

/// Delete an article
#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/articulos/{id}",
    tag = "articulos",
    params(
        ("id" = i64, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Article deleted", body = MessageResponse),
        (status = 404, description = "Article not found"),
        (status = 422, description = "Invalid article ID")
    )
))]
pub async fn delete_article(
    ArticleId(id): ArticleId,
    DbConn(mut conn): DbConn,
) -> AppResult<Json<MessageResponse>> {
    if !ArticleRepository::delete(&mut *conn, id).await? {
        tracing::debug!("Article {} not found for delete", id);
        return Err(AppError::article_not_found());
    }

    tracing::info!("Deleted article {}", id);
    Ok(Json(MessageResponse {
        message: "Artículo eliminado correctamente".to_string(),
    }))
}
