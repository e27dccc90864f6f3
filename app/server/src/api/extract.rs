//! Request extractors
//!
//! Wrap axum's stock extractors so every rejection is reported as an
//! [`AppError`] (422 with field detail) instead of axum's plain-text
//! responses, and give each request its own database connection.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use domain::validation::Validate;
use serde::de::DeserializeOwned;
use sqlx::{pool::PoolConnection, Sqlite};

use crate::error::AppError;
use crate::state::AppState;

/// Connection checked out of the pool for the lifetime of one request.
///
/// Returned to the pool when dropped, whichever way the handler exits.
///
/// Handlers that read a body call [`DbConn::acquire`] after the body is
/// validated instead of extracting it, so rejected input never waits on the
/// pool.
pub struct DbConn(pub PoolConnection<Sqlite>);

impl DbConn {
    pub async fn acquire(state: &AppState) -> Result<Self, AppError> {
        let conn = state.db.acquire().await?;
        Ok(Self(conn))
    }
}

impl FromRequestParts<AppState> for DbConn {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Self::acquire(state).await
    }
}

/// Integer article id taken from the `{id}` path segment
pub struct ArticleId(pub i64);

impl<S> FromRequestParts<S> for ArticleId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state).await?;
        Ok(Self(id))
    }
}

/// JSON body that has been deserialized and then validated
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}
