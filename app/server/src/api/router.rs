use axum::{response::Redirect, routing::any, Router};

use crate::state::AppState;

use super::handlers;

const COLLECTION_PATH: &str = "/articulos/";

/// `/articulos` answers with a 307 to the canonical `/articulos/`, keeping
/// the method and body
fn with_collection_redirect(router: Router) -> Router {
    router.route(
        "/articulos",
        any(|| async { Redirect::temporary(COLLECTION_PATH) }),
    )
}

// OpenAPI mode: use OpenApiRouter with utoipa macros
#[cfg(feature = "openapi")]
pub fn create_router(state: AppState) -> (Router, utoipa::openapi::OpenApi) {
    use axum::{routing::get, Json};
    use utoipa::OpenApi;
    use utoipa_axum::{router::OpenApiRouter, routes};

    use crate::openapi::ApiDoc;

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(handlers::create_article, handlers::list_articles))
        .routes(routes!(
            handlers::get_article,
            handlers::update_article,
            handlers::delete_article
        ))
        .with_state(state)
        .split_for_parts();

    // Clone the API spec for the JSON endpoint
    let api_json = api.clone();

    let router = router.route(
        "/openapi.json",
        get(move || async move { Json(api_json) }),
    );

    (with_collection_redirect(router), api)
}

// Non-OpenAPI mode: use standard axum Router
#[cfg(not(feature = "openapi"))]
pub fn create_router(state: AppState) -> Router {
    use axum::routing::get;

    let router = Router::new()
        .route(
            COLLECTION_PATH,
            get(handlers::list_articles).post(handlers::create_article),
        )
        .route(
            "/articulos/{id}",
            get(handlers::get_article)
                .put(handlers::update_article)
                .delete(handlers::delete_article),
        )
        .with_state(state);

    with_collection_redirect(router)
}
