use utoipa::OpenApi;

use crate::api::handlers::MessageResponse;
use crate::models::{Article, CreateArticle};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API CRUD de Artículos",
        version = "1.0.0"
    ),
    tags(
        (name = "articulos", description = "Article management endpoints")
    ),
    components(schemas(Article, CreateArticle, MessageResponse))
)]
pub struct ApiDoc;
