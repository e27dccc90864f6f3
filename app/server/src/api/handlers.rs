mod article;

// Re-export all handlers
pub use article::{
    create_article, delete_article, get_article, list_articles, update_article, MessageResponse,
};

// Re-export utoipa path structs for OpenAPI routing
#[cfg(feature = "openapi")]
#[doc(hidden)]
pub use article::{
    __path_create_article, __path_delete_article, __path_get_article, __path_list_articles,
    __path_update_article,
};
