//! Infrastructure layer
//!
//! Contains:
//! - Database connection management
//! - Error types
//! - Application state
//! - CORS policy

pub mod banner;
pub mod cors;
pub mod db;
pub mod error;
pub mod state;

pub use banner::print_banner;
pub use cors::cors_layer;
pub use domain::{default_data_path, Config, CorsOrigins};
pub use db::{create_pool, DatabaseError};
pub use error::{AppError, AppResult};
pub use state::AppState;
