//! Domain layer
//!
//! Contains:
//! - Article model and request payloads
//! - Payload validation
//! - Repository for the `articulos` table
//! - Service configuration

pub mod config;
pub mod models;
pub mod repositories;
pub mod validation;

pub use config::{default_data_path, Config, CorsOrigins};
