// produto_api/src/lib.rs

//! HTTP surface of the Produto catalogue: configuration, error mapping,
//! shared state and the actix-web routes under `/api/produto`.

pub mod config;
pub mod errors;
pub mod state;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
