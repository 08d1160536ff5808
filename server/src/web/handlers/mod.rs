// produto_api/src/web/handlers/mod.rs

// Declare handler modules
pub mod produto_handlers;
