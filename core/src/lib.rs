// src/lib.rs

//! produto_core: the domain side of the Produto catalogue service.
//!
//! It holds everything below the HTTP layer:
//!  - The persisted `Produto` row and the wire DTOs it maps to.
//!  - Explicit field validation that reports every violated field.
//!  - The `ProdutoStore` seam with PostgreSQL and in-memory implementations.
//!  - Provisioning of the `produtos` table and its seed rows.
//!  - `ProdutoService`, which turns store outcomes into `ProdutoError`s.

pub mod dto;
pub mod error;
pub mod model;
pub mod schema;
pub mod service;
pub mod store;
pub mod validation;

// --- Re-exports for the Public API ---

pub use crate::dto::{CreateProdutoDto, ListProdutosQuery, ProdutoResponseDto, UpdateProdutoDto};
pub use crate::error::{ProdutoError, ProdutoResult, StoreError, ValidationErrors};
pub use crate::model::{NewProduto, Produto, ProdutoChanges, ProdutoFilter};
pub use crate::service::ProdutoService;
pub use crate::store::{InMemoryProdutoStore, PgProdutoStore, ProdutoStore};

/*
    Request flow:
    1. The transport layer decodes a DTO (or an id / query) and calls `ProdutoService`.
    2. The service validates the payload, collecting every violated field.
    3. A single logical read or write is issued against the `ProdutoStore`.
    4. The outcome is mapped to a `ProdutoResponseDto` or a `ProdutoError`.
*/
