// produto_core/src/store/mod.rs

//! The persistence seam. Handlers only see `ProdutoStore`; the backing
//! implementation is picked at startup.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::{NewProduto, Produto, ProdutoChanges, ProdutoFilter};

pub use memory::InMemoryProdutoStore;
pub use postgres::PgProdutoStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistent store of `Produto` rows, keyed by integer id.
#[async_trait]
pub trait ProdutoStore: Send + Sync + 'static {
  /// Persists a new row and returns it with the id the store assigned.
  async fn insert(&self, new: NewProduto) -> StoreResult<Produto>;

  async fn find_by_id(&self, id: i32) -> StoreResult<Option<Produto>>;

  async fn exists(&self, id: i32) -> StoreResult<bool>;

  /// All rows matching `filter`, ordered by `nome` then `id`.
  async fn list(&self, filter: ProdutoFilter) -> StoreResult<Vec<Produto>>;

  /// Replaces the mutable columns of row `id`.
  ///
  /// Returns `StoreError::Conflict` when the row is no longer there to update.
  async fn update(&self, id: i32, changes: ProdutoChanges) -> StoreResult<()>;

  /// Removes row `id`. `Ok(false)` means there was nothing to remove.
  async fn delete(&self, id: i32) -> StoreResult<bool>;
}
