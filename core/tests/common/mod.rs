// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use produto_core::store::StoreResult;
use produto_core::{
  CreateProdutoDto, InMemoryProdutoStore, NewProduto, Produto, ProdutoChanges, ProdutoFilter, ProdutoService,
  ProdutoStore, StoreError, UpdateProdutoDto,
};
use rust_decimal::Decimal;
use tracing::Level;

pub fn dec(s: &str) -> Decimal {
  Decimal::from_str(s).unwrap()
}

// --- Payload builders ---
pub fn teclado() -> CreateProdutoDto {
  CreateProdutoDto {
    nome: Some("Teclado".to_string()),
    descricao: None,
    preco: Some(dec("99.90")),
    estoque: Some(5),
    ativo: None,
  }
}

pub fn create_dto(nome: &str, preco: &str, ativo: bool) -> CreateProdutoDto {
  CreateProdutoDto {
    nome: Some(nome.to_string()),
    descricao: Some(format!("{} de teste", nome)),
    preco: Some(dec(preco)),
    estoque: Some(1),
    ativo: Some(ativo),
  }
}

pub fn valid_update() -> UpdateProdutoDto {
  UpdateProdutoDto {
    nome: Some("Notebook Dell XPS".to_string()),
    descricao: None,
    preco: Some(dec("4200.50")),
    estoque: Some(3),
    ativo: Some(false),
  }
}

// --- Service fixtures ---
pub fn seeded_service() -> (ProdutoService, Arc<InMemoryProdutoStore>) {
  let store = Arc::new(InMemoryProdutoStore::seeded());
  (ProdutoService::new(store.clone()), store)
}

pub fn empty_service() -> ProdutoService {
  ProdutoService::new(Arc::new(InMemoryProdutoStore::new()))
}

/// Store whose every call fails as if the database were unreachable.
pub struct UnavailableStore;

#[async_trait]
impl ProdutoStore for UnavailableStore {
  async fn insert(&self, _new: NewProduto) -> StoreResult<Produto> {
    Err(StoreError::Database(sqlx::Error::PoolTimedOut))
  }
  async fn find_by_id(&self, _id: i32) -> StoreResult<Option<Produto>> {
    Err(StoreError::Database(sqlx::Error::PoolTimedOut))
  }
  async fn exists(&self, _id: i32) -> StoreResult<bool> {
    Err(StoreError::Database(sqlx::Error::PoolTimedOut))
  }
  async fn list(&self, _filter: ProdutoFilter) -> StoreResult<Vec<Produto>> {
    Err(StoreError::Database(sqlx::Error::PoolTimedOut))
  }
  async fn update(&self, _id: i32, _changes: ProdutoChanges) -> StoreResult<()> {
    Err(StoreError::Database(sqlx::Error::PoolTimedOut))
  }
  async fn delete(&self, _id: i32) -> StoreResult<bool> {
    Err(StoreError::Database(sqlx::Error::PoolTimedOut))
  }
}

/// Wraps an in-memory store and reports a write conflict on `update`.
///
/// With `remove_row` set, the row is deleted first, as a racing DELETE would.
pub struct ConflictingStore {
  pub inner: InMemoryProdutoStore,
  pub remove_row: bool,
  pub exists_calls: AtomicUsize,
}

impl ConflictingStore {
  pub fn new(remove_row: bool) -> Self {
    Self {
      inner: InMemoryProdutoStore::seeded(),
      remove_row,
      exists_calls: AtomicUsize::new(0),
    }
  }
}

#[async_trait]
impl ProdutoStore for ConflictingStore {
  async fn insert(&self, new: NewProduto) -> StoreResult<Produto> {
    self.inner.insert(new).await
  }
  async fn find_by_id(&self, id: i32) -> StoreResult<Option<Produto>> {
    self.inner.find_by_id(id).await
  }
  async fn exists(&self, id: i32) -> StoreResult<bool> {
    self.exists_calls.fetch_add(1, Ordering::SeqCst);
    self.inner.exists(id).await
  }
  async fn list(&self, filter: ProdutoFilter) -> StoreResult<Vec<Produto>> {
    self.inner.list(filter).await
  }
  async fn update(&self, id: i32, _changes: ProdutoChanges) -> StoreResult<()> {
    if self.remove_row {
      self.inner.delete(id).await?;
    }
    Err(StoreError::Conflict { id })
  }
  async fn delete(&self, id: i32) -> StoreResult<bool> {
    self.inner.delete(id).await
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
