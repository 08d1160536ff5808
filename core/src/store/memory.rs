// produto_core/src/store/memory.rs

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, instrument};

use super::{ProdutoStore, StoreResult};
use crate::error::StoreError;
use crate::model::{NewProduto, Produto, ProdutoChanges, ProdutoFilter};
use crate::schema;

#[derive(Debug)]
struct Inner {
  rows: BTreeMap<i32, Produto>,
  // Never rewound, so deleted ids are not handed out again. `None` once `i32::MAX` was used.
  next_id: Option<i32>,
}

/// Process-local store. Used by tests, benches and `STORE_BACKEND=memory`.
#[derive(Debug)]
pub struct InMemoryProdutoStore {
  inner: RwLock<Inner>,
}

impl Default for InMemoryProdutoStore {
  fn default() -> Self {
    Self::new()
  }
}

impl InMemoryProdutoStore {
  pub fn new() -> Self {
    Self {
      inner: RwLock::new(Inner {
        rows: BTreeMap::new(),
        next_id: Some(1),
      }),
    }
  }

  /// A store holding the two provisioning rows (ids 1 and 2).
  pub fn seeded() -> Self {
    Self::with_rows(schema::seed_rows())
  }

  pub fn with_rows(rows: impl IntoIterator<Item = Produto>) -> Self {
    let rows: BTreeMap<i32, Produto> = rows.into_iter().map(|p| (p.id, p)).collect();
    let next_id = rows.keys().next_back().map_or(Some(1), |max| max.checked_add(1));
    Self {
      inner: RwLock::new(Inner { rows, next_id }),
    }
  }

  pub fn len(&self) -> usize {
    self.inner.read().rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

#[async_trait]
impl ProdutoStore for InMemoryProdutoStore {
  #[instrument(name = "memory_store::insert", skip_all)]
  async fn insert(&self, new: NewProduto) -> StoreResult<Produto> {
    let mut inner = self.inner.write();
    let id = inner.next_id.ok_or(StoreError::IdsExhausted)?;
    inner.next_id = id.checked_add(1);
    let produto = new.into_produto(id);
    inner.rows.insert(id, produto.clone());
    debug!(id, "Inserted produto.");
    Ok(produto)
  }

  async fn find_by_id(&self, id: i32) -> StoreResult<Option<Produto>> {
    Ok(self.inner.read().rows.get(&id).cloned())
  }

  async fn exists(&self, id: i32) -> StoreResult<bool> {
    Ok(self.inner.read().rows.contains_key(&id))
  }

  async fn list(&self, filter: ProdutoFilter) -> StoreResult<Vec<Produto>> {
    let mut produtos: Vec<Produto> = self
      .inner
      .read()
      .rows
      .values()
      .filter(|p| filter.matches(p))
      .cloned()
      .collect();
    produtos.sort_by(|a, b| a.nome.cmp(&b.nome).then(a.id.cmp(&b.id)));
    Ok(produtos)
  }

  #[instrument(name = "memory_store::update", skip(self, changes))]
  async fn update(&self, id: i32, changes: ProdutoChanges) -> StoreResult<()> {
    let mut inner = self.inner.write();
    match inner.rows.get_mut(&id) {
      Some(produto) => {
        changes.apply_to(produto);
        Ok(())
      }
      None => Err(StoreError::Conflict { id }),
    }
  }

  async fn delete(&self, id: i32) -> StoreResult<bool> {
    Ok(self.inner.write().rows.remove(&id).is_some())
  }
}
