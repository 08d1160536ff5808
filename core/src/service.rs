// produto_core/src/service.rs

//! The resource lifecycle of `Produto`: validation, mapping between wire and
//! row shapes, and the outcome of each store call.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, instrument, warn};

use crate::dto::{CreateProdutoDto, ListProdutosQuery, ProdutoResponseDto, UpdateProdutoDto};
use crate::error::{ProdutoError, ProdutoResult, StoreError};
use crate::model::{NewProduto, ProdutoChanges, ProdutoFilter};
use crate::store::ProdutoStore;
use crate::validation::{validate_create, validate_update};

/// Stateless handler over a shared store. Cheap to clone.
#[derive(Clone)]
pub struct ProdutoService {
  store: Arc<dyn ProdutoStore>,
}

impl ProdutoService {
  pub fn new(store: Arc<dyn ProdutoStore>) -> Self {
    Self { store }
  }

  #[instrument(name = "produto_service::list", skip(self))]
  pub async fn list(&self, query: ListProdutosQuery) -> ProdutoResult<Vec<ProdutoResponseDto>> {
    let filter = ProdutoFilter::from(query);
    let produtos = self.store.list(filter).await.map_err(|e| store_failure("list", e))?;
    info!(count = produtos.len(), "Listed produtos.");
    Ok(produtos.into_iter().map(ProdutoResponseDto::from).collect())
  }

  #[instrument(name = "produto_service::get", skip(self))]
  pub async fn get(&self, id: i32) -> ProdutoResult<ProdutoResponseDto> {
    match self.store.find_by_id(id).await.map_err(|e| store_failure("get", e))? {
      Some(produto) => Ok(produto.into()),
      None => {
        warn!(id, "Produto not found.");
        Err(ProdutoError::NotFound { id })
      }
    }
  }

  #[instrument(name = "produto_service::create", skip_all)]
  pub async fn create(&self, dto: CreateProdutoDto) -> ProdutoResult<ProdutoResponseDto> {
    let valid = validate_create(&dto).map_err(|errors| {
      warn!(%errors, "Rejected produto creation.");
      ProdutoError::Validation(errors)
    })?;

    let new = NewProduto {
      nome: valid.nome,
      descricao: valid.descricao,
      preco: valid.preco,
      estoque: valid.estoque,
      ativo: valid.ativo,
      data_criacao: Utc::now(),
    };
    let produto = self.store.insert(new).await.map_err(|e| store_failure("create", e))?;
    info!(id = produto.id, "Created produto.");
    Ok(produto.into())
  }

  /// Replaces every mutable field of `id`.
  ///
  /// Existence is checked before the payload, so an unknown id is always `NotFound`.
  #[instrument(name = "produto_service::update", skip(self, dto))]
  pub async fn update(&self, id: i32, dto: UpdateProdutoDto) -> ProdutoResult<()> {
    let current = match self.store.find_by_id(id).await.map_err(|e| store_failure("update", e))? {
      Some(produto) => produto,
      None => {
        warn!(id, "Produto to update not found.");
        return Err(ProdutoError::NotFound { id });
      }
    };

    let valid = validate_update(&dto).map_err(|errors| {
      warn!(id, %errors, "Rejected produto update.");
      ProdutoError::Validation(errors)
    })?;

    let changes = ProdutoChanges {
      nome: valid.nome,
      descricao: valid.descricao,
      preco: valid.preco,
      estoque: valid.estoque,
      ativo: valid.ativo,
      data_atualizacao: Utc::now().max(current.data_criacao),
    };

    match self.store.update(id, changes).await {
      Ok(()) => {
        info!(id, "Updated produto.");
        Ok(())
      }
      Err(StoreError::Conflict { .. }) => self.resolve_conflict(id).await,
      Err(e) => Err(store_failure("update", e)),
    }
  }

  #[instrument(name = "produto_service::delete", skip(self))]
  pub async fn delete(&self, id: i32) -> ProdutoResult<()> {
    if self.store.delete(id).await.map_err(|e| store_failure("delete", e))? {
      info!(id, "Deleted produto.");
      Ok(())
    } else {
      warn!(id, "Produto to delete not found.");
      Err(ProdutoError::NotFound { id })
    }
  }

  /// A write raced with another writer: vanished rows become `NotFound`,
  /// anything else is left as an unrecoverable conflict.
  async fn resolve_conflict(&self, id: i32) -> ProdutoResult<()> {
    let still_there = self.store.exists(id).await.map_err(|e| store_failure("update", e))?;
    if still_there {
      error!(id, "Write conflict on produto that still exists.");
      Err(ProdutoError::Conflict { id })
    } else {
      warn!(id, "Produto removed by a concurrent writer.");
      Err(ProdutoError::NotFound { id })
    }
  }
}

fn store_failure(operation: &'static str, err: StoreError) -> ProdutoError {
  error!(operation, error = %err, "Store operation failed.");
  ProdutoError::from(err)
}
