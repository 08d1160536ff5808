// produto_core/src/store/postgres.rs

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{instrument, warn};

use super::{ProdutoStore, StoreResult};
use crate::error::StoreError;
use crate::model::{NewProduto, Produto, ProdutoChanges, ProdutoFilter};

const SELECT_COLUMNS: &str =
  "SELECT id, nome, descricao, preco, estoque, ativo, data_criacao, data_atualizacao FROM produtos";

/// `ProdutoStore` over a PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct PgProdutoStore {
  pool: PgPool,
}

impl PgProdutoStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  pub fn pool(&self) -> &PgPool {
    &self.pool
  }
}

#[async_trait]
impl ProdutoStore for PgProdutoStore {
  #[instrument(name = "pg_store::insert", skip_all, err(Display))]
  async fn insert(&self, new: NewProduto) -> StoreResult<Produto> {
    let produto: Produto = sqlx::query_as(
      "INSERT INTO produtos (nome, descricao, preco, estoque, ativo, data_criacao) \
       VALUES ($1, $2, $3, $4, $5, $6) \
       RETURNING id, nome, descricao, preco, estoque, ativo, data_criacao, data_atualizacao",
    )
    .bind(&new.nome)
    .bind(&new.descricao)
    .bind(new.preco)
    .bind(new.estoque)
    .bind(new.ativo)
    .bind(new.data_criacao)
    .fetch_one(&self.pool)
    .await?;
    Ok(produto)
  }

  #[instrument(name = "pg_store::find_by_id", skip(self), err(Display))]
  async fn find_by_id(&self, id: i32) -> StoreResult<Option<Produto>> {
    let produto: Option<Produto> = sqlx::query_as(&format!("{} WHERE id = $1", SELECT_COLUMNS))
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;
    Ok(produto)
  }

  #[instrument(name = "pg_store::exists", skip(self), err(Display))]
  async fn exists(&self, id: i32) -> StoreResult<bool> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM produtos WHERE id = $1)")
      .bind(id)
      .fetch_one(&self.pool)
      .await?;
    Ok(exists)
  }

  #[instrument(name = "pg_store::list", skip(self), err(Display))]
  async fn list(&self, filter: ProdutoFilter) -> StoreResult<Vec<Produto>> {
    let produtos: Vec<Produto> = sqlx::query_as(&format!(
      "{} WHERE ($1::boolean IS NULL OR ativo = $1) \
       AND ($2::numeric IS NULL OR preco >= $2) \
       AND ($3::numeric IS NULL OR preco <= $3) \
       ORDER BY nome ASC, id ASC",
      SELECT_COLUMNS
    ))
    .bind(filter.ativo)
    .bind(filter.preco_min)
    .bind(filter.preco_max)
    .fetch_all(&self.pool)
    .await?;
    Ok(produtos)
  }

  #[instrument(name = "pg_store::update", skip(self, changes), err(Display))]
  async fn update(&self, id: i32, changes: ProdutoChanges) -> StoreResult<()> {
    let result = sqlx::query(
      "UPDATE produtos SET nome = $2, descricao = $3, preco = $4, estoque = $5, ativo = $6, data_atualizacao = $7 \
       WHERE id = $1",
    )
    .bind(id)
    .bind(&changes.nome)
    .bind(&changes.descricao)
    .bind(changes.preco)
    .bind(changes.estoque)
    .bind(changes.ativo)
    .bind(changes.data_atualizacao)
    .execute(&self.pool)
    .await
    .map_err(|e| StoreError::from_write(e, id))?;

    if result.rows_affected() == 0 {
      // The row was present when the caller checked; another writer got there first.
      warn!(id, "Update matched no rows.");
      return Err(StoreError::Conflict { id });
    }
    Ok(())
  }

  #[instrument(name = "pg_store::delete", skip(self), err(Display))]
  async fn delete(&self, id: i32) -> StoreResult<bool> {
    let result = sqlx::query("DELETE FROM produtos WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(|e| StoreError::from_write(e, id))?;
    Ok(result.rows_affected() > 0)
  }
}
