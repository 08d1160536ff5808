// produto_core/src/schema.rs

//! Provisioning of the `produtos` table: DDL plus the two seed rows.
//!
//! Both steps are idempotent. Seeding only touches an empty table.

use anyhow::Context;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{info, instrument};

use crate::model::Produto;

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS produtos (
  id integer GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
  nome varchar(100) NOT NULL,
  descricao varchar(500) NULL,
  preco numeric(18,2) NOT NULL,
  estoque integer NOT NULL,
  ativo boolean NOT NULL,
  data_criacao timestamp with time zone NOT NULL,
  data_atualizacao timestamp with time zone NULL
)"#;

const CREATE_NOME_INDEX: &str = "CREATE INDEX IF NOT EXISTS ix_produtos_nome ON produtos (nome)";

/// 2025-11-14T00:00:00Z
const SEED_CREATED_AT_SECS: i64 = 1_763_078_400;

/// The rows every fresh installation starts with.
pub fn seed_rows() -> Vec<Produto> {
  let created = DateTime::<Utc>::from_timestamp(SEED_CREATED_AT_SECS, 0).unwrap_or_default();
  vec![
    Produto {
      id: 1,
      nome: "Notebook Dell".to_string(),
      descricao: Some("Notebook para desenvolvimento".to_string()),
      preco: Decimal::new(350000, 2),
      estoque: 10,
      ativo: true,
      data_criacao: created,
      data_atualizacao: None,
    },
    Produto {
      id: 2,
      nome: "Mouse Logitech".to_string(),
      descricao: Some("Mouse ergonômico sem fio".to_string()),
      preco: Decimal::new(15000, 2),
      estoque: 50,
      ativo: true,
      data_criacao: created,
      data_atualizacao: None,
    },
  ]
}

#[instrument(name = "schema::migrate", skip_all)]
pub async fn migrate(pool: &PgPool) -> anyhow::Result<()> {
  sqlx::query(CREATE_TABLE)
    .execute(pool)
    .await
    .context("creating table produtos")?;
  sqlx::query(CREATE_NOME_INDEX)
    .execute(pool)
    .await
    .context("creating index ix_produtos_nome")?;
  info!("Schema for produtos is in place.");
  Ok(())
}

/// Inserts the seed rows when the table is empty. Returns how many rows were inserted.
#[instrument(name = "schema::seed", skip_all)]
pub async fn seed(pool: &PgPool) -> anyhow::Result<u64> {
  let mut tx = pool.begin().await.context("opening seed transaction")?;

  let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM produtos")
    .fetch_one(&mut *tx)
    .await
    .context("counting produtos")?;
  if existing > 0 {
    info!(existing, "Table produtos already has rows; skipping seed.");
    return Ok(0);
  }

  let mut inserted = 0;
  for p in seed_rows() {
    inserted += sqlx::query(
      "INSERT INTO produtos (id, nome, descricao, preco, estoque, ativo, data_criacao, data_atualizacao) \
       VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
    )
    .bind(p.id)
    .bind(&p.nome)
    .bind(&p.descricao)
    .bind(p.preco)
    .bind(p.estoque)
    .bind(p.ativo)
    .bind(p.data_criacao)
    .bind(p.data_atualizacao)
    .execute(&mut *tx)
    .await
    .with_context(|| format!("inserting seed produto {}", p.id))?
    .rows_affected();
  }

  // Explicit ids do not advance the identity sequence.
  sqlx::query("SELECT setval(pg_get_serial_sequence('produtos', 'id'), (SELECT MAX(id) FROM produtos))")
    .execute(&mut *tx)
    .await
    .context("advancing produtos id sequence")?;

  tx.commit().await.context("committing seed transaction")?;
  info!(inserted, "Seeded produtos.");
  Ok(inserted)
}

/// Runs the provisioning steps enabled by the caller.
pub async fn provision(pool: &PgPool, run_migrations: bool, seed_data: bool) -> anyhow::Result<()> {
  if run_migrations {
    migrate(pool).await?;
  }
  if seed_data {
    seed(pool).await?;
  }
  Ok(())
}
