// produto_core/src/model.rs

//! Persisted shapes of the `produtos` table and the inputs the store accepts.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// A row of the `produtos` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Produto {
  pub id: i32,
  pub nome: String,
  pub descricao: Option<String>,
  pub preco: Decimal,
  pub estoque: i32,
  pub ativo: bool,
  pub data_criacao: DateTime<Utc>,
  pub data_atualizacao: Option<DateTime<Utc>>,
}

/// Everything needed to insert a row; the store assigns `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduto {
  pub nome: String,
  pub descricao: Option<String>,
  pub preco: Decimal,
  pub estoque: i32,
  pub ativo: bool,
  pub data_criacao: DateTime<Utc>,
}

impl NewProduto {
  /// Materializes the row once the store has picked an id.
  pub fn into_produto(self, id: i32) -> Produto {
    Produto {
      id,
      nome: self.nome,
      descricao: self.descricao,
      preco: self.preco,
      estoque: self.estoque,
      ativo: self.ativo,
      data_criacao: self.data_criacao,
      data_atualizacao: None,
    }
  }
}

/// Wholesale replacement of the mutable columns of an existing row.
#[derive(Debug, Clone, PartialEq)]
pub struct ProdutoChanges {
  pub nome: String,
  pub descricao: Option<String>,
  pub preco: Decimal,
  pub estoque: i32,
  pub ativo: bool,
  pub data_atualizacao: DateTime<Utc>,
}

impl ProdutoChanges {
  pub fn apply_to(&self, produto: &mut Produto) {
    produto.nome = self.nome.clone();
    produto.descricao = self.descricao.clone();
    produto.preco = self.preco;
    produto.estoque = self.estoque;
    produto.ativo = self.ativo;
    produto.data_atualizacao = Some(self.data_atualizacao);
  }
}

/// List filter. Absent fields impose no constraint; bounds are inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProdutoFilter {
  pub ativo: Option<bool>,
  pub preco_min: Option<Decimal>,
  pub preco_max: Option<Decimal>,
}

impl ProdutoFilter {
  pub fn matches(&self, produto: &Produto) -> bool {
    self.ativo.map_or(true, |ativo| produto.ativo == ativo)
      && self.preco_min.map_or(true, |min| produto.preco >= min)
      && self.preco_max.map_or(true, |max| produto.preco <= max)
  }
}
