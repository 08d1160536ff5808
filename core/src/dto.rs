// produto_core/src/dto.rs

//! Wire-level request and response shapes. Field names are camelCase on the wire.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{Produto, ProdutoFilter};

/// Body of `POST /api/produto`.
///
/// Required fields are still `Option` here so that a missing field is
/// reported as a validation error instead of a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProdutoDto {
  pub nome: Option<String>,
  pub descricao: Option<String>,
  pub preco: Option<Decimal>,
  pub estoque: Option<i32>,
  /// Defaults to `true` when omitted.
  pub ativo: Option<bool>,
}

/// Body of `PUT /api/produto/{id}`. Same rules as creation, but `ativo` is required.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProdutoDto {
  pub nome: Option<String>,
  pub descricao: Option<String>,
  pub preco: Option<Decimal>,
  pub estoque: Option<i32>,
  pub ativo: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProdutoResponseDto {
  pub id: i32,
  pub nome: String,
  pub descricao: Option<String>,
  #[serde(with = "rust_decimal::serde::float")]
  pub preco: Decimal,
  pub estoque: i32,
  pub ativo: bool,
  pub data_criacao: DateTime<Utc>,
  pub data_atualizacao: Option<DateTime<Utc>>,
}

impl From<Produto> for ProdutoResponseDto {
  fn from(p: Produto) -> Self {
    Self {
      id: p.id,
      nome: p.nome,
      descricao: p.descricao,
      preco: p.preco,
      estoque: p.estoque,
      ativo: p.ativo,
      data_criacao: p.data_criacao,
      data_atualizacao: p.data_atualizacao,
    }
  }
}

/// Query string of `GET /api/produto`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProdutosQuery {
  pub ativo: Option<bool>,
  pub preco_min: Option<Decimal>,
  pub preco_max: Option<Decimal>,
}

impl From<ListProdutosQuery> for ProdutoFilter {
  fn from(q: ListProdutosQuery) -> Self {
    ProdutoFilter {
      ativo: q.ativo,
      preco_min: q.preco_min,
      preco_max: q.preco_max,
    }
  }
}
