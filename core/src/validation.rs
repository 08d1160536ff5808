// produto_core/src/validation.rs

//! Field rules for creation and update payloads.
//!
//! Every rule is evaluated independently, so a rejected payload reports all
//! of its violated fields at once.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::dto::{CreateProdutoDto, UpdateProdutoDto};
use crate::error::ValidationErrors;

pub const NOME_MIN_LEN: usize = 3;
pub const NOME_MAX_LEN: usize = 100;
pub const DESCRICAO_MAX_LEN: usize = 500;
/// 0.01
pub const PRECO_MIN: Decimal = Decimal::from_parts(1, 0, 0, false, 2);
/// 1,000,000
pub const PRECO_MAX: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);
/// Scale of the `preco numeric(18,2)` column.
pub const PRECO_SCALE: u32 = 2;

/// A payload that passed every rule, ready to be mapped onto a row.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidProduto {
  pub nome: String,
  pub descricao: Option<String>,
  pub preco: Decimal,
  pub estoque: i32,
  pub ativo: bool,
}

pub fn validate_create(dto: &CreateProdutoDto) -> Result<ValidProduto, ValidationErrors> {
  let mut errors = ValidationErrors::new();
  let nome = check_nome(dto.nome.as_deref(), &mut errors);
  check_descricao(dto.descricao.as_deref(), &mut errors);
  let preco = check_preco(dto.preco, &mut errors);
  let estoque = check_estoque(dto.estoque, &mut errors);

  match (nome, preco, estoque) {
    (Some(nome), Some(preco), Some(estoque)) if errors.is_empty() => Ok(ValidProduto {
      nome: nome.to_string(),
      descricao: dto.descricao.clone(),
      preco: round_preco(preco),
      estoque,
      ativo: dto.ativo.unwrap_or(true),
    }),
    _ => Err(errors),
  }
}

pub fn validate_update(dto: &UpdateProdutoDto) -> Result<ValidProduto, ValidationErrors> {
  let mut errors = ValidationErrors::new();
  let nome = check_nome(dto.nome.as_deref(), &mut errors);
  check_descricao(dto.descricao.as_deref(), &mut errors);
  let preco = check_preco(dto.preco, &mut errors);
  let estoque = check_estoque(dto.estoque, &mut errors);
  if dto.ativo.is_none() {
    errors.add("ativo", "O campo ativo é obrigatório");
  }

  match (nome, preco, estoque, dto.ativo) {
    (Some(nome), Some(preco), Some(estoque), Some(ativo)) if errors.is_empty() => Ok(ValidProduto {
      nome: nome.to_string(),
      descricao: dto.descricao.clone(),
      preco: round_preco(preco),
      estoque,
      ativo,
    }),
    _ => Err(errors),
  }
}

/// Rounds to the two decimal places the store keeps.
pub fn round_preco(preco: Decimal) -> Decimal {
  preco.round_dp_with_strategy(PRECO_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

fn check_nome<'a>(nome: Option<&'a str>, errors: &mut ValidationErrors) -> Option<&'a str> {
  let nome = match nome {
    Some(n) if !n.trim().is_empty() => n,
    _ => {
      errors.add("nome", "O nome é obrigatório");
      return None;
    }
  };
  let len = nome.chars().count();
  if !(NOME_MIN_LEN..=NOME_MAX_LEN).contains(&len) {
    errors.add(
      "nome",
      format!("O nome deve ter entre {} e {} caracteres", NOME_MIN_LEN, NOME_MAX_LEN),
    );
    return None;
  }
  Some(nome)
}

fn check_descricao(descricao: Option<&str>, errors: &mut ValidationErrors) {
  if let Some(descricao) = descricao {
    if descricao.chars().count() > DESCRICAO_MAX_LEN {
      errors.add(
        "descricao",
        format!("A descrição não pode exceder {} caracteres", DESCRICAO_MAX_LEN),
      );
    }
  }
}

fn check_preco(preco: Option<Decimal>, errors: &mut ValidationErrors) -> Option<Decimal> {
  match preco {
    None => {
      errors.add("preco", "O preço é obrigatório");
      None
    }
    Some(p) if p < PRECO_MIN || p > PRECO_MAX => {
      errors.add("preco", "O preço deve estar entre 0.01 e 1.000.000");
      None
    }
    Some(p) => Some(p),
  }
}

fn check_estoque(estoque: Option<i32>, errors: &mut ValidationErrors) -> Option<i32> {
  match estoque {
    None => {
      errors.add("estoque", "O estoque é obrigatório");
      None
    }
    Some(e) if e < 0 => {
      errors.add("estoque", "O estoque não pode ser negativo");
      None
    }
    Some(e) => Some(e),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::str::FromStr;

  fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
  }

  #[test]
  fn bounds_constants() {
    assert_eq!(PRECO_MIN, dec("0.01"));
    assert_eq!(PRECO_MAX, dec("1000000"));
  }

  #[test]
  fn nome_length_counts_characters_not_bytes() {
    let mut errors = ValidationErrors::new();
    // 3 characters, 6 bytes
    assert_eq!(check_nome(Some("ção"), &mut errors), Some("ção"));
    assert!(errors.is_empty());
  }

  #[test]
  fn whitespace_only_nome_is_missing() {
    let mut errors = ValidationErrors::new();
    assert!(check_nome(Some("    "), &mut errors).is_none());
    assert_eq!(errors.messages("nome"), ["O nome é obrigatório".to_string()]);
  }

  #[test]
  fn preco_is_rounded_half_away_from_zero() {
    assert_eq!(round_preco(dec("10.005")), dec("10.01"));
    assert_eq!(round_preco(dec("10.004")), dec("10.00"));
  }
}
