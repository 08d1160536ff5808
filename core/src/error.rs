// produto_core/src/error.rs

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Field-level validation failures, keyed by wire field name (`nome`, `preco`, ...).
///
/// Every violated field is recorded; a field may carry more than one message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
  fields: BTreeMap<&'static str, Vec<String>>,
}

impl ValidationErrors {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
    self.fields.entry(field).or_default().push(message.into());
  }

  pub fn is_empty(&self) -> bool {
    self.fields.is_empty()
  }

  pub fn contains(&self, field: &str) -> bool {
    self.fields.contains_key(field)
  }

  /// Names of the violated fields, in alphabetical order.
  pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
    self.fields.keys().copied()
  }

  pub fn messages(&self, field: &str) -> &[String] {
    self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
  }

  pub fn fields(&self) -> &BTreeMap<&'static str, Vec<String>> {
    &self.fields
  }
}

impl fmt::Display for ValidationErrors {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut first = true;
    for (field, messages) in &self.fields {
      for message in messages {
        if !first {
          f.write_str("; ")?;
        }
        write!(f, "{}: {}", field, message)?;
        first = false;
      }
    }
    Ok(())
  }
}

impl std::error::Error for ValidationErrors {}

/// Failures reported by a `ProdutoStore` implementation.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),

  /// A concurrent write removed or locked the row between read and write.
  #[error("Write conflict on produto {id}")]
  Conflict { id: i32 },

  #[error("No produto ids left to assign")]
  IdsExhausted,
}

impl StoreError {
  /// Classifies a sqlx error raised while writing row `id`.
  ///
  /// Serialization failures (40001) and deadlocks (40P01) are conflicts.
  pub fn from_write(err: sqlx::Error, id: i32) -> Self {
    if let sqlx::Error::Database(db_err) = &err {
      if matches!(db_err.code().as_deref(), Some("40001") | Some("40P01")) {
        return StoreError::Conflict { id };
      }
    }
    StoreError::Database(err)
  }
}

#[derive(Debug, Error)]
pub enum ProdutoError {
  #[error("Validation failed: {0}")]
  Validation(ValidationErrors),

  #[error("Produto com ID {id} não encontrado")]
  NotFound { id: i32 },

  #[error("Concurrent update conflict on produto {id}")]
  Conflict { id: i32 },

  #[error("Store failure: {0}")]
  Store(#[source] StoreError),
}

impl From<ValidationErrors> for ProdutoError {
  fn from(errors: ValidationErrors) -> Self {
    ProdutoError::Validation(errors)
  }
}

impl From<StoreError> for ProdutoError {
  fn from(err: StoreError) -> Self {
    match err {
      StoreError::Conflict { id } => ProdutoError::Conflict { id },
      other => ProdutoError::Store(other),
    }
  }
}

pub type ProdutoResult<T, E = ProdutoError> = std::result::Result<T, E>;
