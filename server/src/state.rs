// produto_api/src/state.rs
use crate::config::AppConfig;
use produto_core::{ProdutoService, ProdutoStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub produtos: ProdutoService,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn new(store: Arc<dyn ProdutoStore>, config: Arc<AppConfig>) -> Self {
    Self {
      produtos: ProdutoService::new(store),
      config,
    }
  }
}
