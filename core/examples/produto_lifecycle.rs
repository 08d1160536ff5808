// produto_core/examples/produto_lifecycle.rs

use std::str::FromStr;
use std::sync::Arc;

use produto_core::{
  CreateProdutoDto, InMemoryProdutoStore, ListProdutosQuery, ProdutoError, ProdutoService, UpdateProdutoDto,
};
use rust_decimal::Decimal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), ProdutoError> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Produto Lifecycle Example ---");

  // 1. A service over the in-memory store, starting from the two seed rows
  let service = ProdutoService::new(Arc::new(InMemoryProdutoStore::seeded()));

  // 2. Create: `ativo` defaults to true
  let preco = Decimal::from_str("99.90").unwrap_or_default();
  let teclado = service
    .create(CreateProdutoDto {
      nome: Some("Teclado".to_string()),
      preco: Some(preco),
      estoque: Some(5),
      ..Default::default()
    })
    .await?;
  info!(id = teclado.id, ativo = teclado.ativo, "Created {}", teclado.nome);

  // 3. A payload breaking several rules is rejected with every field listed
  match service
    .create(CreateProdutoDto {
      nome: Some("No".to_string()),
      preco: Some(Decimal::ZERO),
      estoque: Some(-1),
      ..Default::default()
    })
    .await
  {
    Err(ProdutoError::Validation(errors)) => warn!("Rejected as expected: {}", errors),
    other => info!("Unexpected outcome: {:?}", other),
  }

  // 4. Update replaces every mutable field
  service
    .update(
      teclado.id,
      UpdateProdutoDto {
        nome: Some("Teclado Mecânico".to_string()),
        descricao: Some("Switches marrons".to_string()),
        preco: Some(Decimal::new(34990, 2)),
        estoque: Some(2),
        ativo: Some(true),
      },
    )
    .await?;

  // 5. List everything, ordered by nome
  for produto in service.list(ListProdutosQuery::default()).await? {
    info!(id = produto.id, preco = %produto.preco, "{}", produto.nome);
  }

  // 6. Delete, then observe NotFound on the second attempt
  service.delete(teclado.id).await?;
  if let Err(e) = service.delete(teclado.id).await {
    info!("Second delete: {}", e);
  }

  Ok(())
}
