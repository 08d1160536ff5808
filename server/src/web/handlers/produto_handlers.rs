// produto_api/src/web/handlers/produto_handlers.rs

use actix_web::{http::header, web, HttpResponse};
use produto_core::{CreateProdutoDto, ListProdutosQuery, UpdateProdutoDto};
use serde_json::Value;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::routes::PRODUTO_SCOPE;

#[instrument(name = "handler::list_produtos", skip(app_state, query_params), fields(query = ?query_params.0))]
pub async fn list_produtos_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListProdutosQuery>,
) -> Result<HttpResponse, AppError> {
  let produtos = app_state
    .produtos
    .list(query_params.into_inner())
    .await
    .map_err(|e| AppError::from_produto(e, "Erro interno ao buscar produtos"))?;

  info!("Returning {} produtos.", produtos.len());
  Ok(HttpResponse::Ok().json(produtos))
}

#[instrument(name = "handler::get_produto", skip(app_state, path), fields(produto_id = %path.as_ref()))]
pub async fn get_produto_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();
  let produto = app_state
    .produtos
    .get(id)
    .await
    .map_err(|e| AppError::from_produto(e, "Erro interno ao buscar produto"))?;

  Ok(HttpResponse::Ok().json(produto))
}

#[instrument(name = "handler::create_produto", skip(app_state, req_payload))]
pub async fn create_produto_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CreateProdutoDto>,
) -> Result<HttpResponse, AppError> {
  let produto = app_state
    .produtos
    .create(req_payload.into_inner())
    .await
    .map_err(|e| AppError::from_produto(e, "Erro interno ao criar produto"))?;

  let location = format!("{}/{}", PRODUTO_SCOPE, produto.id);
  info!(produto_id = produto.id, %location, "Produto created.");
  Ok(
    HttpResponse::Created()
      .insert_header((header::LOCATION, location))
      .json(produto),
  )
}

/// The body is decoded after the id is known to exist, so an unknown id is
/// `404` even when the payload has fields of the wrong type.
#[instrument(name = "handler::update_produto", skip(app_state, path, req_payload), fields(produto_id = %path.as_ref()))]
pub async fn update_produto_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
  req_payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
  const INTERNAL_MESSAGE: &str = "Erro interno ao atualizar produto";
  let id = path.into_inner();
  let dto = match serde_json::from_value::<UpdateProdutoDto>(req_payload.into_inner()) {
    Ok(dto) => dto,
    Err(decode_err) => {
      app_state
        .produtos
        .get(id)
        .await
        .map_err(|e| AppError::from_produto(e, INTERNAL_MESSAGE))?;
      return Err(AppError::BadRequest(format!("Invalid update payload: {}", decode_err)));
    }
  };

  app_state
    .produtos
    .update(id, dto)
    .await
    .map_err(|e| AppError::from_produto(e, INTERNAL_MESSAGE))?;

  Ok(HttpResponse::NoContent().finish())
}

#[instrument(name = "handler::delete_produto", skip(app_state, path), fields(produto_id = %path.as_ref()))]
pub async fn delete_produto_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
  app_state
    .produtos
    .delete(path.into_inner())
    .await
    .map_err(|e| AppError::from_produto(e, "Erro interno ao deletar produto"))?;

  Ok(HttpResponse::NoContent().finish())
}
