// produto_api/src/web/routes.rs

use actix_web::{web, HttpRequest, HttpResponse};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::handlers::produto_handlers;

/// Base path of the Produto resource.
pub const PRODUTO_SCOPE: &str = "/api/produto";

async fn health_check_handler(app_state: web::Data<AppState>) -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({
    "status": "ok",
    "storeBackend": app_state.config.store_backend.as_str(),
  }))
}

fn json_error(err: actix_web::error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::BadRequest(err.to_string()).into()
}

fn query_error(err: actix_web::error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::BadRequest(err.to_string()).into()
}

fn path_error(err: actix_web::error::PathError, _req: &HttpRequest) -> actix_web::Error {
  AppError::BadRequest(err.to_string()).into()
}

// This function will be called in `main.rs` (and by the HTTP tests) to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/health", web::get().to(health_check_handler))
    .service(
      web::scope(PRODUTO_SCOPE)
        .app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .app_data(web::PathConfig::default().error_handler(path_error))
        .service(
          web::resource("")
            .route(web::get().to(produto_handlers::list_produtos_handler))
            .route(web::post().to(produto_handlers::create_produto_handler)),
        )
        .service(
          web::resource("/{id}")
            .route(web::get().to(produto_handlers::get_produto_handler))
            .route(web::put().to(produto_handlers::update_produto_handler))
            .route(web::delete().to(produto_handlers::delete_produto_handler)),
        ),
    );
}
