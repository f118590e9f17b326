// server/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use marketvoice::NewProduct;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::ActingPrincipal;

// --- Request DTOs ---

#[derive(Deserialize, Debug)]
pub struct CreateProductPayload {
  pub name: Option<String>,
  /// Number or numeric string.
  pub price: Option<Value>,
  pub quantity_unit: Option<String>,
  pub description: Option<String>,
  pub meeting_point: Option<String>,
  /// Seller to list for; only honored for the trusted service.
  pub user_id: Option<Uuid>,
}

#[derive(Deserialize, Debug)]
pub struct DeleteProductPayload {
  pub product_id: Option<Uuid>,
}

/// Pulls `keywords` out of a search body. Anything other than a list of
/// strings is rejected here; blank-only lists are rejected by the search.
fn keywords_from(body: &Value) -> Result<Vec<String>, AppError> {
  let missing = || AppError::invalid_input("Keywords array is required and must not be empty");
  let items = body.get("keywords").and_then(Value::as_array).ok_or_else(missing)?;
  items
    .iter()
    .map(|k| {
      k.as_str()
        .map(str::to_string)
        .ok_or_else(|| AppError::invalid_input("Keywords must be strings"))
    })
    .collect()
}

// --- Handler Implementations ---

#[instrument(name = "handler::search_products", skip(app_state, body))]
pub async fn search_products_handler(
  app_state: web::Data<AppState>,
  body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
  let keywords = keywords_from(&body)?;
  let products = app_state.marketplace.search(keywords.as_slice()).await?;

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "count": products.len(),
      "products": products,
  })))
}

#[instrument(
    name = "handler::create_product",
    skip(app_state, principal, payload),
    fields(principal = principal.0.kind())
)]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  principal: ActingPrincipal,
  payload: web::Json<CreateProductPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = payload.into_inner();
  let new_product = NewProduct::parse(
    payload.name.as_deref(),
    payload.price.as_ref(),
    payload.quantity_unit.as_deref(),
    payload.description.as_deref(),
    payload.meeting_point.as_deref(),
  )?;

  let product = app_state
    .marketplace
    .create_product(&principal.0, payload.user_id, new_product)
    .await?;

  info!(product_id = %product.id, "Product created.");
  let message = format!(
    "Product \"{}\" listed successfully for ${} per {}",
    product.name, product.price, product.quantity_unit
  );
  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "product": product,
      "message": message,
  })))
}

#[instrument(name = "handler::delete_product", skip(app_state, principal, payload))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  principal: ActingPrincipal,
  payload: web::Json<DeleteProductPayload>,
) -> Result<HttpResponse, AppError> {
  let product_id = payload
    .product_id
    .ok_or_else(|| AppError::invalid_input("Product ID is required"))?;

  let deleted = app_state.marketplace.delete_product(&principal.0, product_id).await?;

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "message": format!("Product \"{}\" has been deleted successfully", deleted.name),
  })))
}

#[instrument(name = "handler::list_my_products", skip(app_state, principal))]
pub async fn list_my_products_handler(
  app_state: web::Data<AppState>,
  principal: ActingPrincipal,
) -> Result<HttpResponse, AppError> {
  let products = app_state.marketplace.list_products_by_owner(&principal.0).await?;
  info!("Successfully fetched {} products.", products.len());

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "count": products.len(),
      "products": products,
  })))
}
