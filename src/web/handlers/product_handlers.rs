// src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{NewProduct, ProductPatch};
use crate::services::product_service;
use crate::state::AppState;
use crate::web::response::ApiResponse;

// --- Request DTO ---

// Every field optional so a missing key reaches the null-check below and
// gets the envelope-shaped 400 instead of a deserialization error.
#[derive(Deserialize, Debug)]
pub struct CreateProductPayload {
  pub name: Option<String>,
  pub description: Option<String>,
  #[serde(default, with = "rust_decimal::serde::float_option")]
  pub price: Option<Decimal>,
  pub stock: Option<i32>,
}

// The path `{id}` is an opaque string to the client. A value that cannot be
// a UUID cannot match any row, so it takes the not-found branch rather than
// a malformed-request one.
fn parse_product_id(raw: &str) -> Result<Uuid, AppError> {
  Uuid::parse_str(raw).map_err(|_| {
    warn!(product_id = %raw, "Path id is not a valid UUID; treating as not found.");
    AppError::NotFound("Product not found".to_string())
  })
}

// --- Handler Implementations ---

// 1. Get product list
#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = product_service::list_products(app_state.products.as_ref())
    .await
    .map_err(|e| AppError::store("Error retrieving product list", e))?;

  info!("Successfully fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(ApiResponse::success("Get all products", products)))
}

// 2. Get product details
#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product_id = parse_product_id(&path.into_inner())?;

  let product = product_service::get_product(app_state.products.as_ref(), product_id)
    .await
    .map_err(|e| AppError::store("Error retrieving product details", e))?
    .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

  Ok(HttpResponse::Ok().json(ApiResponse::success("Get product by ID", product)))
}

// 3. Create a new product
#[instrument(name = "handler::create_product", skip(app_state, payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<CreateProductPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = payload.into_inner();

  // Null-checks only: name must be present and non-empty, price and stock
  // present. No range validation happens here.
  let (Some(name), Some(price), Some(stock)) = (payload.name, payload.price, payload.stock) else {
    return Err(AppError::Validation("Missing product information".to_string()));
  };
  if name.is_empty() {
    return Err(AppError::Validation("Missing product information".to_string()));
  }

  let new_product = NewProduct {
    name,
    description: payload.description,
    price,
    stock,
  };

  let product = product_service::create_product(app_state.products.as_ref(), new_product)
    .await
    .map_err(|e| AppError::store("Error adding product", e))?;

  info!(product_id = %product.id, "Product created.");
  Ok(HttpResponse::Created().json(ApiResponse::success("Product added successfully", product)))
}

// 4. Update product
#[instrument(name = "handler::update_product", skip(app_state, path, patch), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  patch: web::Json<ProductPatch>,
) -> Result<HttpResponse, AppError> {
  let product_id = parse_product_id(&path.into_inner())?;

  let product = product_service::update_product(app_state.products.as_ref(), product_id, patch.into_inner())
    .await
    .map_err(|e| AppError::store("Error updating product", e))?
    .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

  info!(product_id = %product.id, "Product updated.");
  Ok(HttpResponse::Ok().json(ApiResponse::success("Product updated successfully", product)))
}

// 5. Delete product
#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product_id = parse_product_id(&path.into_inner())?;

  let product = product_service::delete_product(app_state.products.as_ref(), product_id)
    .await
    .map_err(|e| AppError::store("Error deleting product", e))?
    .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

  info!(product_id = %product.id, "Product deleted.");
  Ok(HttpResponse::Ok().json(ApiResponse::success("Product deleted successfully", product)))
}
