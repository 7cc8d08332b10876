// src/services/product_service.rs

//! Product service: a pure pass-through over the persistence gateway.
//!
//! Each function forwards its arguments and result unchanged. The layer is
//! kept only as the seam where business rules would land if this service
//! ever grew any.

use tracing::instrument;
use uuid::Uuid;

use crate::errors::StoreError;
use crate::models::{NewProduct, Product, ProductPatch};
use crate::repository::ProductStore;

// 1. Get all products
#[instrument(name = "service::list_products", skip(store))]
pub async fn list_products(store: &dyn ProductStore) -> Result<Vec<Product>, StoreError> {
  store.find_all().await
}

// 2. Get product details
#[instrument(name = "service::get_product", skip(store), fields(product_id = %id))]
pub async fn get_product(store: &dyn ProductStore, id: Uuid) -> Result<Option<Product>, StoreError> {
  store.find_by_id(id).await
}

// 3. Create a new product
#[instrument(name = "service::create_product", skip(store, new))]
pub async fn create_product(store: &dyn ProductStore, new: NewProduct) -> Result<Product, StoreError> {
  store.insert(new).await
}

// 4. Update product information
#[instrument(name = "service::update_product", skip(store, patch), fields(product_id = %id))]
pub async fn update_product(
  store: &dyn ProductStore,
  id: Uuid,
  patch: ProductPatch,
) -> Result<Option<Product>, StoreError> {
  store.update(id, patch).await
}

// 5. Delete product
#[instrument(name = "service::delete_product", skip(store), fields(product_id = %id))]
pub async fn delete_product(store: &dyn ProductStore, id: Uuid) -> Result<Option<Product>, StoreError> {
  store.delete(id).await
}
