// src/repository/mod.rs

//! The persistence gateway: a thin seam between the service layer and the
//! data store, one trait method per store operation.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::StoreError;
use crate::models::{NewProduct, Product, ProductPatch};

/// Gateway contract over the `products` table.
///
/// Absence is `Ok(None)`, never an error. Concurrent updates against the
/// same id are last-writer-wins, serialized only by the underlying store;
/// this trait adds no ordering guarantee, retries, or locking of its own.
#[async_trait]
pub trait ProductStore: Send + Sync {
  /// Returns all rows, store-default order.
  async fn find_all(&self) -> Result<Vec<Product>, StoreError>;

  /// Returns the matching row, or `None` when the id is unknown.
  async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, StoreError>;

  /// Inserts a row; the store assigns `id`, `created_at` and `updated_at`.
  async fn insert(&self, new: NewProduct) -> Result<Product, StoreError>;

  /// Applies a partial update and refreshes `updated_at`; `None` when the
  /// id is unknown.
  async fn update(&self, id: Uuid, patch: ProductPatch) -> Result<Option<Product>, StoreError>;

  /// Hard-deletes the row, returning its prior state; `None` when the id
  /// is unknown.
  async fn delete(&self, id: Uuid) -> Result<Option<Product>, StoreError>;
}

// Re-export the implementations for convenient access
pub use memory::InMemoryProductStore;
pub use postgres::PgProductStore;
