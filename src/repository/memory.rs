// src/repository/memory.rs

//! In-memory gateway implementation with the same observable semantics as
//! the Postgres one. Used by the HTTP and store tests; also handy for
//! running the server without a database.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

use crate::errors::StoreError;
use crate::models::{NewProduct, Product, ProductPatch};
use crate::repository::ProductStore;

#[derive(Default)]
pub struct InMemoryProductStore {
  rows: RwLock<HashMap<Uuid, Product>>,
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
  async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
    Ok(self.rows.read().values().cloned().collect())
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, StoreError> {
    Ok(self.rows.read().get(&id).cloned())
  }

  async fn insert(&self, new: NewProduct) -> Result<Product, StoreError> {
    let now = Utc::now();
    let product = Product {
      id: Uuid::new_v4(),
      name: new.name,
      description: new.description,
      price: new.price,
      stock: new.stock,
      created_at: now,
      updated_at: now,
    };

    self.rows.write().insert(product.id, product.clone());
    Ok(product)
  }

  async fn update(&self, id: Uuid, patch: ProductPatch) -> Result<Option<Product>, StoreError> {
    let mut rows = self.rows.write();
    let Some(product) = rows.get_mut(&id) else {
      return Ok(None);
    };

    patch.apply(product);
    product.updated_at = Utc::now();
    Ok(Some(product.clone()))
  }

  async fn delete(&self, id: Uuid) -> Result<Option<Product>, StoreError> {
    Ok(self.rows.write().remove(&id))
  }
}
