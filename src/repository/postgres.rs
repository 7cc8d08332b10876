// src/repository/postgres.rs

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::errors::StoreError;
use crate::models::{NewProduct, Product, ProductPatch};
use crate::repository::ProductStore;

/// Postgres-backed gateway; one statement per operation, no transactions
/// (single-entity, single-row writes are atomic at the store).
pub struct PgProductStore {
  pool: PgPool,
}

impl PgProductStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

// Surfaces schema/constraint failures distinctly from connectivity or
// protocol failures so callers can log them apart. Both still collapse to
// the same 500 at the HTTP boundary.
fn map_write_error(e: sqlx::Error) -> StoreError {
  match &e {
    sqlx::Error::Database(db) if db.constraint().is_some() => {
      StoreError::Constraint(db.message().to_string())
    }
    _ => StoreError::Database(e),
  }
}

#[async_trait]
impl ProductStore for PgProductStore {
  #[instrument(name = "store::find_all", skip(self))]
  async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
    let products = sqlx::query_as::<_, Product>(
      "SELECT id, name, description, price, stock, created_at, updated_at FROM products",
    )
    .fetch_all(&self.pool)
    .await?;

    Ok(products)
  }

  #[instrument(name = "store::find_by_id", skip(self), fields(product_id = %id))]
  async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, StoreError> {
    let product = sqlx::query_as::<_, Product>(
      "SELECT id, name, description, price, stock, created_at, updated_at \
       FROM products WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    Ok(product)
  }

  #[instrument(name = "store::insert", skip(self, new))]
  async fn insert(&self, new: NewProduct) -> Result<Product, StoreError> {
    let id = Uuid::new_v4();

    let product = sqlx::query_as::<_, Product>(
      "INSERT INTO products (id, name, description, price, stock) \
       VALUES ($1, $2, $3, $4, $5) \
       RETURNING id, name, description, price, stock, created_at, updated_at",
    )
    .bind(id)
    .bind(&new.name)
    .bind(&new.description)
    .bind(new.price)
    .bind(new.stock)
    .fetch_one(&self.pool)
    .await
    .map_err(map_write_error)?;

    Ok(product)
  }

  #[instrument(name = "store::update", skip(self, patch), fields(product_id = %id))]
  async fn update(&self, id: Uuid, patch: ProductPatch) -> Result<Option<Product>, StoreError> {
    // COALESCE keeps absent patch fields at their stored values; the write
    // always refreshes updated_at, matching the partial-update contract.
    let product = sqlx::query_as::<_, Product>(
      "UPDATE products SET \
         name = COALESCE($2, name), \
         description = COALESCE($3, description), \
         price = COALESCE($4, price), \
         stock = COALESCE($5, stock), \
         updated_at = now() \
       WHERE id = $1 \
       RETURNING id, name, description, price, stock, created_at, updated_at",
    )
    .bind(id)
    .bind(patch.name)
    .bind(patch.description)
    .bind(patch.price)
    .bind(patch.stock)
    .fetch_optional(&self.pool)
    .await
    .map_err(map_write_error)?;

    Ok(product)
  }

  #[instrument(name = "store::delete", skip(self), fields(product_id = %id))]
  async fn delete(&self, id: Uuid) -> Result<Option<Product>, StoreError> {
    let product = sqlx::query_as::<_, Product>(
      "DELETE FROM products WHERE id = $1 \
       RETURNING id, name, description, price, stock, created_at, updated_at",
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    Ok(product)
  }
}
