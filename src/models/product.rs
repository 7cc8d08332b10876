// src/models/product.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The sole persisted entity.
///
/// `id`, `created_at` and `updated_at` are assigned by the gateway and are
/// immutable from the client's point of view; `update` refreshes
/// `updated_at` only. `price` travels as a JSON number on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: Uuid,
  pub name: String,
  pub description: Option<String>, // Description can be optional
  #[serde(with = "rust_decimal::serde::float")]
  pub price: Decimal,
  pub stock: i32,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Insert payload: everything the client provides; the gateway fills in the
/// identity and timestamp columns.
#[derive(Debug, Clone)]
pub struct NewProduct {
  pub name: String,
  pub description: Option<String>,
  pub price: Decimal,
  pub stock: i32,
}

/// Partial update with every field independently present-or-absent.
///
/// An absent field leaves the stored value untouched. Modelled explicitly
/// rather than as an arbitrary-shaped object so a missing key can never
/// overwrite a column with a null it didn't ask for.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductPatch {
  pub name: Option<String>,
  pub description: Option<String>,
  #[serde(with = "rust_decimal::serde::float_option")]
  pub price: Option<Decimal>,
  pub stock: Option<i32>,
}

impl ProductPatch {
  /// Applies the provided fields onto `target`, leaving absent ones alone.
  /// Timestamp maintenance is the gateway's job, not the patch's.
  pub fn apply(&self, target: &mut Product) {
    if let Some(name) = &self.name {
      target.name = name.clone();
    }
    if let Some(description) = &self.description {
      target.description = Some(description.clone());
    }
    if let Some(price) = self.price {
      target.price = price;
    }
    if let Some(stock) = self.stock {
      target.stock = stock;
    }
  }
}
