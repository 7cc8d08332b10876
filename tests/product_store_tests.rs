// tests/product_store_tests.rs
mod common; // Reference the common module

use common::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use product_service::models::{NewProduct, ProductPatch};
use product_service::repository::{InMemoryProductStore, ProductStore};

fn widget() -> NewProduct {
  NewProduct {
    name: "Widget".to_string(),
    description: Some("A standard widget".to_string()),
    price: Decimal::new(999, 2), // 9.99
    stock: 10,
  }
}

#[tokio::test]
async fn insert_assigns_identity_and_timestamps() {
  setup_tracing();
  let store = InMemoryProductStore::default();

  let product = store.insert(widget()).await.unwrap();

  assert!(!product.id.is_nil());
  assert_eq!(product.name, "Widget");
  assert_eq!(product.price, Decimal::new(999, 2));
  assert_eq!(product.created_at, product.updated_at);

  // The stored row matches what insert returned
  let fetched = store.find_by_id(product.id).await.unwrap().unwrap();
  assert_eq!(fetched.id, product.id);
  assert_eq!(fetched.stock, 10);
}

#[tokio::test]
async fn find_by_id_is_none_for_unknown_id() {
  setup_tracing();
  let store = InMemoryProductStore::default();

  let found = store.find_by_id(Uuid::new_v4()).await.unwrap();
  assert!(found.is_none());
}

#[tokio::test]
async fn find_all_returns_every_row() {
  setup_tracing();
  let store = InMemoryProductStore::default();

  store.insert(widget()).await.unwrap();
  store.insert(widget()).await.unwrap();

  let all = store.find_all().await.unwrap();
  assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn update_applies_only_provided_fields() {
  setup_tracing();
  let store = InMemoryProductStore::default();
  let created = store.insert(widget()).await.unwrap();

  let patch = ProductPatch {
    stock: Some(5),
    ..ProductPatch::default()
  };
  let updated = store.update(created.id, patch).await.unwrap().unwrap();

  assert_eq!(updated.stock, 5);
  assert_eq!(updated.name, created.name);
  assert_eq!(updated.description, created.description);
  assert_eq!(updated.price, created.price);
  assert_eq!(updated.created_at, created.created_at);
  assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
async fn empty_patch_still_refreshes_updated_at() {
  setup_tracing();
  let store = InMemoryProductStore::default();
  let created = store.insert(widget()).await.unwrap();

  let updated = store
    .update(created.id, ProductPatch::default())
    .await
    .unwrap()
    .unwrap();

  assert_eq!(updated.stock, created.stock);
  assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
async fn update_is_none_for_unknown_id() {
  setup_tracing();
  let store = InMemoryProductStore::default();

  let patch = ProductPatch {
    stock: Some(5),
    ..ProductPatch::default()
  };
  let updated = store.update(Uuid::new_v4(), patch).await.unwrap();
  assert!(updated.is_none());
}

#[tokio::test]
async fn delete_returns_prior_state_then_absence() {
  setup_tracing();
  let store = InMemoryProductStore::default();
  let created = store.insert(widget()).await.unwrap();

  let deleted = store.delete(created.id).await.unwrap().unwrap();
  assert_eq!(deleted.id, created.id);
  assert_eq!(deleted.name, created.name);

  assert!(store.find_by_id(created.id).await.unwrap().is_none());
  assert!(store.delete(created.id).await.unwrap().is_none());
}
