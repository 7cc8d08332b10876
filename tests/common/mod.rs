// tests/common/mod.rs
#![allow(dead_code)] // Allow unused helpers in this common test module

use std::sync::Arc;
use std::sync::Once;

use product_service::repository::InMemoryProductStore;
use product_service::state::AppState;

static TRACING_INIT: Once = Once::new();

pub fn setup_tracing() {
  TRACING_INIT.call_once(|| {
    let _ = tracing_subscriber::fmt()
      .with_env_filter(
        tracing_subscriber::EnvFilter::try_from_default_env()
          .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
      )
      .with_test_writer()
      .try_init();
  });
}

/// App state wired to a fresh in-memory gateway, one per test.
pub fn test_state() -> AppState {
  AppState {
    products: Arc::new(InMemoryProductStore::default()),
  }
}

/// The valid create payload used across the HTTP tests.
pub fn widget_payload() -> serde_json::Value {
  serde_json::json!({
    "name": "Widget",
    "description": "A standard widget",
    "price": 9.99,
    "stock": 10
  })
}
