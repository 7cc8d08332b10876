// src/state.rs

use crate::repository::ProductStore;
use std::sync::Arc;

/// Shared application state handed to every handler via `web::Data`.
///
/// Holds the persistence gateway behind the trait object so the HTTP layer
/// is wired identically against Postgres in `main` and the in-memory store
/// in tests. No per-request or cross-request mutable state lives here.
#[derive(Clone)]
pub struct AppState {
  pub products: Arc<dyn ProductStore>,
}
