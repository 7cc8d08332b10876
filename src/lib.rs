// src/lib.rs

//! product_service: a thin CRUD HTTP service over a single Product resource.
//!
//! The crate is layered as a straight pass-through pipeline:
//!  - `web`: route wiring, the `{success, message, data?}` response envelope,
//!    and one handler per operation (list, get, create, update, delete).
//!  - `services`: pass-through functions kept as an indirection seam between
//!    the HTTP boundary and storage.
//!  - `repository`: the `ProductStore` gateway trait with a Postgres (sqlx)
//!    implementation and an in-memory implementation used by tests.
//!
//! An unrelated summation exercise lives in [`sum_to_n`].

// Declare modules according to the planned structure
pub mod config;
pub mod errors;
pub mod models;
pub mod repository;
pub mod services;
pub mod state;
pub mod sum_to_n;
pub mod web;

// --- Re-exports for the Public API ---

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, StoreError};
pub use crate::models::{NewProduct, Product, ProductPatch};
pub use crate::repository::{InMemoryProductStore, PgProductStore, ProductStore};
pub use crate::state::AppState;
