// src/models/mod.rs

//! Contains data structures representing database entities.

pub mod product;

// Re-export the model structs for convenient access
pub use product::{NewProduct, Product, ProductPatch};
