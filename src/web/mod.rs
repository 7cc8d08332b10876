// src/web/mod.rs

// Declare child modules
pub mod handlers;
pub mod response;
pub mod routes;

// Re-export key items so main.rs and tests can wire the app directly.
pub use response::ApiResponse;
pub use routes::configure_app_routes;
