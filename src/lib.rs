/// Simulacoes API — Shared Library
///
/// This crate contains the shared business logic, models,
/// and utilities used across all API handlers: the numeric
/// normalizer for locale-formatted upstream values, the
/// simulation aggregation engine, and the tenant-scoped
/// upstream client.
///
/// Each serverless function in `api/` imports from this library
/// to keep handlers thin and logic reusable.

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub mod data;
pub mod models;
pub mod numeric;
pub mod summary;
pub mod upstream;
