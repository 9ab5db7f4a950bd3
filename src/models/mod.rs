//! Domain models for the simulation summary API.
//!
//! These types are shared across all modules: upstream client,
//! aggregation engine, data generator, and API handlers.

pub mod simulation;
pub mod summary;
