//! Shared types for the Palenque Go client core
//!
//! Domain models and utility helpers used across the workspace:
//! marketplace catalog entities, group-purchase pools, bookings,
//! favorites, referral recommendations and session types.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
