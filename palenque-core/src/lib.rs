//! Palenque Go client core
//!
//! The application state store behind the Palenque Go tourism
//! marketplace frontend: marketplace catalog, group-purchase pools,
//! bookings with QR check-in tokens, favorites, referral
//! recommendations and the local session. State persists to a JSON
//! file between runs and catalog data is fetched from the backend
//! (or seeded locally in demo mode).

pub mod catalog;
pub mod config;
pub mod error;
pub mod persistence;
pub mod seed;
pub mod share;
pub mod store;

// Re-exports
pub use config::{DataSource, DuplicateJoins, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use store::{AppState, AppStore, FavoriteToggle, FetchOutcome, RatingSummary};
