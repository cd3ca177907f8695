//! Catalog API client
//!
//! Fetches marketplace services and business profiles from the
//! backend and normalizes the raw records into domain models.

mod client;
mod dto;

pub use client::{CatalogClient, CatalogError};
pub use dto::{RawBusiness, RawService};
