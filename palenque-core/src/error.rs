//! Store error types

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::persistence::PersistenceError;

/// Store error type. Domain errors leave state untouched.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No pool with this id
    #[error("Pool not found: {0}")]
    PoolNotFound(i64),

    /// Pool already reached its target member count
    #[error("Pool {0} is full")]
    PoolFull(i64),

    /// Current user already joined this pool (rejecting policy only)
    #[error("Already a member of pool {0}")]
    AlreadyMember(i64),

    /// No service with this id
    #[error("Service not found: {0}")]
    ServiceNotFound(i64),

    /// No favorite recorded for this service
    #[error("No favorite for service {0}")]
    FavoriteNotFound(i64),

    /// No recommendation with this id
    #[error("Recommendation not found: {0}")]
    RecommendationNotFound(String),

    /// Star rating outside 1..=5
    #[error("Invalid rating: {0} stars (expected 1 to 5)")]
    InvalidStars(u8),

    /// Username/password rejected
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// State file could not be read or written
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Catalog fetch failed; previously held data is kept
    #[error("Catalog fetch failed: {0}")]
    Fetch(#[from] CatalogError),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
