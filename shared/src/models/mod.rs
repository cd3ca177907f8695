//! Data models
//!
//! Shared between the client core and the mobile frontend (via the
//! persisted state blob and the catalog API). Wire names follow the
//! frontend's camelCase convention; status enums keep the Spanish
//! uppercase values the backend emits. All IDs are `i64`
//! (epoch-millisecond derived, within JavaScript's safe range).

pub mod booking;
pub mod business;
pub mod favorite;
pub mod pool;
pub mod recommendation;
pub mod route;
pub mod service;
pub mod session;

// Re-exports
pub use booking::*;
pub use business::*;
pub use favorite::*;
pub use pool::*;
pub use recommendation::*;
pub use route::*;
pub use service::*;
pub use session::*;
