//! Favorite Model

use serde::{Deserialize, Serialize};

/// How much the user likes a favorited service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceLevel {
    MeGusta,
    MeGustaMas,
}

/// A favorited service with trip-planning metadata. At most one
/// favorite carries `selected_for_trip` at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFavorite {
    pub service_id: i64,
    pub preference: PreferenceLevel,
    pub selected_for_trip: bool,
    /// Epoch milliseconds.
    pub added_at: i64,
}
