//! Route Model

use serde::{Deserialize, Serialize};

/// An ordered stop along a tourist route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStop {
    pub latitude: f64,
    pub longitude: f64,
    pub order: u32,
}

/// Curated tourist route rendered on the map screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: i64,
    pub name: String,
    /// SVG path the frontend draws the route with.
    pub path_svg: String,
    pub color_hex: String,
    pub stops: Vec<RouteStop>,
}
