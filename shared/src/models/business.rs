//! Business Model

use serde::{Deserialize, Serialize};

use super::service::SocialLinks;

/// Business profile behind one or more marketplace services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub logo: String,
    pub cover_image: String,
    pub rating: f64,
    pub reviews: u32,
    pub description: String,
    pub location: String,
    /// IDs of the services this business offers.
    #[serde(default)]
    pub services: Vec<i64>,
    #[serde(default)]
    pub social_links: SocialLinks,
}
