//! Raw catalog records
//!
//! The backend speaks a looser dialect than the domain models: some
//! fields carry Spanish names (`imagen_principal`, `nombre_comercial`,
//! `portada`), image paths may be relative to the media host, and
//! collection fields may be missing entirely. These DTOs absorb all of
//! that before anything reaches the store.

use serde::Deserialize;

use shared::models::{Business, LinkType, Rating, Service, ServiceExtra, SocialLinks};

/// Service record as the catalog endpoint returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawService {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub price: f64,
    /// Primary image path, possibly relative to the media host.
    #[serde(default, rename = "imagen_principal")]
    pub imagen_principal: Option<String>,
    /// Fallback image field some records carry instead.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub is_remate: bool,
    #[serde(default)]
    pub discount: Option<u32>,
    #[serde(default)]
    pub allows_pool: bool,
    #[serde(default)]
    pub spots_left: u32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub capacity_min: Option<u32>,
    #[serde(default)]
    pub capacity_max: Option<u32>,
    #[serde(default)]
    pub extras: Option<Vec<ServiceExtra>>,
    #[serde(default)]
    pub ratings: Vec<Rating>,
    #[serde(default)]
    pub link_types: Option<Vec<LinkType>>,
    #[serde(default)]
    pub business_id: Option<i64>,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub business_avatar: Option<String>,
    #[serde(default)]
    pub business_rating: Option<f64>,
    #[serde(default)]
    pub business_reviews: Option<u32>,
    #[serde(default)]
    pub gallery_images: Option<Vec<String>>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub related_services: Option<Vec<i64>>,
    #[serde(default)]
    pub social_links: Option<SocialLinks>,
}

impl RawService {
    /// Normalize into a domain service, resolving the primary image
    /// against the media host.
    pub fn into_service(self, media_base: &str) -> Service {
        let image = absolutize(
            self.imagen_principal
                .or(Some(self.image).filter(|i| !i.is_empty())),
            media_base,
        );
        Service {
            id: self.id,
            name: self.name,
            category: self.category,
            location: self.location,
            rating: self.rating,
            reviews: self.reviews,
            price: self.price,
            image,
            is_remate: self.is_remate,
            discount: self.discount,
            allows_pool: self.allows_pool,
            spots_left: self.spots_left,
            description: self.description,
            capacity_min: self.capacity_min,
            capacity_max: self.capacity_max,
            extras: self.extras,
            ratings: self.ratings,
            link_types: self.link_types,
            business_id: self.business_id,
            business_name: self.business_name,
            business_avatar: self.business_avatar,
            business_rating: self.business_rating,
            business_reviews: self.business_reviews,
            gallery_images: self.gallery_images,
            features: self.features,
            related_services: self.related_services,
            social_links: self.social_links,
        }
    }
}

/// Business record as the stores endpoint returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBusiness {
    pub id: i64,
    /// Trade name, the field the backend actually fills.
    #[serde(default, rename = "nombre_comercial")]
    pub nombre_comercial: Option<String>,
    /// Display name fallback.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub logo: Option<String>,
    /// Cover image path, possibly relative to the media host.
    #[serde(default)]
    pub portada: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub services: Vec<i64>,
    #[serde(default)]
    pub social_links: SocialLinks,
}

impl RawBusiness {
    /// Normalize into a domain business, resolving image paths against
    /// the media host.
    pub fn into_business(self, media_base: &str) -> Business {
        Business {
            id: self.id,
            name: self.nombre_comercial.or(self.name).unwrap_or_default(),
            category: self.category,
            logo: absolutize(self.logo, media_base),
            cover_image: absolutize(self.portada, media_base),
            rating: self.rating,
            reviews: self.reviews,
            description: self.description,
            location: self.location,
            services: self.services,
            social_links: self.social_links,
        }
    }
}

/// Prefix a relative path with the media host; pass absolute URLs
/// through and turn missing paths into an empty string.
fn absolutize(path: Option<String>, media_base: &str) -> String {
    match path {
        Some(p) if p.starts_with("http") => p,
        Some(p) if !p.is_empty() => format!("{media_base}{p}"),
        _ => String::new(),
    }
}
