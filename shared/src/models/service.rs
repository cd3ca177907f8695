//! Service Model

use serde::{Deserialize, Serialize};

use super::recommendation::LinkType;

/// A single star rating left by a user on a service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub user_id: String,
    pub user_name: String,
    pub stars: u8,
    /// Epoch milliseconds.
    pub date: i64,
}

/// Named extra a service offers on top of its base price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceExtra {
    pub name: String,
    pub price: f64,
}

/// Social/contact links a business or service exposes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Marketplace service (hotel, tour, restaurant, transport...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub location: String,
    /// Aggregate rating, kept at one decimal place.
    pub rating: f64,
    pub reviews: u32,
    pub price: f64,
    pub image: String,
    /// Flash-sale flag ("remate").
    #[serde(default)]
    pub is_remate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u32>,
    pub allows_pool: bool,
    pub spots_left: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_max: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extras: Option<Vec<ServiceExtra>>,
    /// Individual ratings backing the aggregate.
    #[serde(default)]
    pub ratings: Vec<Rating>,
    /// Referral link types this service may be promoted with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_types: Option<Vec<LinkType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_reviews: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery_images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_services: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
}

impl Service {
    /// Price after the remate discount, if any.
    pub fn discounted_price(&self) -> f64 {
        match self.discount {
            Some(pct) => self.price * (1.0 - pct as f64 / 100.0),
            None => self.price,
        }
    }

    /// Whether `link_type` is an allowed referral type for this service.
    /// Services without an explicit list accept none.
    pub fn allows_link_type(&self, link_type: LinkType) -> bool {
        self.link_types
            .as_ref()
            .is_some_and(|types| types.contains(&link_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Service {
        Service {
            id: 1,
            name: "Hotel Vista al Volcán".to_string(),
            category: "hotel".to_string(),
            location: "Santa Ana".to_string(),
            rating: 4.9,
            reviews: 127,
            price: 85.0,
            image: "/volcano-view-hotel.jpg".to_string(),
            is_remate: true,
            discount: Some(30),
            allows_pool: true,
            spots_left: 3,
            description: None,
            capacity_min: Some(1),
            capacity_max: Some(4),
            extras: None,
            ratings: Vec::new(),
            link_types: Some(vec![LinkType::Oferta, LinkType::Descuento]),
            business_id: None,
            business_name: None,
            business_avatar: None,
            business_rating: None,
            business_reviews: None,
            gallery_images: None,
            features: None,
            related_services: None,
            social_links: None,
        }
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("allowsPool").is_some());
        assert!(json.get("spotsLeft").is_some());
        assert!(json.get("isRemate").is_some());
        assert!(json.get("allows_pool").is_none());
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let service: Service = serde_json::from_value(serde_json::json!({
            "id": 9,
            "name": "Tour",
            "category": "tour",
            "location": "Suchitoto",
            "rating": 4.5,
            "reviews": 10,
            "price": 25.0,
            "image": "/tour.jpg",
            "allowsPool": false,
            "spotsLeft": 8
        }))
        .unwrap();
        assert!(!service.is_remate);
        assert!(service.ratings.is_empty());
        assert!(service.extras.is_none());
    }

    #[test]
    fn test_discounted_price() {
        let service = sample();
        assert!((service.discounted_price() - 59.5).abs() < 1e-9);
    }

    #[test]
    fn test_allows_link_type() {
        let service = sample();
        assert!(service.allows_link_type(LinkType::Oferta));
        assert!(!service.allows_link_type(LinkType::Feriado));
    }
}
