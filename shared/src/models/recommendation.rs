//! Recommendation Model
//!
//! Referral links a user creates for services and earns commission on.

use serde::{Deserialize, Serialize};

use super::pool::PaymentStatus;

/// Kind of referral link (Spanish wire values).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
    Oferta,
    Descuento,
    Feriado,
}

impl LinkType {
    /// Display label used when naming a link after its service.
    pub fn label(&self) -> &'static str {
        match self {
            LinkType::Oferta => "Oferta",
            LinkType::Descuento => "Descuento",
            LinkType::Feriado => "Feriado",
        }
    }
}

/// Referral performance counters and payout state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationStats {
    pub clicks: u32,
    pub purchases: u32,
    pub total_earned: f64,
    pub payment_status: PaymentStatus,
    /// Epoch milliseconds of the last payout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_payment_date: Option<i64>,
}

impl Default for RecommendationStats {
    fn default() -> Self {
        Self {
            clicks: 0,
            purchases: 0,
            total_earned: 0.0,
            payment_status: PaymentStatus::Pendiente,
            last_payment_date: None,
        }
    }
}

impl RecommendationStats {
    /// Merge a partial update, leaving unset fields untouched.
    pub fn apply(&mut self, patch: StatsPatch) {
        if let Some(clicks) = patch.clicks {
            self.clicks = clicks;
        }
        if let Some(purchases) = patch.purchases {
            self.purchases = purchases;
        }
        if let Some(total_earned) = patch.total_earned {
            self.total_earned = total_earned;
        }
        if let Some(payment_status) = patch.payment_status {
            self.payment_status = payment_status;
        }
        if let Some(last_payment_date) = patch.last_payment_date {
            self.last_payment_date = Some(last_payment_date);
        }
    }
}

/// A referral link created by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub name: String,
    /// Full shareable URL.
    pub link: String,
    #[serde(rename = "type")]
    pub link_type: LinkType,
    pub service_id: i64,
    /// Epoch milliseconds.
    pub created_at: i64,
    pub stats: RecommendationStats,
}

/// Create recommendation payload. The store assigns id, link and
/// zeroed stats; a missing name defaults to the service name plus the
/// link type label.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub link_type: LinkType,
    pub service_id: i64,
}

/// Partial stats update payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsPatch {
    pub clicks: Option<u32>,
    pub purchases: Option<u32>,
    pub total_earned: Option<f64>,
    pub payment_status: Option<PaymentStatus>,
    pub last_payment_date: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_type_wire_values() {
        assert_eq!(
            serde_json::to_string(&LinkType::Oferta).unwrap(),
            "\"oferta\""
        );
        assert_eq!(
            serde_json::to_string(&LinkType::Feriado).unwrap(),
            "\"feriado\""
        );
        assert_eq!(LinkType::Descuento.label(), "Descuento");
    }

    #[test]
    fn test_recommendation_serializes_type_field() {
        let rec = Recommendation {
            id: "rec-1".to_string(),
            name: "Hotel - Oferta".to_string(),
            link: "https://palenquego.app/r/link-1-1".to_string(),
            link_type: LinkType::Oferta,
            service_id: 1,
            created_at: 1_700_000_000_000,
            stats: RecommendationStats::default(),
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["type"], "oferta");
        assert_eq!(json["stats"]["paymentStatus"], "PENDIENTE");
    }

    #[test]
    fn test_stats_patch_merges_only_set_fields() {
        let mut stats = RecommendationStats {
            clicks: 5,
            purchases: 1,
            total_earned: 15.0,
            payment_status: PaymentStatus::Pendiente,
            last_payment_date: None,
        };
        stats.apply(StatsPatch {
            clicks: Some(6),
            ..StatsPatch::default()
        });
        assert_eq!(stats.clicks, 6);
        assert_eq!(stats.purchases, 1);
        assert!((stats.total_earned - 15.0).abs() < 1e-9);
        assert_eq!(stats.payment_status, PaymentStatus::Pendiente);
    }
}
