//! Booking Model

use serde::{Deserialize, Serialize};

use super::service::Service;

/// Booking lifecycle status (Spanish wire values).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pendiente,
    Confirmado,
    Completado,
}

/// A confirmed or pending reservation, identified at the venue by its
/// QR token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    /// Snapshot of the service at booking time.
    pub service: Service,
    pub date: String,
    pub time: String,
    pub guests: u32,
    /// Names of the selected extras.
    pub extras: Vec<String>,
    pub total_price: f64,
    pub status: BookingStatus,
    /// Check-in token, `PGO-` followed by the booking id in base 36.
    pub qr_code: String,
    /// Set when the booking came out of a paid pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_id: Option<i64>,
}

/// Create booking payload. The store assigns id and QR token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSpec {
    pub service: Service,
    pub date: String,
    pub time: String,
    pub guests: u32,
    pub extras: Vec<String>,
    /// Base price plus selected extras, both times guest count.
    pub total_price: f64,
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_values() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Confirmado).unwrap(),
            "\"CONFIRMADO\""
        );
        let status: BookingStatus = serde_json::from_str("\"COMPLETADO\"").unwrap();
        assert_eq!(status, BookingStatus::Completado);
    }
}
