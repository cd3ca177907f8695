//! Pool Model
//!
//! Group purchases: a leader opens a pool for a service, members join
//! until the target count is reached, then the pool is paid either in
//! full by one person or member by member.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Deadline label shown once a pool stops accepting members.
pub const DEADLINE_CLOSED: &str = "Cerrado";

/// Pool lifecycle status (Spanish wire values).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PoolStatus {
    /// Open for new members.
    Abierto,
    /// Target member count reached, awaiting payment.
    Lleno,
    /// Paid, QR codes issued.
    Pagado,
    /// Service consumed, pool archived.
    Finalizado,
}

impl PoolStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PoolStatus::Abierto => "ABIERTO",
            PoolStatus::Lleno => "LLENO",
            PoolStatus::Pagado => "PAGADO",
            PoolStatus::Finalizado => "FINALIZADO",
        }
    }
}

/// Payment state shared by pool payment records and referral payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pendiente,
    Pagado,
}

/// How a pool gets paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMode {
    /// One member settles the whole pool.
    Full,
    /// Each member pays their own share.
    Personal,
}

/// Pool leader identity (display name and avatar initials).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolLeader {
    pub name: String,
    pub avatar: String,
}

impl From<super::session::CurrentUser> for PoolLeader {
    fn from(user: super::session::CurrentUser) -> Self {
        Self {
            name: user.name,
            avatar: user.avatar,
        }
    }
}

/// A pool participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolMember {
    pub name: String,
    pub avatar: String,
    pub paid: bool,
}

/// Per-member payment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolPayment {
    pub member_id: String,
    pub name: String,
    pub amount: f64,
    pub status: PaymentStatus,
    /// Epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<i64>,
}

/// Group purchase pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    pub id: i64,
    pub service_name: String,
    pub service_id: i64,
    pub location: String,
    pub image: String,
    pub leader: PoolLeader,
    pub current_members: u32,
    pub target_members: u32,
    pub total_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_member: Option<f64>,
    /// Human-readable time left, [`DEADLINE_CLOSED`] once full.
    pub deadline: String,
    pub status: PoolStatus,
    pub members: Vec<PoolMember>,
    #[serde(default)]
    pub payments: Vec<PoolPayment>,
    /// Member name to issued QR token, present once payment starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_codes: Option<HashMap<String, String>>,
    /// Epoch milliseconds.
    pub created_at: i64,
}

/// Create pool payload. The store assigns id, creation time and the
/// initial member list (the leader, already paid).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolSpec {
    pub leader: PoolLeader,
    pub service_id: i64,
    pub service_name: String,
    pub location: String,
    pub image: String,
    /// Must be at least 2 (leader plus one). Callers enforce the
    /// service's capacity ceiling.
    pub target_members: u32,
    /// Spot price times target member count.
    pub total_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_member: Option<f64>,
    /// Initial countdown label, e.g. "24h 00m".
    pub deadline: String,
}

impl Pool {
    pub fn is_full(&self) -> bool {
        self.current_members >= self.target_members
    }

    pub fn spots_left(&self) -> u32 {
        self.target_members.saturating_sub(self.current_members)
    }

    /// Share each member owes.
    pub fn price_per_person(&self) -> f64 {
        match self.price_per_member {
            Some(price) => price,
            None if self.target_members > 0 => self.total_price / self.target_members as f64,
            None => self.total_price,
        }
    }

    pub fn all_members_paid(&self) -> bool {
        self.members.iter().all(|m| m.paid)
    }
}
