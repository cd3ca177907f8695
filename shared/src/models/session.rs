//! Session Model
//!
//! Account-local state: identity, subscription plan, payment methods
//! and notification preferences.

use serde::{Deserialize, Serialize};

use super::pool::PaymentMode;

/// The signed-in user's display identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub name: String,
    /// Avatar initials, e.g. "JD".
    pub avatar: String,
}

/// Subscription plan tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanTier {
    Free,
    Oro,
    Platino,
    Pro,
}

impl PlanTier {
    pub fn label(&self) -> &'static str {
        match self {
            PlanTier::Free => "Plan Gratis",
            PlanTier::Oro => "Partner ORO",
            PlanTier::Platino => "Partner PLATINO",
            PlanTier::Pro => "Soporte PRO",
        }
    }

    /// Monthly price in USD.
    pub fn monthly_price(&self) -> f64 {
        match self {
            PlanTier::Free => 0.0,
            PlanTier::Oro => 29.0,
            PlanTier::Platino => 99.0,
            PlanTier::Pro => 49.0,
        }
    }

    pub fn is_paid(&self) -> bool {
        !matches!(self, PlanTier::Free)
    }
}

/// A stored card. Exactly one method is the default at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: String,
    /// Card brand, e.g. "Visa".
    #[serde(rename = "type")]
    pub kind: String,
    pub last4: String,
    pub is_default: bool,
}

/// Add payment method payload. The store assigns the id and makes the
/// new method the default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethodSpec {
    #[serde(rename = "type")]
    pub kind: String,
    pub last4: String,
}

/// Notification channel switches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email: bool,
    pub sms: bool,
    pub push: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            sms: true,
            push: true,
        }
    }
}

/// Partial notification settings update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationsPatch {
    pub email: Option<bool>,
    pub sms: Option<bool>,
    pub push: Option<bool>,
}

impl NotificationSettings {
    /// Merge a partial update, leaving unset channels untouched.
    pub fn apply(&mut self, patch: NotificationsPatch) {
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(sms) = patch.sms {
            self.sms = sms;
        }
        if let Some(push) = patch.push {
            self.push = push;
        }
    }
}

/// A pool payment the user started but has not completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingPoolPayment {
    pub pool_id: i64,
    #[serde(rename = "options")]
    pub mode: PaymentMode,
}
