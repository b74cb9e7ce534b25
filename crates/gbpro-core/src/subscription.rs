use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionTier {
    Free,
    Starter,
    Pro,
    Lifetime,
}

impl SubscriptionTier {
    /// Parse a stored tier name. Unknown values read as `Free`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "starter" => Self::Starter,
            "pro" => Self::Pro,
            "lifetime" => Self::Lifetime,
            _ => Self::Free,
        }
    }

    /// Tiers that unlock premium audits.
    #[must_use]
    pub fn unlocks_premium(self) -> bool {
        matches!(self, Self::Pro | Self::Lifetime)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionState {
    Active,
    Inactive,
    Cancelled,
    PastDue,
}

impl SubscriptionState {
    /// Parse a stored status. Unknown values read as `Inactive`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "active" => Self::Active,
            "cancelled" => Self::Cancelled,
            "past_due" => Self::PastDue,
            _ => Self::Inactive,
        }
    }
}

/// Billing state of one user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub tier: SubscriptionTier,
    pub state: SubscriptionState,
    pub end_date: Option<DateTime<Utc>>,
}

impl Subscription {
    /// A paid tier that unlocks premium audits and is currently active.
    ///
    /// `end_date` is informational; renewal and expiry are applied to `state`
    /// by the billing webhooks.
    #[must_use]
    pub fn is_active_paid_tier(&self) -> bool {
        self.tier.unlocks_premium() && self.state == SubscriptionState::Active
    }
}
