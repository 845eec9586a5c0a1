//! Customer entity - A shop customer and their cumulative spend.
//!
//! The customer's tier is never stored; it is derived from `total_spent`
//! every time it is read.

use super::Repair;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Spend needed to reach the VIP tier.
pub const VIP_THRESHOLD: f64 = 1000.0;
/// Spend needed to reach the Gold tier.
pub const GOLD_THRESHOLD: f64 = 500.0;
/// Spend needed to reach the Silver tier.
pub const SILVER_THRESHOLD: f64 = 100.0;

/// Customer classification by cumulative spend, lowest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CustomerTier {
    /// Under $100 spent
    Bronze,
    /// $100 or more
    Silver,
    /// $500 or more
    Gold,
    /// $1000 or more
    #[serde(rename = "VIP")]
    Vip,
}

impl CustomerTier {
    /// Looks up the tier for a cumulative spend. Thresholds are inclusive.
    #[must_use]
    pub fn from_spend(total_spent: f64) -> Self {
        if total_spent >= VIP_THRESHOLD {
            Self::Vip
        } else if total_spent >= GOLD_THRESHOLD {
            Self::Gold
        } else if total_spent >= SILVER_THRESHOLD {
            Self::Silver
        } else {
            Self::Bronze
        }
    }
}

impl fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Vip => "VIP",
        };
        f.write_str(label)
    }
}

/// Customer record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Unique identifier for the customer
    pub id: String,
    /// Full name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Postal address
    pub address: String,
    /// When the customer was registered
    pub created_at: DateTime<Utc>,
    /// Cumulative spend in dollars
    pub total_spent: f64,
    /// Repairs attached to this customer record
    #[serde(default)]
    pub repair_history: Vec<Repair>,
}

impl Customer {
    /// Tier derived from `total_spent`.
    #[must_use]
    pub fn tier(&self) -> CustomerTier {
        CustomerTier::from_spend(self.total_spent)
    }

    /// A customer counts as active once they have spent anything.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.total_spent > 0.0
    }
}
