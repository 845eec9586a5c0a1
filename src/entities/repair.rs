//! Repair entity - A device repair ticket.
//!
//! Status is a flat enum. Any status may follow any other; the store does
//! not validate transitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a repair ticket stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepairStatus {
    /// Booked in, work not started
    Pending,
    /// A technician is working on it
    InProgress,
    /// Repaired and closed
    Completed,
    /// Closed without repair
    Cancelled,
}

impl RepairStatus {
    /// Every status, in dashboard display order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Completed and cancelled tickets are closed; everything else is active.
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl fmt::Display for RepairStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

/// Repair record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repair {
    /// Unique identifier for the repair
    pub id: String,
    /// Id of the owning customer; not checked against the customer collection
    pub customer_id: String,
    /// Customer name at the time of intake
    pub customer_name: String,
    /// Device being repaired (e.g., "iPhone 14 Pro")
    pub device: String,
    /// Reported problem
    pub issue: String,
    /// Current ticket status
    pub status: RepairStatus,
    /// Assigned technician's user id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technician_id: Option<String>,
    /// Assigned technician's display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technician_name: Option<String>,
    /// Quoted cost in dollars
    pub estimated_cost: f64,
    /// Final cost in dollars, once known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_cost: Option<f64>,
    /// When the ticket was booked
    pub created_at: DateTime<Utc>,
    /// When the ticket was last saved
    pub updated_at: DateTime<Utc>,
    /// Set when the ticket was saved as completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Technician notes, oldest first
    #[serde(default)]
    pub notes: Vec<String>,
}

impl Repair {
    /// Whether the ticket is still open.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// The cost to show the customer: actual cost when known, else the estimate.
    #[must_use]
    pub fn billed_cost(&self) -> f64 {
        self.actual_cost.unwrap_or(self.estimated_cost)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::repair_with_status;

    #[test]
    fn test_status_activity() {
        assert!(RepairStatus::Pending.is_active());
        assert!(RepairStatus::InProgress.is_active());
        assert!(!RepairStatus::Completed.is_active());
        assert!(!RepairStatus::Cancelled.is_active());
    }

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&RepairStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let parsed: RepairStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, RepairStatus::Cancelled);
        assert_eq!(RepairStatus::InProgress.to_string(), "in-progress");
    }

    #[test]
    fn test_billed_cost_falls_back_to_estimate() {
        let mut repair = repair_with_status("1", RepairStatus::InProgress);
        repair.estimated_cost = 89.99;
        assert_eq!(repair.billed_cost(), 89.99);

        repair.actual_cost = Some(75.0);
        assert_eq!(repair.billed_cost(), 75.0);
    }
}
