//! Repair business logic - Handles repair ticket intake and updates.
//!
//! Tickets get `created_at` and `updated_at` on intake; every later save
//! bumps `updated_at`. A ticket saved as completed gets `completed_at`, and
//! keeps its first completion time across further saves. Saving it with any
//! other status clears `completed_at`. Status changes are not validated: a
//! cancelled ticket can be reopened.

use crate::{
    core::ids::next_id,
    entities::{Repair, RepairStatus, User},
    errors::{Error, Result, ensure_amount, ensure_present},
    store::{Action, AppState},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Repair form data before an id and timestamps are assigned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairDraft {
    /// Owning customer; required
    pub customer_id: String,
    /// Customer name shown on the ticket
    pub customer_name: String,
    /// Device being repaired; required
    pub device: String,
    /// Reported problem; required
    pub issue: String,
    /// Status to save the ticket with
    pub status: RepairStatus,
    /// Assigned technician
    pub technician_id: Option<String>,
    /// Assigned technician's name
    pub technician_name: Option<String>,
    /// Quoted cost
    pub estimated_cost: f64,
    /// Final cost, once known
    pub actual_cost: Option<f64>,
    /// Technician notes, oldest first
    pub notes: Vec<String>,
}

impl Default for RepairDraft {
    fn default() -> Self {
        Self {
            customer_id: String::new(),
            customer_name: String::new(),
            device: String::new(),
            issue: String::new(),
            status: RepairStatus::Pending,
            technician_id: None,
            technician_name: None,
            estimated_cost: 0.0,
            actual_cost: None,
            notes: Vec::new(),
        }
    }
}

impl From<&Repair> for RepairDraft {
    fn from(repair: &Repair) -> Self {
        Self {
            customer_id: repair.customer_id.clone(),
            customer_name: repair.customer_name.clone(),
            device: repair.device.clone(),
            issue: repair.issue.clone(),
            status: repair.status,
            technician_id: repair.technician_id.clone(),
            technician_name: repair.technician_name.clone(),
            estimated_cost: repair.estimated_cost,
            actual_cost: repair.actual_cost,
            notes: repair.notes.clone(),
        }
    }
}

impl RepairDraft {
    /// Picks the customer. The name falls back to empty for an unknown id.
    pub fn select_customer(&mut self, state: &AppState, customer_id: &str) {
        self.customer_id = customer_id.to_string();
        self.customer_name = state
            .customer(customer_id)
            .map(|c| c.name.clone())
            .unwrap_or_default();
    }

    /// Assigns the technician with `user_id`.
    ///
    /// # Errors
    /// Returns [`Error::UnknownUser`] if no user has this id.
    pub fn assign_technician(&mut self, users: &[User], user_id: &str) -> Result<()> {
        let technician = users
            .iter()
            .find(|u| u.id == user_id)
            .ok_or_else(|| Error::UnknownUser {
                id: user_id.to_string(),
            })?;
        self.technician_id = Some(technician.id.clone());
        self.technician_name = Some(technician.name.clone());
        Ok(())
    }

    /// Appends a note. Blank notes are skipped.
    pub fn add_note(&mut self, note: &str) {
        let note = note.trim();
        if !note.is_empty() {
            self.notes.push(note.to_string());
        }
    }

    /// Removes the note at `index`, if there is one.
    pub fn remove_note(&mut self, index: usize) {
        if index < self.notes.len() {
            self.notes.remove(index);
        }
    }

    /// Checks the fields the repair form requires.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The customer, device or issue is empty
    /// - A cost is negative or not finite
    pub fn validate(&self) -> Result<()> {
        ensure_present("Customer", &self.customer_id)?;
        ensure_present("Device", &self.device)?;
        ensure_present("Issue", &self.issue)?;
        ensure_amount(self.estimated_cost)?;
        if let Some(actual) = self.actual_cost {
            ensure_amount(actual)?;
        }
        Ok(())
    }

    fn into_repair(
        self,
        id: String,
        created_at: DateTime<Utc>,
        previous_completion: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Repair {
        let completed_at = (self.status == RepairStatus::Completed)
            .then(|| previous_completion.unwrap_or(now));
        Repair {
            id,
            customer_id: self.customer_id,
            customer_name: self.customer_name,
            device: self.device.trim().to_string(),
            issue: self.issue.trim().to_string(),
            status: self.status,
            technician_id: self.technician_id,
            technician_name: self.technician_name,
            estimated_cost: self.estimated_cost,
            actual_cost: self.actual_cost,
            created_at,
            updated_at: now,
            completed_at,
            notes: self.notes,
        }
    }
}

/// Builds the action that books a new repair ticket.
///
/// # Errors
/// Returns an error if the draft fails validation.
pub fn new_repair(state: &AppState, draft: RepairDraft) -> Result<Action> {
    draft.validate()?;
    let now = Utc::now();
    let repair = draft.into_repair(next_id(&state.repairs), now, None, now);
    info!(id = %repair.id, device = %repair.device, status = %repair.status, "New repair drafted");
    Ok(Action::AddRepair(repair))
}

/// Builds the action that saves repair `id` with the draft's fields.
///
/// # Errors
/// Returns an error if the draft fails validation or no repair has this id.
pub fn edit_repair(state: &AppState, id: &str, draft: RepairDraft) -> Result<Action> {
    draft.validate()?;
    let existing = state.repair(id).ok_or_else(|| Error::RepairNotFound {
        id: id.to_string(),
    })?;
    if existing.status != draft.status {
        debug!(id, from = %existing.status, to = %draft.status, "Repair status change");
    }
    let repair = draft.into_repair(
        existing.id.clone(),
        existing.created_at,
        existing.completed_at,
        Utc::now(),
    );
    Ok(Action::UpdateRepair(repair))
}

/// Builds the action that moves repair `id` to `status`, leaving other fields alone.
///
/// # Errors
/// Returns [`Error::RepairNotFound`] if no repair has this id.
pub fn set_status(state: &AppState, id: &str, status: RepairStatus) -> Result<Action> {
    let existing = state.repair(id).ok_or_else(|| Error::RepairNotFound {
        id: id.to_string(),
    })?;
    let mut draft = RepairDraft::from(existing);
    draft.status = status;
    edit_repair(state, id, draft)
}

/// Builds the action that appends a technician note to repair `id`.
///
/// # Errors
/// Returns an error if the note is blank or no repair has this id.
pub fn add_note(state: &AppState, id: &str, note: &str) -> Result<Action> {
    ensure_present("Note", note)?;
    let existing = state.repair(id).ok_or_else(|| Error::RepairNotFound {
        id: id.to_string(),
    })?;
    let mut draft = RepairDraft::from(existing);
    draft.add_note(note);
    edit_repair(state, id, draft)
}
