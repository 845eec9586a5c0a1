//! Customer business logic - Validates customer form input into store actions.
//!
//! New customers start with no spend and no repair history. Edits change the
//! contact details only; spend and history carry over from the stored record.

use crate::{
    core::ids::next_id,
    entities::Customer,
    errors::{Error, Result, ensure_present},
    store::{Action, AppState},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Customer contact details as entered in the form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDraft {
    /// Full name; required
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Postal address
    pub address: String,
}

impl CustomerDraft {
    /// # Errors
    /// Returns an error if the name is empty or whitespace-only.
    pub fn validate(&self) -> Result<()> {
        ensure_present("Customer name", &self.name)
    }
}

/// Builds the action that registers a new customer.
///
/// # Errors
/// Returns an error if the draft fails validation.
pub fn new_customer(state: &AppState, draft: CustomerDraft) -> Result<Action> {
    draft.validate()?;
    let customer = Customer {
        id: next_id(&state.customers),
        name: draft.name.trim().to_string(),
        email: draft.email,
        phone: draft.phone,
        address: draft.address,
        created_at: Utc::now(),
        total_spent: 0.0,
        repair_history: Vec::new(),
    };
    info!(id = %customer.id, "New customer drafted");
    Ok(Action::AddCustomer(customer))
}

/// Builds the action that updates customer `id`'s contact details.
///
/// # Errors
/// Returns an error if the draft fails validation or no customer has this id.
pub fn edit_customer(state: &AppState, id: &str, draft: CustomerDraft) -> Result<Action> {
    draft.validate()?;
    let existing = state.customer(id).ok_or_else(|| Error::CustomerNotFound {
        id: id.to_string(),
    })?;
    Ok(Action::UpdateCustomer(Customer {
        name: draft.name.trim().to_string(),
        email: draft.email,
        phone: draft.phone,
        address: draft.address,
        ..existing.clone()
    }))
}
