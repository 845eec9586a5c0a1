//! Supplier business logic - Validates supplier form input into store actions.

use crate::{
    core::ids::next_id,
    entities::Supplier,
    errors::{Error, Result, ensure_present},
    store::{Action, AppState},
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Supplier form data before an id is assigned.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierDraft {
    /// Company name; required
    pub name: String,
    /// Contact person
    pub contact: String,
    /// Contact email
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Postal address
    pub address: String,
    /// Supplied product names
    pub products: Vec<String>,
}

impl SupplierDraft {
    /// Adds a supplied product name. Blank and repeated names are skipped.
    pub fn add_product(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() || self.products.iter().any(|p| p == name) {
            return;
        }
        self.products.push(name.to_string());
    }

    /// Removes the product name at `index`, if there is one.
    pub fn remove_product(&mut self, index: usize) {
        if index < self.products.len() {
            self.products.remove(index);
        }
    }

    /// # Errors
    /// Returns an error if the company name is empty or whitespace-only.
    pub fn validate(&self) -> Result<()> {
        ensure_present("Supplier name", &self.name)
    }

    fn into_supplier(self, id: String) -> Supplier {
        Supplier {
            id,
            name: self.name.trim().to_string(),
            contact: self.contact,
            email: self.email,
            phone: self.phone,
            address: self.address,
            products: self.products,
        }
    }
}

/// Builds the action that adds a new supplier.
///
/// # Errors
/// Returns an error if the draft fails validation.
pub fn new_supplier(state: &AppState, draft: SupplierDraft) -> Result<Action> {
    draft.validate()?;
    let supplier = draft.into_supplier(next_id(&state.suppliers));
    info!(id = %supplier.id, name = %supplier.name, "New supplier drafted");
    Ok(Action::AddSupplier(supplier))
}

/// Builds the action that replaces supplier `id` with the draft's fields.
///
/// # Errors
/// Returns an error if the draft fails validation or no supplier has this id.
pub fn edit_supplier(state: &AppState, id: &str, draft: SupplierDraft) -> Result<Action> {
    draft.validate()?;
    let existing = state.supplier(id).ok_or_else(|| Error::SupplierNotFound {
        id: id.to_string(),
    })?;
    Ok(Action::UpdateSupplier(draft.into_supplier(existing.id.clone())))
}
