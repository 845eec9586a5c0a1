//! Product business logic - Validates inventory form input into store actions.
//!
//! The inventory page creates, edits and deletes products. Creation assigns
//! the next id and a creation timestamp; edits keep both. Deletion is the
//! only destructive action in the system and goes through a confirmation
//! callback first.

use crate::{
    core::ids::next_id,
    entities::Product,
    errors::{Error, Result, ensure_amount, ensure_present},
    store::{Action, AppState},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Product form data before an id and creation time are assigned.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    /// Product name; required
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Grouping category
    pub category: String,
    /// Sale price per unit
    pub price: f64,
    /// Purchase cost per unit
    pub cost: f64,
    /// Units on hand
    pub stock: u32,
    /// Low-stock threshold
    pub min_stock: u32,
    /// Stock keeping unit code
    pub sku: String,
    /// Supplier name
    pub supplier: String,
}

impl ProductDraft {
    /// Checks the fields the inventory form requires.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The name is empty or whitespace-only
    /// - The price or cost is negative or not finite (NaN, infinity)
    pub fn validate(&self) -> Result<()> {
        ensure_present("Product name", &self.name)?;
        ensure_amount(self.price)?;
        ensure_amount(self.cost)?;
        Ok(())
    }

    fn into_product(self, id: String, created_at: chrono::DateTime<Utc>) -> Product {
        Product {
            id,
            name: self.name.trim().to_string(),
            description: self.description,
            category: self.category,
            price: self.price,
            cost: self.cost,
            stock: self.stock,
            min_stock: self.min_stock,
            sku: self.sku,
            supplier: self.supplier,
            created_at,
        }
    }
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            price: product.price,
            cost: product.cost,
            stock: product.stock,
            min_stock: product.min_stock,
            sku: product.sku.clone(),
            supplier: product.supplier.clone(),
        }
    }
}

/// Builds the action that adds a new product with the next free id.
///
/// # Errors
/// Returns an error if the draft fails validation.
pub fn new_product(state: &AppState, draft: ProductDraft) -> Result<Action> {
    draft.validate()?;
    let product = draft.into_product(next_id(&state.products), Utc::now());
    info!(id = %product.id, name = %product.name, "New product drafted");
    Ok(Action::AddProduct(product))
}

/// Builds the action that replaces product `id` with the draft's fields,
/// keeping its id and creation time.
///
/// # Errors
/// Returns an error if the draft fails validation or no product has this id.
pub fn edit_product(state: &AppState, id: &str, draft: ProductDraft) -> Result<Action> {
    draft.validate()?;
    let existing = state.product(id).ok_or_else(|| Error::ProductNotFound {
        id: id.to_string(),
    })?;
    let product = draft.into_product(existing.id.clone(), existing.created_at);
    Ok(Action::UpdateProduct(product))
}

/// Builds the action that deletes product `id`, once `confirm` agrees.
///
/// `confirm` is shown the product about to be removed. Returns `Ok(None)`
/// when it declines.
///
/// # Errors
/// Returns [`Error::ProductNotFound`] if no product has this id.
pub fn delete_product<F>(state: &AppState, id: &str, confirm: F) -> Result<Option<Action>>
where
    F: FnOnce(&Product) -> bool,
{
    let product = state.product(id).ok_or_else(|| Error::ProductNotFound {
        id: id.to_string(),
    })?;
    if !confirm(product) {
        debug!(id, "Product deletion declined");
        return Ok(None);
    }
    info!(id, name = %product.name, "Product deletion confirmed");
    Ok(Some(Action::DeleteProduct(id.to_string())))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::seed::mock_state;
    use crate::store::reduce;
    use crate::test_utils::product_draft;

    #[test]
    fn test_product_draft_validation() {
        let mut draft = product_draft("Test Product");
        assert!(draft.validate().is_ok());

        draft.name = "   ".to_string();
        assert!(matches!(
            draft.validate().unwrap_err(),
            Error::Validation { message: _ }
        ));

        let mut draft = product_draft("Test Product");
        draft.price = -10.0;
        assert!(matches!(
            draft.validate().unwrap_err(),
            Error::InvalidAmount { amount: -10.0 }
        ));

        let mut draft = product_draft("Test Product");
        draft.cost = f64::NAN;
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_new_product_assigns_next_id() {
        let state = mock_state();
        let action = new_product(&state, product_draft("  Pixel 8 Screen ")).unwrap();
        let Action::AddProduct(product) = &action else {
            panic!("expected AddProduct, got {action:?}");
        };
        assert_eq!(product.id, "4");
        assert_eq!(product.name, "Pixel 8 Screen");

        let next = reduce(&state, action);
        assert_eq!(next.products.len(), 4);
    }

    #[test]
    fn test_edit_product_keeps_identity() {
        let state = mock_state();
        let original = state.product("1").unwrap();
        let mut draft = ProductDraft::from(original);
        draft.stock = 1;

        let action = edit_product(&state, "1", draft).unwrap();
        let next = reduce(&state, action);
        let edited = next.product("1").unwrap();
        assert_eq!(edited.stock, 1);
        assert_eq!(edited.created_at, original.created_at);
        assert!(edited.is_low_stock());
    }

    #[test]
    fn test_edit_missing_product() {
        let result = edit_product(&mock_state(), "99", product_draft("X"));
        assert!(matches!(result, Err(Error::ProductNotFound { id: _ })));
    }

    #[test]
    fn test_delete_product_confirmation() {
        let state = mock_state();

        let declined = delete_product(&state, "2", |_| false).unwrap();
        assert!(declined.is_none());

        let mut shown = String::new();
        let action = delete_product(&state, "2", |p| {
            shown = p.name.clone();
            true
        })
        .unwrap();
        assert_eq!(shown, "Samsung Galaxy S23 Battery");
        assert_eq!(action, Some(Action::DeleteProduct("2".to_string())));

        let missing = delete_product(&state, "99", |_| true);
        assert!(matches!(missing, Err(Error::ProductNotFound { id: _ })));
    }
}
