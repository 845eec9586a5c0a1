//! Sale business logic - Builds invoiced sales from a product basket.
//!
//! A [`SaleDraft`] keeps its `total` equal to the sum of its item totals as
//! items are added and removed. [`new_sale`] stamps the id, date and
//! sequence-based invoice number when the sale is recorded.

use crate::{
    core::ids::next_id,
    entities::{PaymentMethod, PaymentStatus, Product, Sale, SaleItem},
    errors::{Error, Result},
    store::{Action, AppState},
};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Invoice prefix used when none is configured.
pub const DEFAULT_INVOICE_PREFIX: &str = "INV";

impl SaleItem {
    /// A line for `quantity` units of `product` at its current price.
    ///
    /// # Errors
    /// Returns [`Error::InvalidQuantity`] for a zero quantity.
    pub fn new(product: &Product, quantity: u32) -> Result<Self> {
        if quantity == 0 {
            return Err(Error::InvalidQuantity { quantity });
        }
        Ok(Self {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity,
            price: product.price,
            total: product.price * f64::from(quantity),
        })
    }
}

/// Formats an invoice number like `INV-2024-001`.
#[must_use]
pub fn invoice_number(prefix: &str, year: i32, sequence: usize) -> String {
    format!("{prefix}-{year}-{sequence:03}")
}

/// Sale form data before an id, date and invoice number are assigned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleDraft {
    /// Buying customer; required
    pub customer_id: String,
    /// Customer name printed on the invoice
    pub customer_name: String,
    /// Basket lines; at least one required
    pub items: Vec<SaleItem>,
    /// Running sum of item totals
    pub total: f64,
    /// Whether the invoice is settled
    pub payment_status: PaymentStatus,
    /// How the customer paid
    pub payment_method: PaymentMethod,
}

impl Default for SaleDraft {
    fn default() -> Self {
        Self {
            customer_id: String::new(),
            customer_name: String::new(),
            items: Vec::new(),
            total: 0.0,
            payment_status: PaymentStatus::Paid,
            payment_method: PaymentMethod::Cash,
        }
    }
}

impl SaleDraft {
    /// Picks the buying customer. The name falls back to empty when the id
    /// is not in the snapshot.
    pub fn select_customer(&mut self, state: &AppState, customer_id: &str) {
        self.customer_id = customer_id.to_string();
        self.customer_name = state
            .customer(customer_id)
            .map(|c| c.name.clone())
            .unwrap_or_default();
    }

    /// Adds `quantity` units of `product` and refreshes the total.
    ///
    /// # Errors
    /// Returns [`Error::InvalidQuantity`] for a zero quantity.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> Result<()> {
        let item = SaleItem::new(product, quantity)?;
        debug!(product = %item.product_name, quantity, total = item.total, "Item added to sale");
        self.items.push(item);
        self.recompute_total();
        Ok(())
    }

    /// Removes the item at `index`, if there is one, and refreshes the total.
    pub fn remove_item(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
            self.recompute_total();
        }
    }

    fn recompute_total(&mut self) {
        self.total = self.items.iter().map(|i| i.total).sum();
    }
}

/// Builds the action that records a sale, numbering its invoice after the
/// sales already in the snapshot.
///
/// # Errors
/// Returns an error if no customer is selected or the basket is empty.
pub fn new_sale(state: &AppState, draft: SaleDraft, invoice_prefix: &str) -> Result<Action> {
    if draft.customer_id.trim().is_empty() {
        return Err(Error::Validation {
            message: "Sale needs a customer".to_string(),
        });
    }
    if draft.items.is_empty() {
        return Err(Error::Validation {
            message: "Sale needs at least one item".to_string(),
        });
    }

    let now = Utc::now();
    let sale = Sale {
        id: next_id(&state.sales),
        customer_id: draft.customer_id,
        customer_name: draft.customer_name,
        total: draft.items.iter().map(|i| i.total).sum(),
        items: draft.items,
        payment_status: draft.payment_status,
        payment_method: draft.payment_method,
        date: now,
        invoice_number: invoice_number(invoice_prefix, now.year(), state.sales.len() + 1),
    };
    info!(invoice = %sale.invoice_number, total = sale.total, "New sale drafted");
    Ok(Action::AddSale(sale))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::metrics::total_revenue;
    use crate::seed::mock_state;
    use crate::store::reduce;
    use crate::test_utils::*;

    #[test]
    fn test_item_total_is_price_times_quantity() {
        let mut product = product_with_stock("p", 10, 1);
        product.price = 10.0;

        let mut draft = SaleDraft::default();
        draft.add_item(&product, 2).unwrap();
        assert_eq!(draft.items[0].total, 20.0);
        assert_eq!(draft.total, 20.0);
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let product = product_with_stock("p", 10, 1);
        assert!(matches!(
            SaleItem::new(&product, 0),
            Err(Error::InvalidQuantity { quantity: 0 })
        ));
    }

    #[test]
    fn test_remove_item_refreshes_total() {
        let state = mock_state();
        let mut draft = SaleDraft::default();
        draft.add_item(state.product("1").unwrap(), 1).unwrap();
        draft.add_item(state.product("3").unwrap(), 2).unwrap();
        assert_close(draft.total, 299.99 + 2.0 * 199.99);

        draft.remove_item(0);
        assert_close(draft.total, 399.98);
        draft.remove_item(7);
        assert_eq!(draft.items.len(), 1);
    }

    #[test]
    fn test_select_customer_fills_name() {
        let state = mock_state();
        let mut draft = SaleDraft::default();
        draft.select_customer(&state, "2");
        assert_eq!(draft.customer_name, "Bob Smith");
        draft.select_customer(&state, "missing");
        assert_eq!(draft.customer_id, "missing");
        assert_eq!(draft.customer_name, "");
    }

    #[test]
    fn test_invoice_number_format() {
        assert_eq!(invoice_number("INV", 2024, 3), "INV-2024-003");
        assert_eq!(invoice_number("RCPT", 2025, 1234), "RCPT-2025-1234");
    }

    #[test]
    fn test_new_sale_stamps_invoice_and_total() {
        let state = mock_state();
        let mut draft = SaleDraft::default();
        draft.select_customer(&state, "1");
        draft.add_item(state.product("2").unwrap(), 2).unwrap();
        // A stale total on the draft is not trusted
        draft.total = 0.0;

        let action = new_sale(&state, draft, DEFAULT_INVOICE_PREFIX).unwrap();
        let Action::AddSale(sale) = &action else {
            panic!("expected AddSale, got {action:?}");
        };
        assert_eq!(sale.id, "3");
        assert_close(sale.total, 179.98);
        let year = Utc::now().year();
        assert_eq!(sale.invoice_number, format!("INV-{year}-003"));

        let next = reduce(&state, action);
        assert_close(total_revenue(&next.sales), 389.98 + 179.98);
    }

    #[test]
    fn test_new_sale_requires_customer_and_items() {
        let state = mock_state();
        let mut draft = SaleDraft::default();
        draft.add_item(state.product("1").unwrap(), 1).unwrap();
        assert!(matches!(
            new_sale(&state, draft, "INV"),
            Err(Error::Validation { message: _ })
        ));

        let mut draft = SaleDraft::default();
        draft.select_customer(&state, "1");
        assert!(matches!(
            new_sale(&state, draft, "INV"),
            Err(Error::Validation { message: _ })
        ));
    }
}
