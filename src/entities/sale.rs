//! Sale entity - An invoiced sale of one or more products to a customer.
//!
//! A sale's `total` is always the sum of its item totals, and each item's
//! `total` is its unit price times quantity. Both are computed when the
//! sale is drafted (see [`crate::core::sale`]) and stored as plain values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether an invoice has been settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Settled in full
    Paid,
    /// Awaiting payment
    Pending,
    /// Past its payment date
    Overdue,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Overdue => "overdue",
        };
        f.write_str(label)
    }
}

/// How the customer paid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Paid in cash at the counter
    Cash,
    /// Paid by debit or credit card
    Card,
    /// Paid by bank transfer
    Transfer,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Cash => "cash",
            Self::Card => "card",
            Self::Transfer => "transfer",
        };
        f.write_str(label)
    }
}

/// One line of a sale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    /// Id of the product sold; not checked against the product collection
    pub product_id: String,
    /// Product name at the time of sale
    pub product_name: String,
    /// Units sold
    pub quantity: u32,
    /// Unit price at the time of sale
    pub price: f64,
    /// `price * quantity`
    pub total: f64,
}

/// Sale record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// Unique identifier for the sale
    pub id: String,
    /// Id of the buying customer; not checked against the customer collection
    pub customer_id: String,
    /// Customer name at the time of sale
    pub customer_name: String,
    /// Lines of the sale, in entry order
    pub items: Vec<SaleItem>,
    /// Sum of item totals
    pub total: f64,
    /// Whether the invoice is settled
    pub payment_status: PaymentStatus,
    /// How the customer paid
    pub payment_method: PaymentMethod,
    /// When the sale was recorded
    pub date: DateTime<Utc>,
    /// Sequence-based invoice number, e.g. `INV-2024-001`
    pub invoice_number: String,
}
