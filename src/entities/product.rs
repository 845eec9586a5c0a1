//! Product entity - Represents a stocked part or accessory.
//!
//! Products carry both a sale price and a purchase cost, the current stock
//! count, and the minimum stock level below which the dashboard raises a
//! low-stock alert. The supplier is stored as a plain name, not a key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier for the product
    pub id: String,
    /// Name of the product (e.g., "iPhone 14 Screen")
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Category used for grouping and search (e.g., "Phone Parts")
    pub category: String,
    /// Sale price per unit in dollars
    pub price: f64,
    /// Purchase cost per unit in dollars
    pub cost: f64,
    /// Units currently in stock
    pub stock: u32,
    /// Stock level at or below which the product counts as low stock
    pub min_stock: u32,
    /// Stock keeping unit code
    pub sku: String,
    /// Supplier name
    pub supplier: String,
    /// When the product was created
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// True when stock has fallen to or below the configured minimum.
    #[must_use]
    pub const fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }

    /// Profit per unit sold.
    #[must_use]
    pub fn margin(&self) -> f64 {
        self.price - self.cost
    }

    /// Retail value of the units on hand.
    #[must_use]
    pub fn stock_value(&self) -> f64 {
        self.price * f64::from(self.stock)
    }
}
