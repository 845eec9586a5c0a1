//! Shared test utilities for `ManageMate`.
//!
//! This module provides record builders with sensible defaults so tests only
//! spell out the fields they care about.

#![allow(clippy::unwrap_used)]

use crate::{
    core::product::ProductDraft,
    entities::{Customer, Product, Repair, RepairStatus, Supplier},
};
use chrono::{TimeZone, Utc};

/// Fixed timestamp for test records: 2024-03-01 00:00 UTC.
pub fn test_time() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
}

/// Asserts two money values agree to within floating-point noise.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

/// Creates a test product with the given stock levels.
///
/// # Defaults
/// * price: 10.0, cost: 5.0
/// * category: "Phone Parts"
pub fn product_with_stock(id: &str, stock: u32, min_stock: u32) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Test Product {id}"),
        description: "Test description".to_string(),
        category: "Phone Parts".to_string(),
        price: 10.0,
        cost: 5.0,
        stock,
        min_stock,
        sku: format!("TEST-{id}"),
        supplier: "TechParts Inc".to_string(),
        created_at: test_time(),
    }
}

/// A valid product draft with the given name.
pub fn product_draft(name: &str) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        description: "Test description".to_string(),
        category: "Phone Parts".to_string(),
        price: 49.99,
        cost: 20.0,
        stock: 10,
        min_stock: 2,
        sku: "TEST-SKU".to_string(),
        supplier: "TechParts Inc".to_string(),
    }
}

/// Creates a test customer with the given cumulative spend.
pub fn customer_with_spend(id: &str, total_spent: f64) -> Customer {
    Customer {
        id: id.to_string(),
        name: format!("Customer {id}"),
        email: format!("customer{id}@email.com"),
        phone: "+1 555-9999".to_string(),
        address: "1 Test St".to_string(),
        created_at: test_time(),
        total_spent,
        repair_history: Vec::new(),
    }
}

/// Creates a test repair in the given status.
///
/// # Defaults
/// * customer: "1" (Alice Johnson)
/// * estimated cost: 50.0, no actual cost, no technician
pub fn repair_with_status(id: &str, status: RepairStatus) -> Repair {
    Repair {
        id: id.to_string(),
        customer_id: "1".to_string(),
        customer_name: "Alice Johnson".to_string(),
        device: "Test Device".to_string(),
        issue: "Test issue".to_string(),
        status,
        technician_id: None,
        technician_name: None,
        estimated_cost: 50.0,
        actual_cost: None,
        created_at: test_time(),
        updated_at: test_time(),
        completed_at: (status == RepairStatus::Completed).then(test_time),
        notes: Vec::new(),
    }
}

/// Creates a test supplier with no listed products.
pub fn supplier_named(id: &str, name: &str) -> Supplier {
    Supplier {
        id: id.to_string(),
        name: name.to_string(),
        contact: "Test Contact".to_string(),
        email: "contact@supplier.test".to_string(),
        phone: "+1 555-0000".to_string(),
        address: "1 Supply Rd".to_string(),
        products: Vec::new(),
    }
}
