//! Per-page search filters.
//!
//! Text matching is a case-insensitive substring test; an empty term matches
//! everything. Results borrow from the snapshot and keep collection order
//! unless a sort is requested.

use crate::entities::{Customer, Product, Repair, RepairStatus, Sale, Supplier};
use std::cmp::Ordering;

fn matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Products whose name, category or SKU contains `term`.
#[must_use]
pub fn products<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let term = term.to_lowercase();
    products
        .iter()
        .filter(|p| matches(&p.name, &term) || matches(&p.category, &term) || matches(&p.sku, &term))
        .collect()
}

/// Sales whose customer name or invoice number contains `term`.
#[must_use]
pub fn sales<'a>(sales: &'a [Sale], term: &str) -> Vec<&'a Sale> {
    let term = term.to_lowercase();
    sales
        .iter()
        .filter(|s| matches(&s.customer_name, &term) || matches(&s.invoice_number, &term))
        .collect()
}

/// Repairs matching `term` on customer, device or issue, optionally limited to one status.
#[must_use]
pub fn repairs<'a>(
    repairs: &'a [Repair],
    term: &str,
    status: Option<RepairStatus>,
) -> Vec<&'a Repair> {
    let term = term.to_lowercase();
    repairs
        .iter()
        .filter(|r| status.is_none_or(|s| r.status == s))
        .filter(|r| {
            matches(&r.customer_name, &term) || matches(&r.device, &term) || matches(&r.issue, &term)
        })
        .collect()
}

/// Suppliers whose name, contact or email contains `term`.
#[must_use]
pub fn suppliers<'a>(suppliers: &'a [Supplier], term: &str) -> Vec<&'a Supplier> {
    let term = term.to_lowercase();
    suppliers
        .iter()
        .filter(|s| matches(&s.name, &term) || matches(&s.contact, &term) || matches(&s.email, &term))
        .collect()
}

/// Which customers to list by activity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CustomerFilter {
    /// Every customer
    #[default]
    All,
    /// Customers who have spent anything
    Active,
    /// Customers with no spend
    Inactive,
}

/// Field to order customers by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CustomerSortKey {
    /// Alphabetical by name
    #[default]
    Name,
    /// By cumulative spend
    TotalSpent,
    /// By registration date
    CreatedAt,
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest first
    #[default]
    Asc,
    /// Largest first
    Desc,
}

/// Customer list query: search term, activity filter and ordering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomerQuery {
    /// Text matched against name, email and phone
    pub term: String,
    /// Activity filter
    pub filter: CustomerFilter,
    /// Field to order by
    pub sort_by: CustomerSortKey,
    /// Sort direction
    pub order: SortOrder,
}

/// Customers matching `query` on name, email or phone, sorted as requested.
#[must_use]
pub fn customers<'a>(customers: &'a [Customer], query: &CustomerQuery) -> Vec<&'a Customer> {
    let term = query.term.to_lowercase();
    let mut found: Vec<&Customer> = customers
        .iter()
        .filter(|c| match query.filter {
            CustomerFilter::All => true,
            CustomerFilter::Active => c.is_active(),
            CustomerFilter::Inactive => !c.is_active(),
        })
        .filter(|c| matches(&c.name, &term) || matches(&c.email, &term) || c.phone.contains(&term))
        .collect();

    found.sort_by(|a, b| {
        let ordering: Ordering = match query.sort_by {
            CustomerSortKey::Name => a.name.cmp(&b.name),
            CustomerSortKey::TotalSpent => a.total_spent.total_cmp(&b.total_spent),
            CustomerSortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        match query.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    found
}
