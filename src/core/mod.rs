//! Core business logic - framework-agnostic operations over the store.
//!
//! The per-entity modules ([`product`], [`customer`], [`sale`], [`repair`],
//! [`supplier`]) hold draft types that validate form input and turn it into
//! [`crate::store::Action`]s. [`metrics`] derives dashboard figures from a
//! snapshot, [`search`] implements the per-page filters, and [`report`]
//! formats figures for display.

pub mod customer;
pub mod ids;
pub mod metrics;
pub mod product;
pub mod repair;
pub mod report;
pub mod sale;
pub mod search;
pub mod supplier;
