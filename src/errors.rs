//! Unified error types for `ManageMate`.
//!
//! The reducer never fails. Errors come from loading configuration and seed
//! files, parsing serialized actions, and validating drafts before they are
//! turned into actions.

use thiserror::Error;

/// Everything that can go wrong outside the reducer.
#[derive(Debug, Error)]
pub enum Error {
    /// A settings or seed file could not be read, parsed or accepted
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong with the file
        message: String,
    },

    /// A price or cost was negative, NaN or infinite
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected value
        amount: f64,
    },

    /// A sale item quantity was zero
    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity {
        /// The rejected value
        quantity: u32,
    },

    /// A required form field was missing
    #[error("Validation error: {message}")]
    Validation {
        /// Which field failed and why
        message: String,
    },

    /// No product has this id
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// The requested product id
        id: String,
    },

    /// No customer has this id
    #[error("Customer not found: {id}")]
    CustomerNotFound {
        /// The requested customer id
        id: String,
    },

    /// No repair has this id
    #[error("Repair not found: {id}")]
    RepairNotFound {
        /// The requested repair id
        id: String,
    },

    /// No supplier has this id
    #[error("Supplier not found: {id}")]
    SupplierNotFound {
        /// The requested supplier id
        id: String,
    },

    /// No seeded user has this id
    #[error("Unknown user: {id}")]
    UnknownUser {
        /// The requested user id
        id: String,
    },

    /// A serialized action could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A file operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

/// Rejects negative, NaN and infinite money values.
pub(crate) fn ensure_amount(amount: f64) -> Result<()> {
    if amount < 0.0 || !amount.is_finite() {
        return Err(Error::InvalidAmount { amount });
    }
    Ok(())
}

/// Rejects empty or whitespace-only required text fields.
pub(crate) fn ensure_present(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation {
            message: format!("{field} cannot be empty"),
        });
    }
    Ok(())
}
