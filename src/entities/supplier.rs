//! Supplier entity - A parts vendor and the product names it supplies.

use serde::{Deserialize, Serialize};

/// Supplier record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    /// Unique identifier for the supplier
    pub id: String,
    /// Company name
    pub name: String,
    /// Contact person
    pub contact: String,
    /// Contact email
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Postal address
    pub address: String,
    /// Names of supplied products; not linked to product ids
    #[serde(default)]
    pub products: Vec<String>,
}
