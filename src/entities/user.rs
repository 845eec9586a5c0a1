//! User entity - The single active user of the dashboard.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the active user is allowed to see in the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access, including settings
    Admin,
    /// Shop staff; also eligible as repair technician
    Employee,
    /// A customer logged into the self-service view
    Customer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Admin => "admin",
            Self::Employee => "employee",
            Self::Customer => "customer",
        };
        f.write_str(label)
    }
}

/// User record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for the user
    pub id: String,
    /// Display name
    pub name: String,
    /// Login / contact email
    pub email: String,
    /// Access role
    pub role: Role,
    /// Avatar image URL, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
