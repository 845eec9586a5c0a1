//! Seed data loaded once at start-up.
//!
//! [`mock_seed`] holds the fixed literal records the dashboard ships with.
//! [`load_seed`] reads an alternative set from a TOML file with one array
//! of tables per collection (`[[users]]`, `[[products]]`, ...). Field names
//! are camelCase and timestamps are quoted RFC 3339 strings.

use crate::{
    entities::{
        Customer, PaymentMethod, PaymentStatus, Product, Repair, RepairStatus, Role, Sale,
        SaleItem, Supplier, User,
    },
    errors::{Error, Result},
    store::{AppState, unique},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Every record available at start-up, including users that are not active.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seed {
    /// Users who can be signed in
    #[serde(default)]
    pub users: Vec<User>,
    /// Initial inventory
    #[serde(default)]
    pub products: Vec<Product>,
    /// Initial customers
    #[serde(default)]
    pub customers: Vec<Customer>,
    /// Initial sales
    #[serde(default)]
    pub sales: Vec<Sale>,
    /// Initial repair tickets
    #[serde(default)]
    pub repairs: Vec<Repair>,
    /// Initial suppliers
    #[serde(default)]
    pub suppliers: Vec<Supplier>,
}

impl Seed {
    /// Picks the active user: the user with `id` if given, else the first user.
    ///
    /// # Errors
    /// Returns [`Error::UnknownUser`] if `id` names no seeded user.
    pub fn active_user(&self, id: Option<&str>) -> Result<Option<User>> {
        match id {
            Some(id) => self
                .users
                .iter()
                .find(|u| u.id == id)
                .cloned()
                .map(Some)
                .ok_or_else(|| Error::UnknownUser { id: id.to_string() }),
            None => Ok(self.users.first().cloned()),
        }
    }

    /// True when ids are pairwise distinct within every collection, users included.
    #[must_use]
    pub fn has_unique_ids(&self) -> bool {
        unique(&self.users)
            && unique(&self.products)
            && unique(&self.customers)
            && unique(&self.sales)
            && unique(&self.repairs)
            && unique(&self.suppliers)
    }

    /// Builds the initial snapshot with `user` active.
    #[must_use]
    pub fn into_state(self, user: Option<User>) -> AppState {
        AppState {
            user,
            products: self.products,
            customers: self.customers,
            sales: self.sales,
            repairs: self.repairs,
            suppliers: self.suppliers,
        }
    }
}

/// Loads seed records from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML is malformed or a record is missing a required field
/// - Any collection contains the same id twice
pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<Seed> {
    let path_ref = path.as_ref();
    debug!("Loading seed data from {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read seed file {}: {e}", path_ref.display()),
    })?;
    let seed = parse_seed(&contents)?;
    info!(
        products = seed.products.len(),
        customers = seed.customers.len(),
        sales = seed.sales.len(),
        repairs = seed.repairs.len(),
        suppliers = seed.suppliers.len(),
        "Seed data loaded"
    );
    Ok(seed)
}

/// Parses seed records from TOML text.
///
/// # Errors
/// Returns an error if the TOML is malformed or ids repeat within a collection.
pub fn parse_seed(contents: &str) -> Result<Seed> {
    let seed: Seed = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seed data: {e}"),
    })?;
    if !seed.has_unique_ids() {
        return Err(Error::Config {
            message: "Seed data contains duplicate ids".to_string(),
        });
    }
    Ok(seed)
}

/// Midnight UTC on the given day; the Unix epoch for an impossible date.
fn day(year: i32, month: u32, date: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, date)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

/// The built-in demo users.
#[must_use]
pub fn mock_users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            name: "John Admin".to_string(),
            email: "admin@managemate.com".to_string(),
            role: Role::Admin,
            avatar: Some(
                "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?w=150&h=150&fit=crop&crop=face"
                    .to_string(),
            ),
        },
        User {
            id: "2".to_string(),
            name: "Sarah Employee".to_string(),
            email: "sarah@managemate.com".to_string(),
            role: Role::Employee,
            avatar: None,
        },
    ]
}

fn mock_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "iPhone 14 Screen".to_string(),
            description: "Original replacement screen for iPhone 14".to_string(),
            category: "Phone Parts".to_string(),
            price: 299.99,
            cost: 180.00,
            stock: 15,
            min_stock: 5,
            sku: "IP14-SCR-001".to_string(),
            supplier: "TechParts Inc".to_string(),
            created_at: day(2024, 1, 15),
        },
        Product {
            id: "2".to_string(),
            name: "Samsung Galaxy S23 Battery".to_string(),
            description: "High-capacity replacement battery".to_string(),
            category: "Phone Parts".to_string(),
            price: 89.99,
            cost: 45.00,
            stock: 3,
            min_stock: 10,
            sku: "SGS23-BAT-001".to_string(),
            supplier: "Mobile Parts Co".to_string(),
            created_at: day(2024, 1, 20),
        },
        Product {
            id: "3".to_string(),
            name: "MacBook Pro Keyboard".to_string(),
            description: "Replacement keyboard for MacBook Pro 13\"".to_string(),
            category: "Laptop Parts".to_string(),
            price: 199.99,
            cost: 120.00,
            stock: 8,
            min_stock: 3,
            sku: "MBP13-KB-001".to_string(),
            supplier: "Apple Parts Direct".to_string(),
            created_at: day(2024, 2, 1),
        },
    ]
}

fn mock_customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "1".to_string(),
            name: "Alice Johnson".to_string(),
            email: "alice@email.com".to_string(),
            phone: "+1 555-0123".to_string(),
            address: "123 Main St, City, State 12345".to_string(),
            created_at: day(2024, 1, 10),
            total_spent: 1299.97,
            repair_history: Vec::new(),
        },
        Customer {
            id: "2".to_string(),
            name: "Bob Smith".to_string(),
            email: "bob@email.com".to_string(),
            phone: "+1 555-0456".to_string(),
            address: "456 Oak Ave, City, State 12345".to_string(),
            created_at: day(2024, 1, 15),
            total_spent: 450.50,
            repair_history: Vec::new(),
        },
    ]
}

fn mock_sales() -> Vec<Sale> {
    vec![
        Sale {
            id: "1".to_string(),
            customer_id: "1".to_string(),
            customer_name: "Alice Johnson".to_string(),
            items: vec![SaleItem {
                product_id: "1".to_string(),
                product_name: "iPhone 14 Screen".to_string(),
                quantity: 1,
                price: 299.99,
                total: 299.99,
            }],
            total: 299.99,
            payment_status: PaymentStatus::Paid,
            payment_method: PaymentMethod::Card,
            date: day(2024, 2, 15),
            invoice_number: "INV-2024-001".to_string(),
        },
        Sale {
            id: "2".to_string(),
            customer_id: "2".to_string(),
            customer_name: "Bob Smith".to_string(),
            items: vec![SaleItem {
                product_id: "2".to_string(),
                product_name: "Samsung Galaxy S23 Battery".to_string(),
                quantity: 1,
                price: 89.99,
                total: 89.99,
            }],
            total: 89.99,
            payment_status: PaymentStatus::Pending,
            payment_method: PaymentMethod::Cash,
            date: day(2024, 2, 16),
            invoice_number: "INV-2024-002".to_string(),
        },
    ]
}

fn mock_repairs() -> Vec<Repair> {
    vec![
        Repair {
            id: "1".to_string(),
            customer_id: "1".to_string(),
            customer_name: "Alice Johnson".to_string(),
            device: "iPhone 14 Pro".to_string(),
            issue: "Cracked screen replacement".to_string(),
            status: RepairStatus::Completed,
            technician_id: Some("2".to_string()),
            technician_name: Some("Sarah Employee".to_string()),
            estimated_cost: 299.99,
            actual_cost: Some(299.99),
            created_at: day(2024, 2, 10),
            updated_at: day(2024, 2, 15),
            completed_at: Some(day(2024, 2, 15)),
            notes: vec![
                "Customer dropped phone".to_string(),
                "Screen completely shattered".to_string(),
                "Replaced with OEM part".to_string(),
            ],
        },
        Repair {
            id: "2".to_string(),
            customer_id: "2".to_string(),
            customer_name: "Bob Smith".to_string(),
            device: "Samsung Galaxy S23".to_string(),
            issue: "Battery drains quickly".to_string(),
            status: RepairStatus::InProgress,
            technician_id: Some("2".to_string()),
            technician_name: Some("Sarah Employee".to_string()),
            estimated_cost: 89.99,
            actual_cost: None,
            created_at: day(2024, 2, 16),
            updated_at: day(2024, 2, 16),
            completed_at: None,
            notes: vec![
                "Battery test shows degradation".to_string(),
                "Ordered replacement battery".to_string(),
            ],
        },
    ]
}

fn mock_suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: "1".to_string(),
            name: "TechParts Inc".to_string(),
            contact: "Mike Johnson".to_string(),
            email: "mike@techparts.com".to_string(),
            phone: "+1 555-1000".to_string(),
            address: "789 Industrial Blvd, Tech City, TC 54321".to_string(),
            products: vec!["iPhone 14 Screen".to_string(), "iPhone 13 Screen".to_string()],
        },
        Supplier {
            id: "2".to_string(),
            name: "Mobile Parts Co".to_string(),
            contact: "Lisa Chen".to_string(),
            email: "lisa@mobileparts.com".to_string(),
            phone: "+1 555-2000".to_string(),
            address: "321 Supply Chain Dr, Parts Town, PT 98765".to_string(),
            products: vec![
                "Samsung Galaxy S23 Battery".to_string(),
                "Samsung Galaxy S22 Battery".to_string(),
            ],
        },
    ]
}

/// The built-in demo records.
#[must_use]
pub fn mock_seed() -> Seed {
    Seed {
        users: mock_users(),
        products: mock_products(),
        customers: mock_customers(),
        sales: mock_sales(),
        repairs: mock_repairs(),
        suppliers: mock_suppliers(),
    }
}

/// The built-in demo snapshot with the admin user active.
#[must_use]
pub fn mock_state() -> AppState {
    let seed = mock_seed();
    let admin = seed.users.first().cloned();
    seed.into_state(admin)
}
