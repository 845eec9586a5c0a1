//! State store - Holds the current snapshot and applies mutation actions.
//!
//! [`AppState`] is the whole in-memory state of the dashboard: the active
//! user and the five record collections. [`Action`] is the closed set of
//! mutation requests. [`reduce`] is the pure form (snapshot in, snapshot
//! out) and [`Store`] is the caller-owned container that applies actions in
//! place and counts revisions so callers know when to re-render.
//!
//! Applying an action never fails:
//! - an update whose id matches nothing leaves the snapshot unchanged
//! - an add whose id already exists is ignored, so ids stay unique
//! - deleting an unknown product id is a no-op
//! - a serialized action with an unrecognized `type` is a no-op

use crate::{
    entities::{Customer, Identified, Product, Repair, Sale, Supplier, User},
    errors::{Error, Result},
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, instrument, trace, warn};

/// The complete in-memory state at one point in time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// The active user, if anyone is signed in
    pub user: Option<User>,
    /// Inventory
    #[serde(default)]
    pub products: Vec<Product>,
    /// Registered customers
    #[serde(default)]
    pub customers: Vec<Customer>,
    /// Recorded sales, oldest first
    #[serde(default)]
    pub sales: Vec<Sale>,
    /// Repair tickets, oldest first
    #[serde(default)]
    pub repairs: Vec<Repair>,
    /// Parts suppliers
    #[serde(default)]
    pub suppliers: Vec<Supplier>,
}

impl AppState {
    /// Looks up a product by id.
    #[must_use]
    pub fn product(&self, id: &str) -> Option<&Product> {
        find(&self.products, id)
    }

    /// Looks up a customer by id.
    #[must_use]
    pub fn customer(&self, id: &str) -> Option<&Customer> {
        find(&self.customers, id)
    }

    /// Looks up a sale by id.
    #[must_use]
    pub fn sale(&self, id: &str) -> Option<&Sale> {
        find(&self.sales, id)
    }

    /// Looks up a repair by id.
    #[must_use]
    pub fn repair(&self, id: &str) -> Option<&Repair> {
        find(&self.repairs, id)
    }

    /// Looks up a supplier by id.
    #[must_use]
    pub fn supplier(&self, id: &str) -> Option<&Supplier> {
        find(&self.suppliers, id)
    }

    /// Sales made to one customer, in insertion order.
    pub fn sales_for_customer<'a>(&'a self, customer_id: &'a str) -> impl Iterator<Item = &'a Sale> {
        self.sales.iter().filter(move |s| s.customer_id == customer_id)
    }

    /// Repairs booked for one customer, in insertion order.
    pub fn repairs_for_customer<'a>(
        &'a self,
        customer_id: &'a str,
    ) -> impl Iterator<Item = &'a Repair> {
        self.repairs
            .iter()
            .filter(move |r| r.customer_id == customer_id)
    }

    /// True when every collection's ids are pairwise distinct.
    #[must_use]
    pub fn has_unique_ids(&self) -> bool {
        unique(&self.products)
            && unique(&self.customers)
            && unique(&self.sales)
            && unique(&self.repairs)
            && unique(&self.suppliers)
    }
}

/// A mutation request.
///
/// Serialized adjacently tagged, e.g. `{"type": "DELETE_PRODUCT", "payload": "3"}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Signs a user in, or out with `None`
    SetUser(Option<User>),
    /// Appends a product
    AddProduct(Product),
    /// Replaces the product with the same id
    UpdateProduct(Product),
    /// Removes the product with this id
    DeleteProduct(String),
    /// Appends a customer
    AddCustomer(Customer),
    /// Replaces the customer with the same id
    UpdateCustomer(Customer),
    /// Appends a sale
    AddSale(Sale),
    /// Appends a repair ticket
    AddRepair(Repair),
    /// Replaces the repair with the same id
    UpdateRepair(Repair),
    /// Appends a supplier
    AddSupplier(Supplier),
    /// Replaces the supplier with the same id
    UpdateSupplier(Supplier),
}

impl Action {
    /// Every recognized value of the serialized `type` tag.
    pub const KINDS: [&'static str; 11] = [
        "SET_USER",
        "ADD_PRODUCT",
        "UPDATE_PRODUCT",
        "DELETE_PRODUCT",
        "ADD_CUSTOMER",
        "UPDATE_CUSTOMER",
        "ADD_SALE",
        "ADD_REPAIR",
        "UPDATE_REPAIR",
        "ADD_SUPPLIER",
        "UPDATE_SUPPLIER",
    ];

    /// The serialized `type` tag of this action.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SetUser(_) => "SET_USER",
            Self::AddProduct(_) => "ADD_PRODUCT",
            Self::UpdateProduct(_) => "UPDATE_PRODUCT",
            Self::DeleteProduct(_) => "DELETE_PRODUCT",
            Self::AddCustomer(_) => "ADD_CUSTOMER",
            Self::UpdateCustomer(_) => "UPDATE_CUSTOMER",
            Self::AddSale(_) => "ADD_SALE",
            Self::AddRepair(_) => "ADD_REPAIR",
            Self::UpdateRepair(_) => "UPDATE_REPAIR",
            Self::AddSupplier(_) => "ADD_SUPPLIER",
            Self::UpdateSupplier(_) => "UPDATE_SUPPLIER",
        }
    }

    /// Parses a serialized action.
    ///
    /// Returns `Ok(None)` for a well-formed action whose `type` is not
    /// recognized, so callers can treat it as a no-op.
    ///
    /// # Errors
    /// Returns an error if the input is not JSON, has no `type` field, or
    /// carries a recognized `type` with a malformed payload.
    pub fn from_json(json: &str) -> Result<Option<Self>> {
        #[derive(Deserialize)]
        struct Tag {
            #[serde(rename = "type")]
            kind: String,
        }

        let tag: Tag = serde_json::from_str(json)?;
        if !Self::KINDS.contains(&tag.kind.as_str()) {
            return Ok(None);
        }
        serde_json::from_str(json).map(Some).map_err(Error::from)
    }
}

/// Applies `action` to `state` and returns the resulting snapshot.
///
/// The input snapshot is left untouched.
#[must_use]
pub fn reduce(state: &AppState, action: Action) -> AppState {
    let mut next = state.clone();
    apply(&mut next, action);
    next
}

/// Applies `action` in place. Returns whether anything changed.
fn apply(state: &mut AppState, action: Action) -> bool {
    match action {
        Action::SetUser(user) => {
            let changed = state.user != user;
            state.user = user;
            changed
        }
        Action::AddProduct(product) => append(&mut state.products, product, "product"),
        Action::UpdateProduct(product) => replace(&mut state.products, product, "product"),
        Action::DeleteProduct(id) => {
            let before = state.products.len();
            state.products.retain(|p| p.id != id);
            let removed = state.products.len() != before;
            if !removed {
                debug!(product_id = %id, "delete ignored: no product with this id");
            }
            removed
        }
        Action::AddCustomer(customer) => append(&mut state.customers, customer, "customer"),
        Action::UpdateCustomer(customer) => replace(&mut state.customers, customer, "customer"),
        Action::AddSale(sale) => append(&mut state.sales, sale, "sale"),
        Action::AddRepair(repair) => append(&mut state.repairs, repair, "repair"),
        Action::UpdateRepair(repair) => replace(&mut state.repairs, repair, "repair"),
        Action::AddSupplier(supplier) => append(&mut state.suppliers, supplier, "supplier"),
        Action::UpdateSupplier(supplier) => replace(&mut state.suppliers, supplier, "supplier"),
    }
}

fn find<'a, T: Identified>(records: &'a [T], id: &str) -> Option<&'a T> {
    records.iter().find(|r| r.id() == id)
}

/// True when no two records share an id.
pub(crate) fn unique<T: Identified>(records: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(records.len());
    records.iter().all(|r| seen.insert(r.id()))
}

fn append<T: Identified>(records: &mut Vec<T>, record: T, entity: &str) -> bool {
    if records.iter().any(|r| r.id() == record.id()) {
        warn!(entity, id = record.id(), "add ignored: id already present");
        return false;
    }
    records.push(record);
    true
}

fn replace<T: Identified + PartialEq>(records: &mut [T], record: T, entity: &str) -> bool {
    match records.iter_mut().find(|r| r.id() == record.id()) {
        Some(slot) => {
            let changed = *slot != record;
            *slot = record;
            changed
        }
        None => {
            debug!(entity, id = record.id(), "update ignored: no record with this id");
            false
        }
    }
}

/// Owns the current snapshot and applies actions to it.
#[derive(Debug, Default)]
pub struct Store {
    state: AppState,
    revision: u64,
}

impl Store {
    /// Creates a store holding `state` at revision 0.
    #[must_use]
    pub const fn new(state: AppState) -> Self {
        Self { state, revision: 0 }
    }

    /// The current snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &AppState {
        &self.state
    }

    /// Number of dispatches that changed the snapshot.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies `action` to the current snapshot and returns the result.
    #[instrument(skip(self, action), fields(action = action.kind()))]
    pub fn dispatch(&mut self, action: Action) -> &AppState {
        if apply(&mut self.state, action) {
            self.revision += 1;
            trace!(revision = self.revision, "snapshot updated");
        }
        &self.state
    }

    /// Parses and applies a serialized action.
    ///
    /// Actions with an unrecognized `type` leave the snapshot unchanged.
    ///
    /// # Errors
    /// Returns an error if the action cannot be parsed.
    pub fn dispatch_json(&mut self, json: &str) -> Result<&AppState> {
        match Action::from_json(json)? {
            Some(action) => Ok(self.dispatch(action)),
            None => {
                warn!("ignoring action with unrecognized type");
                Ok(&self.state)
            }
        }
    }

    /// Consumes the store, returning the final snapshot.
    #[must_use]
    pub fn into_state(self) -> AppState {
        self.state
    }
}
