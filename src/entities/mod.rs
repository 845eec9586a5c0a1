//! Entity module - Contains the record types held by the store.
//! Every entity is a plain serde-serializable struct keyed by a string id;
//! the store owns all collections and hands out shared references only.

pub mod customer;
pub mod product;
pub mod repair;
pub mod sale;
pub mod supplier;
pub mod user;

pub use customer::{Customer, CustomerTier};
pub use product::Product;
pub use repair::{Repair, RepairStatus};
pub use sale::{PaymentMethod, PaymentStatus, Sale, SaleItem};
pub use supplier::Supplier;
pub use user::{Role, User};

/// Implemented by every stored record so the store can match on identifiers.
pub trait Identified {
    /// The record's identifier, unique within its collection.
    fn id(&self) -> &str;
}

macro_rules! impl_identified {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Identified for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )*
    };
}

impl_identified!(Customer, Product, Repair, Sale, Supplier, User);
