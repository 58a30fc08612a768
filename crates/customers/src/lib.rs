//! Customers domain module.
//!
//! Customers are looked up by the order workflow and never mutated by it. This
//! crate holds the record and its construction rules (no IO, no storage).

pub mod customer;

pub use customer::{Customer, CustomerId, NewCustomer};
