//! Storage adapters for the order workflow's collaborator ports.
//!
//! Only in-memory adapters live here for now (tests/dev). They implement
//! `CustomerLookup`, `ProductLookup` and `OrderStore` from `orderflow-orders`,
//! plus the catalog/registration helpers the HTTP layer needs.

pub mod in_memory;

pub use in_memory::{InMemoryCustomerStore, InMemoryOrderStore, InMemoryProductStore, InMemoryStores};
