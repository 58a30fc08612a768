//! Infrastructure layer: storage adapters and configuration.

pub mod config;
pub mod store;

#[cfg(test)]
mod integration_tests;

pub use config::{AppConfig, ConfigError};
pub use store::{InMemoryCustomerStore, InMemoryOrderStore, InMemoryProductStore, InMemoryStores};
