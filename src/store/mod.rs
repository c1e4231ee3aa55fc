//! Access layer for the league's hosted record store
//!
//! This module provides a clean abstraction over the hosted backend,
//! organized into logical components:
//! - `models`: Record types and table names
//! - `query`: Filters, ordering and limits
//! - `client`: The `RecordStore` trait and its REST implementation
//! - `memory`: An in-process store for tests
//! - `records`: Typed reads/writes that degrade instead of failing

pub mod client;
pub mod memory;
pub mod models;
pub mod query;
pub mod records;

// Re-export the main types for easy access
pub use client::{RecordStore, RestStore};
pub use memory::MemoryStore;
pub use models::*;
pub use query::Query;
