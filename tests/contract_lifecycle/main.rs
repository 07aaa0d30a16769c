//! Contract Lifecycle Test Suite
//!
//! End-to-end tests of the record contract through the public facade, with
//! every operation running inside a host transaction on `MemoryWorldState`.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test contract_lifecycle
//! ```


mod concurrency;
mod invocation;
mod lifecycle;
mod properties;
