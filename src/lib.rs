//! Adder - table-tested integer addition
//!
//! Facade over the workspace crates. The arithmetic lives in `adder-core`;
//! this crate re-exports it and hosts the shared integration test suite.

pub use adder_core::add;
