//! Integration tests for the pruner crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between the catalog, waste, and optimizer crates.
