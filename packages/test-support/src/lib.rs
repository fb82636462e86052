//! Test support utilities shared across the workspace.
//!
//! This crate provides unified logging initialization for unit and
//! integration tests.

pub mod logging;
