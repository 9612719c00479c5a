//! Test Module
//!
//! Crate-level test suites for assist-core.
//!
//! ## Test Categories
//! - `assist_tests`: Behavioural properties of the text operations
//! - `integration_tests`: Configuration, input reading and full analyzer runs
