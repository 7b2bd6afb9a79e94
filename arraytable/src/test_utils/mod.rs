//! Helpers shared by the unit and integration tests.
//!
//! Available under `cfg(test)` and with the `test-utils` feature.

pub mod logging;
pub mod table;

pub use logging::init_test_tracing;
