//! The `utils` module provides shared utilities used across `pullsub`:
//! the broker error taxonomy and logging initialization.

pub mod error;
pub mod logging;
