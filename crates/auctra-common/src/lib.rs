//! Auctra Common
//!
//! Shared error types and utilities for the Auctra recommendation platform.
//! Every Auctra crate builds on the error taxonomy defined here so that
//! faults cross crate boundaries with a single, uniform type.
//!
//! Version: 0.2.0-alpha
//! License: Apache 2.0 / MIT

pub mod error;

pub use error::{AuctraError, Result};
