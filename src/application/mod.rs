//! # Application Layer
//!
//! Use cases over the domain: evaluating a request against the registry
//! and, optionally, asking an advisor to comment on the result.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
