//! # Domain Layer
//!
//! Shipment requests, carrier policies and the pure rules that price one
//! against the other. Nothing here performs I/O.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};
