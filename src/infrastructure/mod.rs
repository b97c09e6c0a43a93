//! # Infrastructure Layer
//!
//! Adapters around the domain: the carrier registry and its file format,
//! and the text-generation service used for quote analysis.

pub mod advisor;
pub mod registry;
