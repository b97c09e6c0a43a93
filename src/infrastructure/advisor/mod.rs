//! # Quote Advisor
//!
//! Adapters for the text-generation service used to comment on quotes.
//!
//! - [`traits::QuoteAdvisor`]: the port the application depends on
//! - [`gemini::GeminiAdvisor`]: Gemini `generateContent` REST adapter
//! - [`http_client::HttpClient`]: shared JSON-over-HTTP plumbing

pub mod error;
pub mod gemini;
pub mod http_client;
pub mod traits;

pub use error::{AdvisorError, AdvisorResult};
pub use gemini::GeminiAdvisor;
pub use traits::QuoteAdvisor;
