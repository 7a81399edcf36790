//! HTTP client for the external deduction-advice service.
//!
//! The service is optional: without an endpoint and credential in the
//! environment the client is never constructed and the advisor runs on
//! local heuristics alone.

mod client;

pub use client::{AdviceConfig, HttpAdviceClient};
