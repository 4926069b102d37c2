//! HTTP transport layer — `HttpTransport` and the opt-in retry wrapper.

pub mod client;
pub mod retry;

pub use client::HttpTransport;
pub use retry::{RetryConfig, RetryPolicy, RetryingTransport};
