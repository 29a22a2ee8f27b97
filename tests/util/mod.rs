//! Shared helpers for API integration tests.

pub mod client;

pub use client::{ApiClient, ApiResponse};
