//! Server application models and type definitions.
//!
//! This module contains the application state shared with handlers, type aliases for database
//! entity models, and typed wrappers around session data.

pub mod app;
pub mod db;
pub mod session;
