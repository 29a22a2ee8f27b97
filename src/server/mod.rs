//! Server application core modules.
//!
//! This module contains all server-side functionality for the recipe application, including
//! HTTP routing with symbolic route names, session authentication, database repositories and
//! the services that turn stored recipes, tags and ingredients into API representations.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod route;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
