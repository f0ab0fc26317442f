//! Marigold Core - Shared types library.
//!
//! This crate provides common types used across all Marigold components:
//! - `client` - Typed client for the Marigold admin REST API
//! - `admin` - Internal administration panel
//! - `cli` - Command-line tools for store management
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no clocks read implicitly. Anything time-dependent (coupon
//! windows) takes `now` as an argument. This keeps it lightweight and
//! allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Status state machines, stock buckets, coupon status, email
//! - [`listing`] - Primitives for the list filter/sort/paginate pipeline

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod listing;
pub mod types;

pub use types::*;
