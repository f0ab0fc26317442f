//! Marigold Admin library.
//!
//! This crate provides the admin panel as a library, allowing it to be
//! tested and reused by the CLI and integration tests.
//!
//! # Architecture
//!
//! - Axum web framework with askama templates for server-side rendering
//! - `marigold-client` for every store operation - the panel holds no
//!   store data of its own, only the per-admin session token
//! - In-memory sessions (SameSite=Strict, 24h inactivity expiry)
//! - tracing + optional Sentry for observability
//!
//! # Security
//!
//! The panel proxies HIGH PRIVILEGE store management operations. Only
//! deploy on VPN-protected infrastructure.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod config;
pub mod error;
pub mod export;
pub mod filters;
pub mod forms;
pub mod listing;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
