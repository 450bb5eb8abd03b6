//! # Postboard API Server
//!
//! Posts CRUD over actix-web. The binary in `main.rs` wires these
//! modules together; integration tests build the same router.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod seed;
pub mod state;
pub mod telemetry;
