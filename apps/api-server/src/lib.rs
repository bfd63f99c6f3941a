//! # Blog Posts API Server
//!
//! Actix-web endpoint layer over the blog post record store. The binary in
//! `main.rs` wires these modules together; integration tests drive them
//! through `actix_web::test`.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;
