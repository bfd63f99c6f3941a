//! # Blog Shared
//!
//! Wire types exchanged over HTTP. Kept free of domain and infrastructure
//! dependencies so clients can reuse them as-is.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
