//! # Blog Core
//!
//! The domain layer of the blog posts service: the `BlogPost` entity, its
//! validation rules, and the repository ports the infrastructure implements.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
