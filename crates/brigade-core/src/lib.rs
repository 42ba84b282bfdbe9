//! # brigade-core
//!
//! Core crate for Brigade. Contains configuration schemas, pagination
//! types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Brigade crates.

pub mod config;
pub mod error;
pub mod pagination;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
