//! # brigade-service
//!
//! Business services for Brigade. Each service owns one aggregate's
//! operations: validate input, call the repository, and hand the audit
//! recorder a snapshot of what changed. Authorization happens in the API
//! layer before a service method is reached; services assume the caller
//! has already been authenticated and permitted.

pub mod audit;
pub mod auth;
pub mod context;
pub mod product;
pub mod restaurant;
pub mod supplier;
pub mod user;
