//! # brigade-api
//!
//! HTTP API layer for Brigade built on Axum.
//!
//! Provides all REST endpoints, middleware (logging, rate limiting, CORS),
//! extractors, DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use state::AppState;
