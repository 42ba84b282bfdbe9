//! Integration test entry point.
//!
//! These tests drive the full router through tower's `oneshot` and need a
//! running PostgreSQL (see `tests/fixtures/test_config.toml`), so they are
//! `#[ignore]`d by default. Run them with `cargo test -- --ignored`.

mod helpers;

mod audit_test;
mod auth_test;
mod product_test;
