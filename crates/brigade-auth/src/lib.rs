//! # brigade-auth
//!
//! Authentication and authorization primitives for Brigade: signed token
//! issuance and verification (two key classes, access and refresh),
//! Argon2id password hashing, the password policy, and the role
//! membership predicate.
//!
//! Everything in this crate is stateless: pure functions over configured
//! secrets and clock time. Liveness decisions (does the account still
//! exist, is it still active) belong to the request path, not here.

pub mod jwt;
pub mod password;
pub mod policy;
