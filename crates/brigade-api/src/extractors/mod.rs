//! Request extractors.

pub mod auth;
pub mod meta;

pub use auth::CurrentUser;
pub use meta::ClientMeta;
