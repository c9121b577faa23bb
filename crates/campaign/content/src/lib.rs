//! Data-driven campaign content definitions and loaders.
//!
//! This crate houses static recruitment content and provides loaders for
//! RON/TOML data files:
//! - Recruitable role catalog (built-in set, or data-driven via RON)
//! - Campaign configuration (data-driven via TOML)
//!
//! Content is consumed by the decision runtime and never appears in world
//! state.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::RoleCatalog;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, RoleLoader};
