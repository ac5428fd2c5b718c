//! # Core Engine Module
//!
//! Shared settings that the collision subsystems depend on.
//!
//! ## Organization
//!
//! - **Config**: Resolver tuning (near distance, vertical axis handling)

pub mod config;

pub use crate::foundation;

pub use config::{ResolverConfig, UpAxis};
