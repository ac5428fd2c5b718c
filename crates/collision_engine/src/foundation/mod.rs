//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Math types and the ellipsoid change of basis
//! - Logging initialization

pub mod logging;
pub mod math;
