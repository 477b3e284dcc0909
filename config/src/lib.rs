//! # Config Crate
//!
//! Centralized design constants for the cyclotron target assembly. Every
//! fixed dimension, default parameter and tolerance is defined here so the
//! material and geometry crates never carry their own literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DesignConstants, DEFAULT_TARGET_RADIUS};
//!
//! let constants = DesignConstants::default();
//! assert!(DEFAULT_TARGET_RADIUS < constants.outer_radius);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Plain constants and one validated bundle
//! - **Explicit Units**: Lengths in millimetres, densities in g/cm³

pub mod constants;
pub mod units;
