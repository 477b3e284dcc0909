//! # Target Materials
//!
//! Material definitions for the target assembly.
//!
//! ## Architecture
//!
//! ```text
//! nist tables → Element / Isotope → MaterialBuilder → Material → MaterialCatalog
//! ```
//!
//! The catalog exclusively owns every material and hands out shared,
//! read-only `Arc<Material>` references. Two definition paths exist:
//!
//! - [`MaterialCatalog::get_or_define_standard`]: fixed table of compounds
//!   and elements ([`StandardMaterial`])
//! - [`MaterialCatalog::define_single_isotope_element`]: an element made of
//!   one isotope, wrapped in a material of the given density
//!
//! ## Example
//!
//! ```rust
//! use target_materials::MaterialCatalog;
//!
//! let catalog = MaterialCatalog::new();
//! let havar = catalog.get_or_define_standard("Havar").unwrap();
//! assert!(havar.density() > 8.0);
//! ```

pub mod catalog;
pub mod element;
pub mod error;
pub mod material;
mod nist;
pub mod standard;

pub use catalog::MaterialCatalog;
pub use element::{Element, Isotope, IsotopeComposition};
pub use error::{MaterialError, MaterialResult};
pub use material::{Material, MaterialBuilder, MaterialComponent, MaterialState};
pub use standard::StandardMaterial;
