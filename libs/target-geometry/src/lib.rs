//! # Target Geometry
//!
//! Nested-volume model of a cylindrical cyclotron target assembly: a world
//! box holding a chamber tube, which holds the target, the helium cooling
//! gap, two window foils and the beam cap, all stacked along the beam (X)
//! axis.
//!
//! ## Architecture
//!
//! ```text
//! TargetParameters ─┐
//! DesignConstants ──┼─► validate_dimensions ─► AxialLayout ─► build_volume_tree
//! DetectorMaterials ┘                                              │
//!                                                                  ▼
//!                                       PhysicalVolume (World ► Chamber ► stack)
//! ```
//!
//! [`GeometryBuilder`] owns the parameters and the current tree and rebuilds
//! it on request; [`SharedGeometryBuilder`] serialises access to one builder
//! across threads.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use target_geometry::{GeometryBuilder, VolumeReport};
//! use target_materials::MaterialCatalog;
//!
//! let mut builder = GeometryBuilder::new(Arc::new(MaterialCatalog::new())).unwrap();
//! builder.set_target_length(1.0);
//! let world = builder.construct().unwrap();
//! assert_eq!(world.volume_count(), 7);
//! println!("{}", VolumeReport(world));
//! ```

pub mod builder;
pub mod construct;
pub mod error;
pub mod layout;
pub mod materials;
pub mod parameters;
pub mod report;
pub mod shared;
pub mod solid;
pub mod volume;

pub use builder::GeometryBuilder;
pub use construct::{build_volume_tree, validate_dimensions};
pub use error::{GeometryError, GeometryResult};
pub use layout::AxialLayout;
pub use materials::{define_materials, DetectorMaterials};
pub use parameters::TargetParameters;
pub use report::{ParameterReport, VolumeReport};
pub use shared::SharedGeometryBuilder;
pub use solid::Solid;
pub use volume::{LogicalVolume, PhysicalVolume, VisAttributes};
