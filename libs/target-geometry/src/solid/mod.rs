//! Parametric solids.
//!
//! Solids are centred on their local origin and described by half-extents.
//! A [`Solid::Tube`] has its axis along X, the beam axis of the assembly.

use std::f64::consts::PI;

use crate::error::{GeometryError, GeometryResult};

/// A centred solid shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Solid {
    /// Axis-aligned box.
    Box {
        /// Half-extent along X.
        half_x: f64,
        /// Half-extent along Y.
        half_y: f64,
        /// Half-extent along Z.
        half_z: f64,
    },
    /// Hollow or full cylinder along X.
    Tube {
        /// Radius of the bore, 0 for a full cylinder.
        inner_radius: f64,
        /// Outer radius.
        outer_radius: f64,
        /// Half-length along X.
        half_length: f64,
    },
}

impl Solid {
    /// Creates a box from its half-extents.
    ///
    /// # Arguments
    /// * `name` - Used in error messages.
    /// * `half_x`, `half_y`, `half_z` - Strictly positive half-extents.
    pub fn new_box(name: &str, half_x: f64, half_y: f64, half_z: f64) -> GeometryResult<Self> {
        for (axis, value) in [("x", half_x), ("y", half_y), ("z", half_z)] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(GeometryError::invalid_solid(
                    name,
                    format!("box half-extent along {axis} must be positive: {value}"),
                ));
            }
        }
        Ok(Solid::Box {
            half_x,
            half_y,
            half_z,
        })
    }

    /// Creates a tube along X.
    ///
    /// # Arguments
    /// * `name` - Used in error messages.
    /// * `inner_radius` - Bore radius, `>= 0`.
    /// * `outer_radius` - Strictly greater than `inner_radius`.
    /// * `half_length` - Strictly positive.
    pub fn new_tube(
        name: &str,
        inner_radius: f64,
        outer_radius: f64,
        half_length: f64,
    ) -> GeometryResult<Self> {
        if !(half_length > 0.0 && half_length.is_finite()) {
            return Err(GeometryError::invalid_solid(
                name,
                format!("tube half-length must be positive: {half_length}"),
            ));
        }
        if !(inner_radius >= 0.0) {
            return Err(GeometryError::invalid_solid(
                name,
                format!("tube inner radius must be non-negative: {inner_radius}"),
            ));
        }
        if !(outer_radius > inner_radius && outer_radius.is_finite()) {
            return Err(GeometryError::invalid_solid(
                name,
                format!("tube outer radius {outer_radius} must exceed inner radius {inner_radius}"),
            ));
        }
        Ok(Solid::Tube {
            inner_radius,
            outer_radius,
            half_length,
        })
    }

    /// Shape name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Solid::Box { .. } => "Box",
            Solid::Tube { .. } => "Tube",
        }
    }

    /// Half-extent along the beam axis.
    pub fn axial_half_length(&self) -> f64 {
        match *self {
            Solid::Box { half_x, .. } => half_x,
            Solid::Tube { half_length, .. } => half_length,
        }
    }

    /// Largest distance from the axis reached by the solid.
    pub fn radial_reach(&self) -> f64 {
        match *self {
            Solid::Box { half_y, half_z, .. } => half_y.hypot(half_z),
            Solid::Tube { outer_radius, .. } => outer_radius,
        }
    }

    /// Radius of the largest centred disc that fits inside the solid's
    /// cross-section.
    pub fn radial_capacity(&self) -> f64 {
        match *self {
            Solid::Box { half_y, half_z, .. } => half_y.min(half_z),
            Solid::Tube { outer_radius, .. } => outer_radius,
        }
    }

    /// Radius of the bore; material starts at this distance from the axis.
    pub fn radial_inner(&self) -> f64 {
        match *self {
            Solid::Box { .. } => 0.0,
            Solid::Tube { inner_radius, .. } => inner_radius,
        }
    }

    /// Volume in mm³.
    pub fn volume(&self) -> f64 {
        match *self {
            Solid::Box {
                half_x,
                half_y,
                half_z,
            } => 8.0 * half_x * half_y * half_z,
            Solid::Tube {
                inner_radius,
                outer_radius,
                half_length,
            } => {
                PI * (outer_radius * outer_radius - inner_radius * inner_radius)
                    * 2.0
                    * half_length
            }
        }
    }
}

#[cfg(test)]
mod tests;
