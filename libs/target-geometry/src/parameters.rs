//! Adjustable target parameters.

use config::constants::{
    DEFAULT_TARGET_HALF_LENGTH, DEFAULT_TARGET_MATERIAL, DEFAULT_TARGET_RADIUS,
};
use serde::{Deserialize, Serialize};

/// The run-time adjustable subset of the geometry.
///
/// Values are stored as given; bounds are only checked when the geometry is
/// constructed.
///
/// ## Example
///
/// ```rust
/// use target_geometry::TargetParameters;
///
/// let params = TargetParameters::default();
/// assert_eq!(params.material, "Water_18O");
/// assert!(params.radius > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetParameters {
    /// Half-length of the target along the beam axis (mm).
    pub half_length: f64,
    /// Target radius (mm).
    pub radius: f64,
    /// Catalog name of the target material.
    pub material: String,
}

impl Default for TargetParameters {
    fn default() -> Self {
        Self {
            half_length: DEFAULT_TARGET_HALF_LENGTH,
            radius: DEFAULT_TARGET_RADIUS,
            material: DEFAULT_TARGET_MATERIAL.to_string(),
        }
    }
}
