//! Fixed design constants and default parameters of the target assembly.
//!
//! Each public item documents its purpose and provides a minimal usage example
//! so that the geometry crates can stay declarative and avoid scattering
//! literals. All lengths are millimetres (see [`crate::units`]).

use std::fmt;

use crate::units::{MICROMETRE, MILLIMETRE};

// =============================================================================
// PRECISION
// =============================================================================

/// Slack used when comparing placements against container bounds (mm).
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Tolerance on the sum of mass fractions of a composite material.
///
/// # Examples
/// ```
/// use config::constants::FRACTION_SUM_TOLERANCE;
/// let sum: f64 = [0.5, 0.25, 0.25].iter().sum();
/// assert!((sum - 1.0).abs() < FRACTION_SUM_TOLERANCE);
/// ```
pub const FRACTION_SUM_TOLERANCE: f64 = 1.0e-6;

// =============================================================================
// ADJUSTABLE PARAMETER DEFAULTS
// =============================================================================

/// Default half-length of the target along the beam axis.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_TARGET_HALF_LENGTH, CHAMBER_HALF_LENGTH};
/// assert!(DEFAULT_TARGET_HALF_LENGTH < CHAMBER_HALF_LENGTH);
/// ```
pub const DEFAULT_TARGET_HALF_LENGTH: f64 = 1.5 * MILLIMETRE;

/// Default target radius.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_TARGET_RADIUS, OUTER_RADIUS};
/// assert!(DEFAULT_TARGET_RADIUS < OUTER_RADIUS);
/// ```
pub const DEFAULT_TARGET_RADIUS: f64 = 5.0 * MILLIMETRE;

/// Default target material: oxygen-18 enriched water.
pub const DEFAULT_TARGET_MATERIAL: &str = "Water_18O";

// =============================================================================
// FIXED DESIGN CONSTANTS
// =============================================================================

/// Inner radius shared by every tube of the assembly.
pub const INNER_RADIUS: f64 = 0.0;

/// Outer radius of the target chamber.
pub const OUTER_RADIUS: f64 = 10.0 * MILLIMETRE;

/// Half-length of the target chamber, 0.5 mm back wall included.
pub const CHAMBER_HALF_LENGTH: f64 = 5.0 * MILLIMETRE;

/// Half-length of the nickel foil (25 µm foil).
pub const NICKEL_FOIL_HALF_LENGTH: f64 = 12.5 * MICROMETRE;

/// Half-length of the steel seal foil (25 µm Havar).
pub const STEEL_FOIL_HALF_LENGTH: f64 = 12.5 * MICROMETRE;

/// Half-length of the helium cooling gap.
pub const HELIUM_GAP_HALF_LENGTH: f64 = 1.0 * MILLIMETRE;

/// Half-length of the beam cap.
pub const BEAM_CAP_HALF_LENGTH: f64 = 0.5 * MILLIMETRE;

/// Axial half-extent of the world volume.
///
/// # Examples
/// ```
/// use config::constants::{WORLD_HALF_X, CHAMBER_HALF_LENGTH};
/// assert!(WORLD_HALF_X >= CHAMBER_HALF_LENGTH);
/// ```
pub const WORLD_HALF_X: f64 = 1.2 * CHAMBER_HALF_LENGTH;

/// Transverse half-extent of the world volume.
///
/// # Examples
/// ```
/// use config::constants::{WORLD_HALF_YZ, OUTER_RADIUS};
/// assert!(WORLD_HALF_YZ >= OUTER_RADIUS);
/// ```
pub const WORLD_HALF_YZ: f64 = 1.2 * OUTER_RADIUS;

// =============================================================================
// DESIGNATED MATERIALS
// =============================================================================

/// Fill of the world volume.
pub const WORLD_MATERIAL: &str = "Galactic";

/// Body of the target chamber.
pub const CHAMBER_MATERIAL: &str = "Niobium";

/// Cooling gas between the foils and the target.
pub const COOLING_MATERIAL: &str = "Helium";

/// Nickel foil.
pub const NICKEL_FOIL_MATERIAL: &str = "Nickel";

/// Steel seal foil.
pub const STEEL_FOIL_MATERIAL: &str = "Havar";

/// Beam cap.
pub const BEAM_CAP_MATERIAL: &str = "Aluminium";

// =============================================================================
// DESIGN CONSTANTS BUNDLE
// =============================================================================

/// Immutable bundle of the fixed design constants.
///
/// Set once when a geometry builder is created and never changed afterwards.
///
/// # Examples
/// ```
/// use config::constants::DesignConstants;
/// let constants = DesignConstants::default();
/// assert!(constants.validated().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignConstants {
    /// Inner radius of every tube.
    pub inner_radius: f64,
    /// Outer radius of the target chamber.
    pub outer_radius: f64,
    /// Half-length of the target chamber.
    pub chamber_half_length: f64,
    /// Half-length of the nickel foil.
    pub nickel_foil_half_length: f64,
    /// Half-length of the steel seal foil.
    pub steel_foil_half_length: f64,
    /// Half-length of the helium cooling gap.
    pub helium_gap_half_length: f64,
    /// Half-length of the beam cap.
    pub beam_cap_half_length: f64,
    /// Axial half-extent of the world.
    pub world_half_x: f64,
    /// Transverse half-extent of the world.
    pub world_half_yz: f64,
}

impl DesignConstants {
    /// Returns `self` if every constant is physically consistent.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, DesignConstants};
    /// let mut constants = DesignConstants::default();
    /// constants.inner_radius = constants.outer_radius;
    /// assert!(matches!(
    ///     constants.validated(),
    ///     Err(ConfigError::InnerRadiusNotBelowOuter { .. })
    /// ));
    /// ```
    pub fn validated(self) -> Result<Self, ConfigError> {
        let positive = [
            ("outer_radius", self.outer_radius),
            ("chamber_half_length", self.chamber_half_length),
            ("nickel_foil_half_length", self.nickel_foil_half_length),
            ("steel_foil_half_length", self.steel_foil_half_length),
            ("helium_gap_half_length", self.helium_gap_half_length),
            ("beam_cap_half_length", self.beam_cap_half_length),
            ("world_half_x", self.world_half_x),
            ("world_half_yz", self.world_half_yz),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if !(self.inner_radius >= 0.0) {
            return Err(ConfigError::NegativeInnerRadius(self.inner_radius));
        }
        if self.inner_radius >= self.outer_radius {
            return Err(ConfigError::InnerRadiusNotBelowOuter {
                inner: self.inner_radius,
                outer: self.outer_radius,
            });
        }
        if self.chamber_half_length > self.world_half_x {
            return Err(ConfigError::ChamberExceedsWorld {
                axis: "x",
                chamber: self.chamber_half_length,
                world: self.world_half_x,
            });
        }
        if self.outer_radius > self.world_half_yz {
            return Err(ConfigError::ChamberExceedsWorld {
                axis: "yz",
                chamber: self.outer_radius,
                world: self.world_half_yz,
            });
        }
        Ok(self)
    }

    /// Sum of the fixed half-lengths stacked behind the target.
    ///
    /// # Examples
    /// ```
    /// use config::constants::DesignConstants;
    /// let c = DesignConstants::default();
    /// assert!(c.fixed_stack_half_length() < c.chamber_half_length);
    /// ```
    pub fn fixed_stack_half_length(&self) -> f64 {
        self.helium_gap_half_length
            + self.nickel_foil_half_length
            + self.steel_foil_half_length
            + self.beam_cap_half_length
    }
}

impl Default for DesignConstants {
    fn default() -> Self {
        Self {
            inner_radius: INNER_RADIUS,
            outer_radius: OUTER_RADIUS,
            chamber_half_length: CHAMBER_HALF_LENGTH,
            nickel_foil_half_length: NICKEL_FOIL_HALF_LENGTH,
            steel_foil_half_length: STEEL_FOIL_HALF_LENGTH,
            helium_gap_half_length: HELIUM_GAP_HALF_LENGTH,
            beam_cap_half_length: BEAM_CAP_HALF_LENGTH,
            world_half_x: WORLD_HALF_X,
            world_half_yz: WORLD_HALF_YZ,
        }
    }
}

/// Error returned when inconsistent design constants are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A length that must be strictly positive is zero, negative or not finite.
    NonPositive {
        /// Field name.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// The inner radius is negative.
    NegativeInnerRadius(f64),
    /// The inner radius is not strictly below the outer radius.
    InnerRadiusNotBelowOuter {
        /// Inner radius.
        inner: f64,
        /// Outer radius.
        outer: f64,
    },
    /// The chamber does not fit inside the world along `axis`.
    ChamberExceedsWorld {
        /// `"x"` (axial) or `"yz"` (transverse).
        axis: &'static str,
        /// Chamber half-extent along the axis.
        chamber: f64,
        /// World half-extent along the axis.
        world: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive { name, value } => {
                write!(f, "{name} must be positive: {value}")
            }
            ConfigError::NegativeInnerRadius(value) => {
                write!(f, "inner_radius must be >= 0: {value}")
            }
            ConfigError::InnerRadiusNotBelowOuter { inner, outer } => {
                write!(f, "inner_radius {inner} must be below outer_radius {outer}")
            }
            ConfigError::ChamberExceedsWorld {
                axis,
                chamber,
                world,
            } => write!(
                f,
                "chamber half-extent {chamber} exceeds world half-extent {world} along {axis}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
