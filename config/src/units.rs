//! # Units
//!
//! Unit multipliers and physical constants. Internal base units are:
//!
//! | Quantity | Unit |
//! |----------|------|
//! | Length | millimetre |
//! | Density | g/cm³ |
//! | Molar mass | g/mol |
//! | Temperature | kelvin |
//! | Pressure | atmosphere |
//!
//! Multiply a literal by its unit to convert it into the base unit, divide to
//! convert back out.
//!
//! ```rust
//! use config::units::{CENTIMETRE, MICROMETRE};
//!
//! let foil = 25.0 * MICROMETRE;
//! assert!((foil - 0.025).abs() < 1e-12);
//! assert_eq!(1.0 * CENTIMETRE, 10.0);
//! ```

// =============================================================================
// LENGTH
// =============================================================================

/// One millimetre (base length unit).
pub const MILLIMETRE: f64 = 1.0;

/// One centimetre.
pub const CENTIMETRE: f64 = 10.0 * MILLIMETRE;

/// One metre.
pub const METRE: f64 = 1000.0 * MILLIMETRE;

/// One micrometre.
pub const MICROMETRE: f64 = 1.0e-3 * MILLIMETRE;

/// Cubic millimetres per cubic centimetre.
pub const MM3_PER_CM3: f64 = 1000.0;

// =============================================================================
// DENSITY
// =============================================================================

/// One gram per cubic centimetre (base density unit).
pub const G_PER_CM3: f64 = 1.0;

/// One milligram per cubic centimetre.
pub const MG_PER_CM3: f64 = 1.0e-3 * G_PER_CM3;

// =============================================================================
// PHYSICAL CONSTANTS
// =============================================================================

/// Avogadro constant (1/mol).
pub const AVOGADRO: f64 = 6.022_140_76e23;

/// Standard temperature (K).
pub const STP_TEMPERATURE: f64 = 273.15;

/// Room temperature used for condensed materials (K).
pub const ROOM_TEMPERATURE: f64 = 293.15;

/// Standard pressure (atm).
pub const STP_PRESSURE: f64 = 1.0;

/// Density used for intergalactic vacuum (g/cm³).
///
/// Matches the conventional "galactic" material of transport codes: low
/// enough that nothing interacts, non-zero so every material has a density.
pub const UNIVERSE_MEAN_DENSITY: f64 = 1.0e-25 * G_PER_CM3;

/// Pressure paired with [`UNIVERSE_MEAN_DENSITY`] (atm).
pub const UNIVERSE_MEAN_PRESSURE: f64 = 3.0e-18 / 101_325.0;

/// Temperature paired with [`UNIVERSE_MEAN_DENSITY`] (K).
pub const UNIVERSE_MEAN_TEMPERATURE: f64 = 2.73;
