//! # Error Types
//!
//! Error types for geometry construction.
//!
//! ## Error Policy
//!
//! - Construction is all-or-nothing: on any error the previous tree is kept
//! - Errors are deterministic in their inputs, retrying unchanged input is
//!   pointless
//! - Errors name the volume involved

use config::constants::ConfigError;
use target_materials::MaterialError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building the volume tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Dimensions would protrude from a container, overlap a sibling or
    /// exceed the chamber.
    #[error("Geometry overflow in '{volume}': {message}")]
    Overflow {
        /// Volume that does not fit.
        volume: String,
        /// Which bound was exceeded.
        message: String,
    },

    /// Solid parameters are degenerate.
    #[error("Invalid solid '{solid}': {message}")]
    InvalidSolid {
        /// Solid name.
        solid: String,
        /// Description of the problem.
        message: String,
    },

    /// Material resolution or definition failed.
    #[error(transparent)]
    Material(#[from] MaterialError),

    /// Design constants are inconsistent.
    #[error("Invalid design constants: {0}")]
    Config(#[from] ConfigError),
}

impl GeometryError {
    pub(crate) fn overflow(volume: &str, message: impl Into<String>) -> Self {
        Self::Overflow {
            volume: volume.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_solid(solid: &str, message: impl Into<String>) -> Self {
        Self::InvalidSolid {
            solid: solid.to_string(),
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeometryError::overflow("Target", "radius 12 outside (0, 10)");
        assert!(err.to_string().contains("Geometry overflow"));
        assert!(err.to_string().contains("Target"));
    }

    #[test]
    fn test_material_error_is_transparent() {
        let err: GeometryError = MaterialError::UnknownMaterial {
            name: "unobtainium".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Unknown material: unobtainium");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeometryError>();
    }
}
