//! # Error Types
//!
//! Error types for material definition and lookup. Every failure is
//! recoverable: the catalog is left exactly as it was before the call.

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while resolving or defining materials.
///
/// ## Example
///
/// ```rust
/// use target_materials::{MaterialCatalog, MaterialError};
///
/// let catalog = MaterialCatalog::new();
/// match catalog.resolve("unobtainium") {
///     Err(MaterialError::UnknownMaterial { name }) => assert_eq!(name, "unobtainium"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MaterialError {
    /// The name is neither in the standard table nor custom-defined.
    #[error("Unknown material: {name}")]
    UnknownMaterial {
        /// Requested material name.
        name: String,
    },

    /// Single-isotope element constants violate their bounds.
    #[error("Invalid isotope specification for '{element}': {message}")]
    InvalidIsotopeSpec {
        /// Element (and material) name being defined.
        element: String,
        /// Which bound was violated.
        message: String,
    },

    /// Element symbol not present in the natural element table.
    #[error("Unknown element symbol: {symbol}")]
    UnknownElement {
        /// Requested symbol.
        symbol: String,
    },

    /// Density or component list of a composite material is unusable.
    #[error("Invalid composition for '{material}': {message}")]
    InvalidComposition {
        /// Material being built.
        material: String,
        /// Description of the problem.
        message: String,
    },
}

impl MaterialError {
    pub(crate) fn isotope(element: &str, message: impl Into<String>) -> Self {
        Self::InvalidIsotopeSpec {
            element: element.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn composition(material: &str, message: impl Into<String>) -> Self {
        Self::InvalidComposition {
            material: material.to_string(),
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for material operations.
pub type MaterialResult<T> = Result<T, MaterialError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MaterialError::UnknownMaterial {
            name: "unobtainium".to_string(),
        };
        assert!(err.to_string().contains("unobtainium"));

        let err = MaterialError::isotope("Oxygen18", "mass number 7 below atomic number 8");
        assert!(err.to_string().contains("Oxygen18"));
        assert!(err.to_string().contains("mass number"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MaterialError>();
    }
}
