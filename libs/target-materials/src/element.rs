//! # Elements and Isotopes
//!
//! An [`Element`] is either taken from the natural-abundance table or built
//! from exactly one [`Isotope`] at 100 % abundance. The single-isotope form is
//! what enriched target materials need: a natural mixture would carry the
//! wrong reaction channels.

use std::fmt;

use crate::error::{MaterialError, MaterialResult};
use crate::nist;

// =============================================================================
// ISOTOPE
// =============================================================================

/// A nuclide with a fixed atomic number, mass number and molar mass.
#[derive(Debug, Clone, PartialEq)]
pub struct Isotope {
    /// Isotope symbol, e.g. `O18`.
    pub name: String,
    /// Atomic number.
    pub z: u32,
    /// Mass number (nucleon count).
    pub a: u32,
    /// Molar mass in g/mol.
    pub molar_mass: f64,
}

impl Isotope {
    /// Creates an isotope, taking its molar mass from the atomic mass table.
    ///
    /// Isotopes missing from the table fall back to `A` g/mol.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use target_materials::Isotope;
    ///
    /// let o18 = Isotope::new("O18", 8, 18).unwrap();
    /// assert!((o18.molar_mass - 17.9992).abs() < 1e-4);
    /// assert!(Isotope::new("X", 8, 7).is_err());
    /// ```
    pub fn new(name: &str, z: u32, a: u32) -> MaterialResult<Self> {
        if z == 0 {
            return Err(MaterialError::isotope(name, "atomic number must be >= 1"));
        }
        if z > nist::MAX_ATOMIC_NUMBER {
            return Err(MaterialError::isotope(
                name,
                format!("atomic number {z} exceeds {}", nist::MAX_ATOMIC_NUMBER),
            ));
        }
        if a < z {
            return Err(MaterialError::isotope(
                name,
                format!("mass number {a} below atomic number {z}"),
            ));
        }
        let molar_mass = nist::isotope_mass(z, a).unwrap_or_else(|| {
            log::debug!("isotope {name} (Z={z}, A={a}) not tabulated, using A g/mol");
            f64::from(a)
        });
        Ok(Self {
            name: name.to_string(),
            z,
            a,
            molar_mass,
        })
    }
}

// =============================================================================
// ELEMENT
// =============================================================================

/// Isotopic make-up of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum IsotopeComposition {
    /// Natural isotopic abundance, summarized by the element's molar mass.
    Natural,
    /// Explicit isotopes with abundances summing to one.
    Enriched(Vec<(Isotope, f64)>),
}

/// A chemical element as used inside a material.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Element name, e.g. `Nickel` or `Oxygen18`.
    pub name: String,
    /// Chemical or isotope symbol.
    pub symbol: String,
    /// Atomic number.
    pub z: u32,
    /// Effective molar mass in g/mol.
    pub molar_mass: f64,
    /// Isotopic make-up.
    pub isotopes: IsotopeComposition,
}

impl Element {
    /// Natural-abundance element from the embedded table.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use target_materials::Element;
    ///
    /// let ni = Element::natural("Ni").unwrap();
    /// assert_eq!(ni.z, 28);
    /// assert!(!ni.is_single_isotope());
    /// ```
    pub fn natural(symbol: &str) -> MaterialResult<Self> {
        let (name, z, molar_mass) =
            nist::natural_element(symbol).ok_or_else(|| MaterialError::UnknownElement {
                symbol: symbol.to_string(),
            })?;
        Ok(Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            z,
            molar_mass,
            isotopes: IsotopeComposition::Natural,
        })
    }

    /// Element made of `isotope` alone, at 100 % abundance.
    pub fn from_single_isotope(name: &str, symbol: &str, isotope: Isotope) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            z: isotope.z,
            molar_mass: isotope.molar_mass,
            isotopes: IsotopeComposition::Enriched(vec![(isotope, 1.0)]),
        }
    }

    /// True when the element consists of exactly one isotope.
    pub fn is_single_isotope(&self) -> bool {
        matches!(&self.isotopes, IsotopeComposition::Enriched(list) if list.len() == 1)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Element: {} ({})   Z = {:3}   A = {:.4} g/mole",
            self.name, self.symbol, self.z, self.molar_mass
        )?;
        if let IsotopeComposition::Enriched(list) = &self.isotopes {
            for (isotope, abundance) in list {
                write!(
                    f,
                    "\n    ---> Isotope: {}  Z = {}  N = {}  A = {:.4} g/mole  abundance: {:.2} %",
                    isotope.name,
                    isotope.z,
                    isotope.a,
                    isotope.molar_mass,
                    abundance * 100.0
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn isotope_rejects_zero_atomic_number() {
        let err = Isotope::new("n", 0, 1).unwrap_err();
        assert!(matches!(err, MaterialError::InvalidIsotopeSpec { .. }));
    }

    #[test]
    fn isotope_rejects_mass_below_charge() {
        let err = Isotope::new("O7", 8, 7).unwrap_err();
        assert!(err.to_string().contains("mass number 7"));
    }

    #[test]
    fn isotope_accepts_mass_equal_to_charge() {
        let h1 = Isotope::new("H1", 1, 1).expect("protium");
        assert_relative_eq!(h1.molar_mass, 1.007_825_032_24);
    }

    #[test]
    fn untabulated_isotope_uses_mass_number() {
        let iso = Isotope::new("Fe57", 26, 57).expect("valid");
        assert_eq!(iso.molar_mass, 57.0);
    }

    #[test]
    fn single_isotope_element_takes_isotope_mass() {
        let iso = Isotope::new("O18", 8, 18).expect("valid");
        let el = Element::from_single_isotope("Oxygen18", "O18", iso.clone());
        assert!(el.is_single_isotope());
        assert_eq!(el.z, 8);
        assert_relative_eq!(el.molar_mass, iso.molar_mass);
        assert!(el.to_string().contains("abundance: 100.00 %"));
    }

    #[test]
    fn unknown_symbol_is_reported() {
        assert_eq!(
            Element::natural("Qq").unwrap_err(),
            MaterialError::UnknownElement {
                symbol: "Qq".to_string()
            }
        );
    }
}
