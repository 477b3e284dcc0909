//! # Materials
//!
//! A [`Material`] is a named substance with a density, a physical state and a
//! list of elements weighted by mass fraction. Materials are assembled with
//! [`MaterialBuilder`], either by atom count (chemical formula) or by mass
//! fraction, and are immutable once built.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use target_materials::{Element, MaterialBuilder};
//!
//! let h = Arc::new(Element::natural("H").unwrap());
//! let o = Arc::new(Element::natural("O").unwrap());
//! let water = MaterialBuilder::new("Water", 1.0)
//!     .add_element_by_atoms(h, 2)
//!     .add_element_by_atoms(o, 1)
//!     .build()
//!     .unwrap();
//! assert_eq!(water.components().len(), 2);
//! ```

use std::fmt;
use std::sync::Arc;

use config::constants::FRACTION_SUM_TOLERANCE;
use config::units::{AVOGADRO, MG_PER_CM3, ROOM_TEMPERATURE, STP_PRESSURE};

use crate::element::Element;
use crate::error::{MaterialError, MaterialResult};

/// Below this density a material with no explicit state is treated as a gas.
const GAS_DENSITY_THRESHOLD: f64 = 10.0 * MG_PER_CM3;

// =============================================================================
// STATE
// =============================================================================

/// Physical state of a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialState {
    /// Solid.
    Solid,
    /// Liquid.
    Liquid,
    /// Gas.
    Gas,
}

impl MaterialState {
    /// State implied by density alone.
    pub fn from_density(density: f64) -> Self {
        if density < GAS_DENSITY_THRESHOLD {
            MaterialState::Gas
        } else {
            MaterialState::Solid
        }
    }
}

impl fmt::Display for MaterialState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MaterialState::Solid => "Solid",
            MaterialState::Liquid => "Liquid",
            MaterialState::Gas => "Gas",
        };
        f.write_str(label)
    }
}

// =============================================================================
// MATERIAL
// =============================================================================

/// One element of a material and its mass fraction.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialComponent {
    /// Shared element definition.
    pub element: Arc<Element>,
    /// Mass fraction in `(0, 1]`.
    pub mass_fraction: f64,
}

/// An immutable material definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    name: String,
    density: f64,
    state: MaterialState,
    temperature: f64,
    pressure: f64,
    components: Vec<MaterialComponent>,
}

impl Material {
    /// Material name (catalog key).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Density in g/cm³.
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Physical state.
    pub fn state(&self) -> MaterialState {
        self.state
    }

    /// Temperature in kelvin.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Pressure in atmospheres.
    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    /// Elements with their mass fractions.
    pub fn components(&self) -> &[MaterialComponent] {
        &self.components
    }

    /// The element of a single-element material.
    pub fn sole_element(&self) -> Option<&Arc<Element>> {
        match self.components.as_slice() {
            [only] => Some(&only.element),
            _ => None,
        }
    }

    /// True for a material made of one element that is itself one isotope.
    pub fn is_single_isotope(&self) -> bool {
        self.sole_element().is_some_and(|el| el.is_single_isotope())
    }

    /// Mean molar mass in g/mol.
    pub fn mean_molar_mass(&self) -> f64 {
        let inverse: f64 = self
            .components
            .iter()
            .map(|c| c.mass_fraction / c.element.molar_mass)
            .sum();
        1.0 / inverse
    }

    /// Number density of each element's atoms, in atoms/cm³.
    pub fn atom_densities(&self) -> Vec<(&str, f64)> {
        self.components
            .iter()
            .map(|c| {
                let n = self.density * AVOGADRO * c.mass_fraction / c.element.molar_mass;
                (c.element.symbol.as_str(), n)
            })
            .collect()
    }

    /// Total atom number density in atoms/cm³.
    pub fn total_atom_density(&self) -> f64 {
        self.atom_densities().iter().map(|(_, n)| n).sum()
    }

    /// Electron density in electrons/cm³.
    pub fn electron_density(&self) -> f64 {
        self.components
            .iter()
            .map(|c| {
                self.density * AVOGADRO * c.mass_fraction * f64::from(c.element.z)
                    / c.element.molar_mass
            })
            .sum()
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            " Material: {:>12}    density: {:.6} g/cm3   state: {}   T: {:.2} K   P: {:.3e} atm",
            self.name, self.density, self.state, self.temperature, self.pressure
        )?;
        for c in &self.components {
            write!(
                f,
                "\n   ---> {}   mass fraction: {:.4} %",
                c.element,
                c.mass_fraction * 100.0
            )?;
        }
        Ok(())
    }
}

// =============================================================================
// BUILDER
// =============================================================================

#[derive(Debug, Clone)]
enum Part {
    Atoms(Arc<Element>, u32),
    Mass(Arc<Element>, f64),
}

/// Incremental construction of a [`Material`].
///
/// Components are given either all by atom count or all by mass fraction;
/// mixing the two is rejected by [`MaterialBuilder::build`].
#[derive(Debug, Clone)]
pub struct MaterialBuilder {
    name: String,
    density: f64,
    state: Option<MaterialState>,
    temperature: f64,
    pressure: f64,
    parts: Vec<Part>,
}

impl MaterialBuilder {
    /// Starts a material of the given density (g/cm³).
    pub fn new(name: impl Into<String>, density: f64) -> Self {
        Self {
            name: name.into(),
            density,
            state: None,
            temperature: ROOM_TEMPERATURE,
            pressure: STP_PRESSURE,
            parts: Vec::new(),
        }
    }

    /// Sets the physical state; otherwise it is inferred from density.
    pub fn state(mut self, state: MaterialState) -> Self {
        self.state = Some(state);
        self
    }

    /// Sets temperature (K) and pressure (atm).
    pub fn conditions(mut self, temperature: f64, pressure: f64) -> Self {
        self.temperature = temperature;
        self.pressure = pressure;
        self
    }

    /// Adds `count` atoms of `element` per formula unit.
    pub fn add_element_by_atoms(mut self, element: Arc<Element>, count: u32) -> Self {
        self.parts.push(Part::Atoms(element, count));
        self
    }

    /// Adds `element` with the given mass fraction.
    pub fn add_element_by_mass(mut self, element: Arc<Element>, fraction: f64) -> Self {
        self.parts.push(Part::Mass(element, fraction));
        self
    }

    /// Adds every element of `material`, scaled by `fraction`.
    pub fn add_material_by_mass(mut self, material: &Material, fraction: f64) -> Self {
        for c in material.components() {
            self.parts
                .push(Part::Mass(Arc::clone(&c.element), c.mass_fraction * fraction));
        }
        self
    }

    /// Validates the components and produces the material.
    pub fn build(self) -> MaterialResult<Material> {
        let name = self.name;
        if !(self.density > 0.0 && self.density.is_finite()) {
            return Err(MaterialError::composition(
                &name,
                format!("density must be positive: {}", self.density),
            ));
        }
        if self.parts.is_empty() {
            return Err(MaterialError::composition(&name, "no components"));
        }

        let by_atoms = matches!(self.parts[0], Part::Atoms(..));
        let mut weighted: Vec<(Arc<Element>, f64)> = Vec::with_capacity(self.parts.len());
        for part in self.parts {
            match (part, by_atoms) {
                (Part::Atoms(el, count), true) => {
                    if count == 0 {
                        return Err(MaterialError::composition(
                            &name,
                            format!("zero atoms of {}", el.symbol),
                        ));
                    }
                    let mass = f64::from(count) * el.molar_mass;
                    weighted.push((el, mass));
                }
                (Part::Mass(el, fraction), false) => {
                    if !(fraction > 0.0 && fraction <= 1.0 + FRACTION_SUM_TOLERANCE) {
                        return Err(MaterialError::composition(
                            &name,
                            format!("mass fraction of {} out of range: {fraction}", el.symbol),
                        ));
                    }
                    weighted.push((el, fraction));
                }
                _ => {
                    return Err(MaterialError::composition(
                        &name,
                        "cannot mix atom counts and mass fractions",
                    ));
                }
            }
        }

        let total: f64 = weighted.iter().map(|(_, w)| w).sum();
        if !by_atoms && (total - 1.0).abs() > FRACTION_SUM_TOLERANCE {
            return Err(MaterialError::composition(
                &name,
                format!("mass fractions sum to {total}, expected 1"),
            ));
        }

        let mut components: Vec<MaterialComponent> = Vec::with_capacity(weighted.len());
        for (element, weight) in weighted {
            let fraction = weight / total;
            match components.iter_mut().find(|c| c.element.name == element.name) {
                Some(existing) => existing.mass_fraction += fraction,
                None => components.push(MaterialComponent {
                    element,
                    mass_fraction: fraction,
                }),
            }
        }

        Ok(Material {
            state: self
                .state
                .unwrap_or_else(|| MaterialState::from_density(self.density)),
            name,
            density: self.density,
            temperature: self.temperature,
            pressure: self.pressure,
            components,
        })
    }
}

#[cfg(test)]
mod tests;
