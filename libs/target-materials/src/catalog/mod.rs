//! # Material Catalog
//!
//! Process-wide registry of materials keyed by name. A name is defined at most
//! once per catalog: any later request for the same name, whatever its
//! arguments, returns the first definition.
//!
//! ## Concurrency
//!
//! Lookups take a shared read lock. Definitions build the material outside of
//! any lock and then insert under the write lock with `entry().or_insert`, so
//! two threads racing on one name both receive the same `Arc`.
//!
//! ## Example
//!
//! ```rust
//! use target_materials::MaterialCatalog;
//!
//! let catalog = MaterialCatalog::new();
//! let first = catalog
//!     .define_single_isotope_element("Oxygen18", "O18", 1.608e-3, 8, 18)
//!     .unwrap();
//! let again = catalog
//!     .define_single_isotope_element("Oxygen18", "O18", 5.0, 8, 18)
//!     .unwrap();
//! assert!(std::sync::Arc::ptr_eq(&first, &again));
//! ```

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::element::{Element, Isotope};
use crate::error::{MaterialError, MaterialResult};
use crate::material::{Material, MaterialBuilder};
use crate::standard::StandardMaterial;

/// Named materials and the natural elements they are built from.
#[derive(Debug, Default)]
pub struct MaterialCatalog {
    materials: RwLock<HashMap<String, Arc<Material>>>,
    elements: RwLock<HashMap<String, Arc<Element>>>,
}

impl MaterialCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared catalog for the whole process.
    pub fn global() -> Arc<MaterialCatalog> {
        static GLOBAL: OnceLock<Arc<MaterialCatalog>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(MaterialCatalog::new())))
    }

    // =========================================================================
    // LOOKUP
    // =========================================================================

    /// Already-defined material, standard or custom.
    pub fn find(&self, name: &str) -> Option<Arc<Material>> {
        self.materials
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Resolves `name` to a defined material, defining it from the standard
    /// table when needed.
    pub fn resolve(&self, name: &str) -> MaterialResult<Arc<Material>> {
        match self.find(name) {
            Some(material) => Ok(material),
            None => self.get_or_define_standard(name),
        }
    }

    /// Returns the standard material `name`, defining it on first use.
    ///
    /// Names already registered (including custom definitions) are returned
    /// as is.
    pub fn get_or_define_standard(&self, name: &str) -> MaterialResult<Arc<Material>> {
        if let Some(existing) = self.find(name) {
            return Ok(existing);
        }
        let standard =
            StandardMaterial::from_name(name).ok_or_else(|| MaterialError::UnknownMaterial {
                name: name.to_string(),
            })?;
        let material = standard.build(self)?;
        Ok(self.insert(material))
    }

    /// Natural element by symbol, cached after first use.
    pub fn element(&self, symbol: &str) -> MaterialResult<Arc<Element>> {
        if let Some(element) = self
            .elements
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(symbol)
        {
            return Ok(Arc::clone(element));
        }
        let element = Arc::new(Element::natural(symbol)?);
        let mut elements = self.elements.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(
            elements.entry(symbol.to_string()).or_insert(element),
        ))
    }

    /// Sorted names of every defined material.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .materials
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Number of defined materials.
    pub fn len(&self) -> usize {
        self.materials
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True when nothing has been defined yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // =========================================================================
    // DEFINITION
    // =========================================================================

    /// Defines a material whose only element is a single isotope.
    ///
    /// The isotope `isotope_symbol` (atomic number `z`, mass number `a`) is
    /// wrapped in an element named `element_name` at 100 % abundance, and that
    /// element in a material of `density` g/cm³ registered under
    /// `element_name`.
    ///
    /// If `element_name` is already registered the existing material is
    /// returned unchanged and the arguments are not examined.
    ///
    /// # Errors
    ///
    /// [`MaterialError::InvalidIsotopeSpec`] when `z < 1`, `a < z` or
    /// `density <= 0`. Nothing is registered in that case.
    pub fn define_single_isotope_element(
        &self,
        element_name: &str,
        isotope_symbol: &str,
        density: f64,
        z: u32,
        a: u32,
    ) -> MaterialResult<Arc<Material>> {
        if let Some(existing) = self.find(element_name) {
            log::debug!("material {element_name} already defined, reusing it");
            return Ok(existing);
        }
        if !(density > 0.0 && density.is_finite()) {
            return Err(MaterialError::isotope(
                element_name,
                format!("density must be positive: {density}"),
            ));
        }
        let isotope = Isotope::new(isotope_symbol, z, a).map_err(|err| match err {
            MaterialError::InvalidIsotopeSpec { message, .. } => {
                MaterialError::isotope(element_name, message)
            }
            other => other,
        })?;
        let element = Arc::new(Element::from_single_isotope(
            element_name,
            isotope_symbol,
            isotope,
        ));
        let material = MaterialBuilder::new(element_name, density)
            .add_element_by_atoms(element, 1)
            .build()?;
        Ok(self.insert(material))
    }

    /// Registers a custom material. First definition of a name wins; the
    /// returned `Arc` is whichever definition the catalog holds.
    pub fn register(&self, material: Material) -> Arc<Material> {
        self.insert(material)
    }

    fn insert(&self, material: Material) -> Arc<Material> {
        let mut materials = self.materials.write().unwrap_or_else(PoisonError::into_inner);
        let name = material.name().to_string();
        let stored = materials.entry(name).or_insert_with(|| {
            log::debug!("defined material {}", material.name());
            Arc::new(material)
        });
        Arc::clone(stored)
    }
}

#[cfg(test)]
mod tests;
