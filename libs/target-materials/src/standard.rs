//! # Standard Material Table
//!
//! The fixed set of materials the catalog can define on demand by name.
//! Densities in g/cm³, compositions by atom count or mass fraction.

use config::units::{
    G_PER_CM3, MG_PER_CM3, STP_PRESSURE, STP_TEMPERATURE, UNIVERSE_MEAN_DENSITY,
    UNIVERSE_MEAN_PRESSURE, UNIVERSE_MEAN_TEMPERATURE,
};

use crate::catalog::MaterialCatalog;
use crate::error::MaterialResult;
use crate::material::{Material, MaterialBuilder, MaterialState};

/// Materials available by name without prior definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardMaterial {
    /// Intergalactic vacuum, used as the world fill.
    Galactic,
    /// Dry air.
    Air,
    /// Natural water.
    Water,
    /// Helium cooling gas.
    Helium,
    /// Pure nickel.
    Nickel,
    /// Austenitic stainless steel.
    StainlessSteel,
    /// Havar, the cobalt alloy used for target window foils.
    Havar,
    /// Niobium chamber body.
    Niobium,
    /// Silver chamber body.
    Silver,
    /// Aluminium.
    Aluminium,
    /// Titanium.
    Titanium,
    /// Tantalum.
    Tantalum,
}

impl StandardMaterial {
    /// Every entry of the table, in listing order.
    pub const ALL: [StandardMaterial; 12] = [
        StandardMaterial::Galactic,
        StandardMaterial::Air,
        StandardMaterial::Water,
        StandardMaterial::Helium,
        StandardMaterial::Nickel,
        StandardMaterial::StainlessSteel,
        StandardMaterial::Havar,
        StandardMaterial::Niobium,
        StandardMaterial::Silver,
        StandardMaterial::Aluminium,
        StandardMaterial::Titanium,
        StandardMaterial::Tantalum,
    ];

    /// Catalog key.
    pub fn name(self) -> &'static str {
        match self {
            StandardMaterial::Galactic => "Galactic",
            StandardMaterial::Air => "Air",
            StandardMaterial::Water => "Water",
            StandardMaterial::Helium => "Helium",
            StandardMaterial::Nickel => "Nickel",
            StandardMaterial::StainlessSteel => "StainlessSteel",
            StandardMaterial::Havar => "Havar",
            StandardMaterial::Niobium => "Niobium",
            StandardMaterial::Silver => "Silver",
            StandardMaterial::Aluminium => "Aluminium",
            StandardMaterial::Titanium => "Titanium",
            StandardMaterial::Tantalum => "Tantalum",
        }
    }

    /// Table entry for `name`, if any. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    /// Builds the material, pulling natural elements from `catalog`.
    pub(crate) fn build(self, catalog: &MaterialCatalog) -> MaterialResult<Material> {
        let name = self.name();
        let el = |symbol: &str| catalog.element(symbol);
        match self {
            StandardMaterial::Galactic => MaterialBuilder::new(name, UNIVERSE_MEAN_DENSITY)
                .state(MaterialState::Gas)
                .conditions(UNIVERSE_MEAN_TEMPERATURE, UNIVERSE_MEAN_PRESSURE)
                .add_element_by_atoms(el("H")?, 1)
                .build(),
            StandardMaterial::Air => MaterialBuilder::new(name, 1.290 * MG_PER_CM3)
                .state(MaterialState::Gas)
                .conditions(STP_TEMPERATURE, STP_PRESSURE)
                .add_element_by_mass(el("N")?, 0.7)
                .add_element_by_mass(el("O")?, 0.3)
                .build(),
            StandardMaterial::Water => MaterialBuilder::new(name, 1.0 * G_PER_CM3)
                .state(MaterialState::Liquid)
                .add_element_by_atoms(el("H")?, 2)
                .add_element_by_atoms(el("O")?, 1)
                .build(),
            StandardMaterial::Helium => MaterialBuilder::new(name, 0.1786 * MG_PER_CM3)
                .state(MaterialState::Gas)
                .conditions(STP_TEMPERATURE, STP_PRESSURE)
                .add_element_by_atoms(el("He")?, 1)
                .build(),
            StandardMaterial::Nickel => pure(name, 8.908, catalog, "Ni"),
            StandardMaterial::StainlessSteel => MaterialBuilder::new(name, 8.0 * G_PER_CM3)
                .add_element_by_mass(el("Fe")?, 0.7462)
                .add_element_by_mass(el("Cr")?, 0.1690)
                .add_element_by_mass(el("Ni")?, 0.0848)
                .build(),
            StandardMaterial::Havar => MaterialBuilder::new(name, 8.3 * G_PER_CM3)
                .add_element_by_mass(el("Co")?, 0.420)
                .add_element_by_mass(el("Cr")?, 0.200)
                .add_element_by_mass(el("Fe")?, 0.182)
                .add_element_by_mass(el("Ni")?, 0.130)
                .add_element_by_mass(el("W")?, 0.028)
                .add_element_by_mass(el("Mo")?, 0.022)
                .add_element_by_mass(el("Mn")?, 0.016)
                .add_element_by_mass(el("C")?, 0.002)
                .build(),
            StandardMaterial::Niobium => pure(name, 8.57, catalog, "Nb"),
            StandardMaterial::Silver => pure(name, 10.49, catalog, "Ag"),
            StandardMaterial::Aluminium => pure(name, 2.699, catalog, "Al"),
            StandardMaterial::Titanium => pure(name, 4.506, catalog, "Ti"),
            StandardMaterial::Tantalum => pure(name, 16.65, catalog, "Ta"),
        }
    }
}

fn pure(
    name: &str,
    density: f64,
    catalog: &MaterialCatalog,
    symbol: &str,
) -> MaterialResult<Material> {
    MaterialBuilder::new(name, density * G_PER_CM3)
        .state(MaterialState::Solid)
        .add_element_by_atoms(catalog.element(symbol)?, 1)
        .build()
}
