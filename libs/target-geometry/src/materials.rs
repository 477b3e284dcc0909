//! Materials used by the assembly.
//!
//! [`define_materials`] registers the enriched materials the catalog cannot
//! provide from its standard table; [`DetectorMaterials::resolve`] then
//! collects one material per volume. Both reuse existing definitions.

use std::sync::Arc;

use config::constants::{
    BEAM_CAP_MATERIAL, CHAMBER_MATERIAL, COOLING_MATERIAL, DEFAULT_TARGET_MATERIAL,
    NICKEL_FOIL_MATERIAL, STEEL_FOIL_MATERIAL, WORLD_MATERIAL,
};
use config::units::{G_PER_CM3, MG_PER_CM3};
use target_materials::{Material, MaterialBuilder, MaterialCatalog, MaterialState};

use crate::error::GeometryResult;

/// Oxygen-18 gas.
pub const OXYGEN_18: &str = "Oxygen18";

/// Density of oxygen-18 gas at STP.
const OXYGEN_18_DENSITY: f64 = 1.608 * MG_PER_CM3;

/// Density of H2(18O) at room temperature.
const ENRICHED_WATER_DENSITY: f64 = 1.1106 * G_PER_CM3;

/// Registers oxygen-18 and the enriched water target material.
pub fn define_materials(catalog: &MaterialCatalog) -> GeometryResult<()> {
    let o18 = catalog.define_single_isotope_element(OXYGEN_18, "O18", OXYGEN_18_DENSITY, 8, 18)?;
    if catalog.find(DEFAULT_TARGET_MATERIAL).is_some() {
        return Ok(());
    }
    let mut water = MaterialBuilder::new(DEFAULT_TARGET_MATERIAL, ENRICHED_WATER_DENSITY)
        .state(MaterialState::Liquid)
        .add_element_by_atoms(catalog.element("H")?, 2);
    for component in o18.components() {
        water = water.add_element_by_atoms(Arc::clone(&component.element), 1);
    }
    catalog.register(water.build()?);
    Ok(())
}

/// One material per volume of the tree.
#[derive(Debug, Clone)]
pub struct DetectorMaterials {
    /// World fill.
    pub world: Arc<Material>,
    /// Chamber body.
    pub chamber: Arc<Material>,
    /// Current target material.
    pub target: Arc<Material>,
    /// Cooling gas.
    pub cooling: Arc<Material>,
    /// Nickel foil.
    pub nickel_foil: Arc<Material>,
    /// Steel seal foil.
    pub steel_foil: Arc<Material>,
    /// Beam cap.
    pub beam_cap: Arc<Material>,
}

impl DetectorMaterials {
    /// Resolves the designated materials, with `target` as the target fill.
    pub fn resolve(catalog: &MaterialCatalog, target: Arc<Material>) -> GeometryResult<Self> {
        Ok(Self {
            world: catalog.get_or_define_standard(WORLD_MATERIAL)?,
            chamber: catalog.get_or_define_standard(CHAMBER_MATERIAL)?,
            target,
            cooling: catalog.get_or_define_standard(COOLING_MATERIAL)?,
            nickel_foil: catalog.get_or_define_standard(NICKEL_FOIL_MATERIAL)?,
            steel_foil: catalog.get_or_define_standard(STEEL_FOIL_MATERIAL)?,
            beam_cap: catalog.get_or_define_standard(BEAM_CAP_MATERIAL)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enriched_water_is_defined_once() {
        let catalog = MaterialCatalog::new();
        define_materials(&catalog).expect("first definition");
        let first = catalog.find(DEFAULT_TARGET_MATERIAL).expect("water");
        define_materials(&catalog).expect("second definition");
        let second = catalog.find(DEFAULT_TARGET_MATERIAL).expect("water");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn enriched_water_carries_oxygen_18() {
        let catalog = MaterialCatalog::new();
        define_materials(&catalog).expect("materials");
        let water = catalog.find(DEFAULT_TARGET_MATERIAL).expect("water");
        let oxygen = water
            .components()
            .iter()
            .find(|c| c.element.z == 8)
            .expect("oxygen");
        assert!(oxygen.element.is_single_isotope());
        assert_eq!(oxygen.element.symbol, "O18");
    }

    #[test]
    fn designated_materials_resolve() {
        let catalog = MaterialCatalog::new();
        define_materials(&catalog).expect("materials");
        let target = catalog.resolve(DEFAULT_TARGET_MATERIAL).expect("target");
        let materials = DetectorMaterials::resolve(&catalog, target).expect("resolve");
        assert_eq!(materials.steel_foil.name(), "Havar");
        assert_eq!(materials.world.name(), "Galactic");
    }
}
