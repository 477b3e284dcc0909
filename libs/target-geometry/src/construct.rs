//! Pure construction of the volume tree.
//!
//! [`build_volume_tree`] is a function of (parameters, constants, materials)
//! only. It validates, builds the full tree from scratch and checks it; it
//! never mutates anything outside its return value.

use std::sync::Arc;

use config::constants::{DesignConstants, EPSILON_TOLERANCE};
use glam::DVec3;
use target_materials::Material;

use crate::error::{GeometryError, GeometryResult};
use crate::layout::AxialLayout;
use crate::materials::DetectorMaterials;
use crate::parameters::TargetParameters;
use crate::solid::Solid;
use crate::volume::{LogicalVolume, PhysicalVolume, VisAttributes};

/// Name of the root volume.
pub const WORLD: &str = "World";
/// Name of the target chamber.
pub const CHAMBER: &str = "Chamber";
/// Name of the target.
pub const TARGET: &str = "Target";
/// Name of the helium cooling gap.
pub const HELIUM_GAP: &str = "HeliumGap";
/// Name of the nickel foil.
pub const NICKEL_FOIL: &str = "NickelFoil";
/// Name of the steel seal foil.
pub const STEEL_FOIL: &str = "SteelFoil";
/// Name of the beam cap.
pub const BEAM_CAP: &str = "BeamCap";

/// Rejects parameters that cannot produce a valid tree.
///
/// The target radius must lie strictly between the inner and outer radius and
/// the stacked half-lengths must fit in the chamber half-length.
pub fn validate_dimensions(
    params: &TargetParameters,
    constants: &DesignConstants,
) -> GeometryResult<()> {
    if !(params.half_length > 0.0 && params.half_length.is_finite()) {
        return Err(GeometryError::overflow(
            TARGET,
            format!("half-length must be positive: {}", params.half_length),
        ));
    }
    if !(params.radius > constants.inner_radius && params.radius < constants.outer_radius) {
        return Err(GeometryError::overflow(
            TARGET,
            format!(
                "radius {} must lie strictly between {} and {}",
                params.radius, constants.inner_radius, constants.outer_radius
            ),
        ));
    }
    let stack = params.half_length + constants.fixed_stack_half_length();
    if stack > constants.chamber_half_length + EPSILON_TOLERANCE {
        return Err(GeometryError::overflow(
            CHAMBER,
            format!(
                "stacked half-lengths {stack} exceed chamber half-length {}",
                constants.chamber_half_length
            ),
        ));
    }
    Ok(())
}

/// Builds the world → chamber → stack tree and checks it.
pub fn build_volume_tree(
    params: &TargetParameters,
    constants: &DesignConstants,
    materials: &DetectorMaterials,
) -> GeometryResult<PhysicalVolume> {
    validate_dimensions(params, constants)?;

    let world_solid = Solid::new_box(
        WORLD,
        constants.world_half_x,
        constants.world_half_yz,
        constants.world_half_yz,
    )?;
    let mut world = PhysicalVolume::new(
        LogicalVolume::new(
            WORLD,
            world_solid,
            Arc::clone(&materials.world),
            VisAttributes::invisible(),
        ),
        DVec3::ZERO,
    );

    let chamber_solid = Solid::new_tube(
        CHAMBER,
        constants.inner_radius,
        constants.outer_radius,
        constants.chamber_half_length,
    )?;
    let chamber = world.place(PhysicalVolume::new(
        LogicalVolume::new(
            CHAMBER,
            chamber_solid,
            Arc::clone(&materials.chamber),
            VisAttributes::new([0.6, 0.6, 0.6, 0.4]),
        ),
        DVec3::ZERO,
    ));

    let layout = AxialLayout::compute(params.half_length, constants);
    let stack: [(&str, f64, f64, &Arc<Material>, [f64; 4]); 5] = [
        (TARGET, params.half_length, layout.target, &materials.target, [0.0, 0.0, 1.0, 1.0]),
        (
            HELIUM_GAP,
            constants.helium_gap_half_length,
            layout.helium_gap,
            &materials.cooling,
            [0.0, 1.0, 1.0, 0.3],
        ),
        (
            NICKEL_FOIL,
            constants.nickel_foil_half_length,
            layout.nickel_foil,
            &materials.nickel_foil,
            [0.0, 0.8, 0.0, 1.0],
        ),
        (
            STEEL_FOIL,
            constants.steel_foil_half_length,
            layout.steel_foil,
            &materials.steel_foil,
            [0.8, 0.4, 0.0, 1.0],
        ),
        (
            BEAM_CAP,
            constants.beam_cap_half_length,
            layout.beam_cap,
            &materials.beam_cap,
            [0.8, 0.8, 0.8, 1.0],
        ),
    ];
    for (name, half_length, offset, material, colour) in stack {
        let solid = Solid::new_tube(name, constants.inner_radius, params.radius, half_length)?;
        chamber.place(PhysicalVolume::new(
            LogicalVolume::new(name, solid, Arc::clone(material), VisAttributes::new(colour)),
            DVec3::new(offset, 0.0, 0.0),
        ));
    }

    world.check_containment(EPSILON_TOLERANCE)?;
    world.check_overlaps(EPSILON_TOLERANCE)?;
    Ok(world)
}
