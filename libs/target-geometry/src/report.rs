//! Human-readable snapshots of the parameters and of the placed tree.

use std::fmt;

use config::constants::DesignConstants;
use target_materials::Material;

use crate::parameters::TargetParameters;
use crate::volume::PhysicalVolume;

/// Every adjustable parameter and fixed constant, plus the target material.
#[derive(Debug, Clone, Copy)]
pub struct ParameterReport<'a> {
    parameters: &'a TargetParameters,
    constants: &'a DesignConstants,
    material: &'a Material,
}

impl<'a> ParameterReport<'a> {
    /// Report over the given state.
    pub fn new(
        parameters: &'a TargetParameters,
        constants: &'a DesignConstants,
        material: &'a Material,
    ) -> Self {
        Self {
            parameters,
            constants,
            material,
        }
    }
}

impl fmt::Display for ParameterReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.parameters;
        let c = self.constants;
        writeln!(f)?;
        writeln!(
            f,
            " The target is a cylinder of {}: radius {} mm, half-length {} mm",
            p.material, p.radius, p.half_length
        )?;
        writeln!(f, "   inner radius            : {} mm", c.inner_radius)?;
        writeln!(f, "   outer radius            : {} mm", c.outer_radius)?;
        writeln!(f, "   chamber half-length     : {} mm", c.chamber_half_length)?;
        writeln!(f, "   helium gap half-length  : {} mm", c.helium_gap_half_length)?;
        writeln!(f, "   nickel foil half-length : {} mm", c.nickel_foil_half_length)?;
        writeln!(f, "   steel foil half-length  : {} mm", c.steel_foil_half_length)?;
        writeln!(f, "   beam cap half-length    : {} mm", c.beam_cap_half_length)?;
        writeln!(
            f,
            "   world half-extents      : {} mm (x) x {} mm (yz)",
            c.world_half_x, c.world_half_yz
        )?;
        writeln!(f)?;
        write!(f, "{}", self.material)
    }
}

/// Indented listing of a placed tree with offsets and masses.
#[derive(Debug, Clone, Copy)]
pub struct VolumeReport<'a>(pub &'a PhysicalVolume);

impl fmt::Display for VolumeReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, volume) in self.0.iter() {
            writeln!(
                f,
                "{:indent$}{:<12} {:<4} {:<12} x={:+.4} mm half-length = {:.4} mm mass = {:.4e} g",
                "",
                volume.name,
                volume.logical.solid.kind(),
                volume.material().name(),
                volume.axial_offset(),
                volume.half_length(),
                volume.logical.mass(),
                indent = depth * 2
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construct::build_volume_tree;
    use crate::materials::{define_materials, DetectorMaterials};
    use target_materials::MaterialCatalog;

    #[test]
    fn report_lists_parameters_and_constants() {
        let catalog = MaterialCatalog::new();
        let nickel = catalog.resolve("Nickel").expect("nickel");
        let parameters = TargetParameters {
            half_length: 1.25,
            radius: 4.5,
            material: "Nickel".to_string(),
        };
        let constants = DesignConstants::default();
        let text = ParameterReport::new(&parameters, &constants, &nickel).to_string();
        assert!(text.contains("radius 4.5 mm"));
        assert!(text.contains("half-length 1.25 mm"));
        assert!(text.contains("chamber half-length     : 5 mm"));
        assert!(text.contains("Nickel"));
    }

    #[test]
    fn volume_listing_indents_by_depth() {
        let catalog = MaterialCatalog::new();
        define_materials(&catalog).expect("materials");
        let target = catalog.resolve("Water_18O").expect("target");
        let materials = DetectorMaterials::resolve(&catalog, target).expect("resolve");
        let world = build_volume_tree(
            &TargetParameters::default(),
            &DesignConstants::default(),
            &materials,
        )
        .expect("default geometry");

        let text = VolumeReport(&world).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("World"));
        assert!(lines[0].contains("Galactic"));
        assert!(lines[1].starts_with("  Chamber"));
        assert!(lines[1].contains("Niobium"));
        assert!(lines[2].starts_with("    Target"));
        assert!(lines[2].contains("Water_18O"));
        assert!(lines[2].contains("x=+1.5250 mm"));
        assert!(lines[2].contains("half-length = 1.5000 mm"));
        assert!(lines[3].starts_with("    HeliumGap"));
        assert!(lines[3].contains("x=-0.9750 mm"));
        assert!(lines[5].starts_with("    SteelFoil"));
        assert!(lines[5].contains("Havar"));
        assert!(lines[6].starts_with("    BeamCap"));
        assert!(lines[6].contains("x=-2.5250 mm"));
    }
}
