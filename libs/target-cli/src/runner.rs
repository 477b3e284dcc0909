//! Applies a parameter file to a geometry builder.

use std::sync::Arc;

use anyhow::{Context, Result};
use target_geometry::GeometryBuilder;
use target_materials::{MaterialCatalog, StandardMaterial};

use crate::config::JobConfig;

/// Defines the extra isotopes, applies the target parameters and constructs.
pub fn build(job: &JobConfig) -> Result<GeometryBuilder> {
    build_with(MaterialCatalog::global(), job)
}

fn build_with(catalog: Arc<MaterialCatalog>, job: &JobConfig) -> Result<GeometryBuilder> {
    for iso in &job.isotope {
        catalog
            .define_single_isotope_element(&iso.name, &iso.symbol, iso.density, iso.z, iso.a)
            .with_context(|| format!("defining isotope material '{}'", iso.name))?;
        log::info!("isotope material '{}' ({}) ready", iso.name, iso.symbol);
    }

    let mut builder = GeometryBuilder::new(catalog)?;
    builder.set_target_length(job.target.half_length);
    builder.set_target_radius(job.target.radius);
    builder
        .set_target_material(&job.target.material)
        .context("setting the target material")?;
    builder.construct().context("constructing the geometry")?;
    Ok(builder)
}

/// Prints every standard material with its density and state.
pub fn list_materials() -> Result<()> {
    let catalog = MaterialCatalog::new();
    println!("Standard materials:");
    println!();
    for standard in StandardMaterial::ALL {
        let material = catalog.get_or_define_standard(standard.name())?;
        println!(
            "  {:<16} {:>10.4e} g/cm3  {}",
            material.name(),
            material.density(),
            material.state()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IsotopeConfig;
    use target_geometry::TargetParameters;

    #[test]
    fn isotopes_are_defined_before_the_target_material() {
        let job = JobConfig {
            target: TargetParameters {
                material: "Oxygen16".to_string(),
                ..TargetParameters::default()
            },
            isotope: vec![IsotopeConfig {
                name: "Oxygen16".to_string(),
                symbol: "O16".to_string(),
                density: 1.429e-3,
                z: 8,
                a: 16,
            }],
        };
        let builder = build_with(Arc::new(MaterialCatalog::new()), &job).unwrap();
        assert_eq!(builder.target_material().name(), "Oxygen16");
        assert!(builder.world().is_some());
    }

    #[test]
    fn oversized_target_is_reported() {
        let job = JobConfig {
            target: TargetParameters {
                radius: 25.0,
                ..TargetParameters::default()
            },
            ..JobConfig::default()
        };
        let err = build_with(Arc::new(MaterialCatalog::new()), &job).unwrap_err();
        assert!(format!("{err:#}").contains("Geometry overflow"));
    }
}
