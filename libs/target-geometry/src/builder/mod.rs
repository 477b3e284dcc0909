//! # Geometry Builder
//!
//! Owns the adjustable parameters and the current volume tree.
//!
//! ## Parameter Policy
//!
//! - Length and radius setters store the value without checking it; bounds
//!   are checked by [`GeometryBuilder::construct`], so the values can arrive
//!   in any order
//! - The material setter resolves the name right away and changes nothing
//!   on failure
//! - [`GeometryBuilder::construct`] is all-or-nothing: on failure the previous
//!   tree is kept and the working parameters stay as set, ready for a
//!   corrected retry
//! - Reports show the parameters of the last successful construction, never
//!   a pending or rejected set

use std::sync::Arc;

use config::constants::DesignConstants;
use target_materials::{Material, MaterialCatalog};

use crate::construct::build_volume_tree;
use crate::error::GeometryResult;
use crate::materials::{define_materials, DetectorMaterials};
use crate::parameters::TargetParameters;
use crate::report::ParameterReport;
use crate::volume::PhysicalVolume;

/// Parameters paired with their resolved target material.
#[derive(Debug, Clone)]
struct Applied {
    parameters: TargetParameters,
    material: Arc<Material>,
}

/// Builds and rebuilds the target assembly from its parameters.
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
/// use target_geometry::GeometryBuilder;
/// use target_materials::MaterialCatalog;
///
/// let mut builder = GeometryBuilder::new(Arc::new(MaterialCatalog::new())).unwrap();
/// builder.set_target_radius(6.0);
/// let world = builder.construct().unwrap();
/// assert_eq!(world.name, "World");
/// ```
#[derive(Debug)]
pub struct GeometryBuilder {
    constants: DesignConstants,
    catalog: Arc<MaterialCatalog>,
    current: Applied,
    committed: Applied,
    world: Option<PhysicalVolume>,
    modified: bool,
}

impl GeometryBuilder {
    /// Builder with the default design constants and parameters.
    pub fn new(catalog: Arc<MaterialCatalog>) -> GeometryResult<Self> {
        Self::with_constants(catalog, DesignConstants::default())
    }

    /// Builder with explicit design constants.
    ///
    /// # Errors
    ///
    /// Inconsistent constants, or a failure defining the default materials.
    pub fn with_constants(
        catalog: Arc<MaterialCatalog>,
        constants: DesignConstants,
    ) -> GeometryResult<Self> {
        let constants = constants.validated()?;
        define_materials(&catalog)?;
        let parameters = TargetParameters::default();
        let material = catalog.resolve(&parameters.material)?;
        let applied = Applied {
            parameters,
            material,
        };
        Ok(Self {
            constants,
            catalog,
            current: applied.clone(),
            committed: applied,
            world: None,
            modified: true,
        })
    }

    // =========================================================================
    // CONSTRUCTION
    // =========================================================================

    /// Rebuilds the whole tree from the current parameters and returns the
    /// world volume.
    ///
    /// # Errors
    ///
    /// [`crate::GeometryError::Overflow`] when the dimensions do not fit. The
    /// previous tree, if any, is kept; the working parameters are left as set
    /// so that fixing the offending value and retrying is enough.
    pub fn construct(&mut self) -> GeometryResult<&PhysicalVolume> {
        match self.build() {
            Ok(world) => {
                log::info!(
                    "constructed {} volumes: target {} x {} mm ({})",
                    world.volume_count(),
                    self.current.parameters.radius,
                    self.current.parameters.half_length,
                    self.current.material.name()
                );
                self.committed = self.current.clone();
                self.modified = false;
                Ok(&*self.world.insert(world))
            }
            Err(err) => {
                log::warn!("geometry rejected, keeping previous tree: {err}");
                self.modified = true;
                Err(err)
            }
        }
    }

    fn build(&self) -> GeometryResult<PhysicalVolume> {
        define_materials(&self.catalog)?;
        let materials =
            DetectorMaterials::resolve(&self.catalog, Arc::clone(&self.current.material))?;
        build_volume_tree(&self.current.parameters, &self.constants, &materials)
    }

    // =========================================================================
    // MUTATORS
    // =========================================================================

    /// Stores the target half-length (mm).
    ///
    /// Never fails: the value is checked at the next construction, which
    /// reports any violation.
    pub fn set_target_length(&mut self, half_length: f64) {
        self.current.parameters.half_length = half_length;
        self.modified = true;
    }

    /// Stores the target radius (mm).
    ///
    /// Never fails: the value is checked at the next construction, which
    /// reports any violation.
    pub fn set_target_radius(&mut self, radius: f64) {
        self.current.parameters.radius = radius;
        self.modified = true;
    }

    /// Resolves `name` through the catalog and makes it the target material.
    ///
    /// # Errors
    ///
    /// [`target_materials::MaterialError::UnknownMaterial`] (wrapped) when
    /// the name cannot be resolved; the current material is left unchanged.
    pub fn set_target_material(&mut self, name: &str) -> GeometryResult<()> {
        let material = self.catalog.resolve(name)?;
        self.current.parameters.material = material.name().to_string();
        self.current.material = material;
        self.modified = true;
        Ok(())
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Target half-length (mm).
    pub fn target_length(&self) -> f64 {
        self.current.parameters.half_length
    }

    /// Target radius (mm).
    pub fn target_radius(&self) -> f64 {
        self.current.parameters.radius
    }

    /// Current target material.
    pub fn target_material(&self) -> &Arc<Material> {
        &self.current.material
    }

    /// Axial half-extent of the world (mm).
    pub fn world_size_x(&self) -> f64 {
        self.constants.world_half_x
    }

    /// Transverse half-extent of the world (mm).
    pub fn world_size_yz(&self) -> f64 {
        self.constants.world_half_yz
    }

    /// Working parameters, including changes not yet constructed.
    pub fn parameters(&self) -> &TargetParameters {
        &self.current.parameters
    }

    /// Parameters of the last successful construction, or the defaults
    /// before the first one.
    pub fn committed_parameters(&self) -> &TargetParameters {
        &self.committed.parameters
    }

    /// Fixed design constants.
    pub fn constants(&self) -> &DesignConstants {
        &self.constants
    }

    /// Catalog the builder resolves materials through.
    pub fn catalog(&self) -> &Arc<MaterialCatalog> {
        &self.catalog
    }

    /// Last successfully constructed tree.
    pub fn world(&self) -> Option<&PhysicalVolume> {
        self.world.as_ref()
    }

    /// True when the working parameters have not been constructed yet.
    pub fn needs_rebuild(&self) -> bool {
        self.modified
    }

    // =========================================================================
    // DIAGNOSTICS
    // =========================================================================

    /// Snapshot of the committed parameters and the constants, for display.
    pub fn report(&self) -> ParameterReport<'_> {
        ParameterReport::new(
            &self.committed.parameters,
            &self.constants,
            &self.committed.material,
        )
    }

    /// Prints [`GeometryBuilder::report`] to stdout.
    pub fn print_parameters(&self) {
        println!("{}", self.report());
    }
}
