//! # Volumes
//!
//! A [`LogicalVolume`] binds a [`Solid`] to a material and display
//! attributes. A [`PhysicalVolume`] places a logical volume inside its parent
//! at a translation and owns its daughters by value, so the world volume owns
//! the whole tree. Checks walk the tree top-down and hand each daughter its
//! parent by reference; there are no back-pointers.

use std::sync::Arc;

use config::units::MM3_PER_CM3;
use glam::DVec3;
use target_materials::Material;

use crate::error::{GeometryError, GeometryResult};
use crate::solid::Solid;

// =============================================================================
// VISUALIZATION
// =============================================================================

/// Display attributes attached to a logical volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisAttributes {
    /// RGBA colour, components in `[0, 1]`.
    pub colour: [f64; 4],
    /// Whether the volume is drawn.
    pub visible: bool,
}

impl VisAttributes {
    /// Visible volume of the given colour.
    pub fn new(colour: [f64; 4]) -> Self {
        Self {
            colour,
            visible: true,
        }
    }

    /// Hidden volume, used for the world.
    pub fn invisible() -> Self {
        Self {
            colour: [1.0, 1.0, 1.0, 0.0],
            visible: false,
        }
    }
}

// =============================================================================
// LOGICAL VOLUME
// =============================================================================

/// A solid filled with a material.
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalVolume {
    /// Volume name.
    pub name: String,
    /// Shape.
    pub solid: Solid,
    /// Fill material, shared with the catalog.
    pub material: Arc<Material>,
    /// Display attributes.
    pub vis: VisAttributes,
}

impl LogicalVolume {
    /// Creates a logical volume.
    pub fn new(name: &str, solid: Solid, material: Arc<Material>, vis: VisAttributes) -> Self {
        Self {
            name: name.to_string(),
            solid,
            material,
            vis,
        }
    }

    /// Mass of the solid alone in grams, daughters not subtracted.
    pub fn mass(&self) -> f64 {
        self.solid.volume() / MM3_PER_CM3 * self.material.density()
    }
}

// =============================================================================
// PHYSICAL VOLUME
// =============================================================================

/// A logical volume placed inside its parent.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalVolume {
    /// Placement name.
    pub name: String,
    /// Placed logical volume.
    pub logical: LogicalVolume,
    /// Translation relative to the parent's centre.
    pub translation: DVec3,
    daughters: Vec<PhysicalVolume>,
}

impl PhysicalVolume {
    /// Places `logical` at `translation`, named after the logical volume.
    pub fn new(logical: LogicalVolume, translation: DVec3) -> Self {
        Self {
            name: logical.name.clone(),
            logical,
            translation,
            daughters: Vec::new(),
        }
    }

    /// Adds a daughter and returns it for further nesting.
    pub fn place(&mut self, daughter: PhysicalVolume) -> &mut PhysicalVolume {
        let index = self.daughters.len();
        self.daughters.push(daughter);
        &mut self.daughters[index]
    }

    /// Placed daughters, in placement order.
    pub fn daughters(&self) -> &[PhysicalVolume] {
        &self.daughters
    }

    /// Offset along the beam axis relative to the parent.
    pub fn axial_offset(&self) -> f64 {
        self.translation.x
    }

    /// Half-length of the placed solid along the beam axis.
    pub fn half_length(&self) -> f64 {
        self.logical.solid.axial_half_length()
    }

    /// Fill material.
    pub fn material(&self) -> &Arc<Material> {
        &self.logical.material
    }

    /// First volume named `name` in depth-first order, `self` included.
    pub fn find(&self, name: &str) -> Option<&PhysicalVolume> {
        self.iter().map(|(_, v)| v).find(|v| v.name == name)
    }

    /// Depth-first traversal yielding `(depth, volume)`, root at depth 0.
    pub fn iter(&self) -> DepthFirst<'_> {
        DepthFirst { stack: vec![(0, self)] }
    }

    /// Number of volumes in the tree, `self` included.
    pub fn volume_count(&self) -> usize {
        self.iter().count()
    }

    /// Verifies that every daughter lies inside its parent.
    ///
    /// Axially: `|offset| + half-length <= parent half-length`. Radially the
    /// daughter must stay within the parent's cross-section and outside its
    /// bore.
    pub fn check_containment(&self, tolerance: f64) -> GeometryResult<()> {
        let parent = &self.logical.solid;
        for daughter in &self.daughters {
            let solid = &daughter.logical.solid;
            let axial = daughter.translation.x.abs() + solid.axial_half_length();
            if axial > parent.axial_half_length() + tolerance {
                return Err(GeometryError::overflow(
                    &daughter.name,
                    format!(
                        "axial extent {axial} exceeds half-length {} of '{}'",
                        parent.axial_half_length(),
                        self.name
                    ),
                ));
            }
            let off_axis = daughter.translation.y.hypot(daughter.translation.z);
            let radial = off_axis + solid.radial_reach();
            if radial > parent.radial_capacity() + tolerance {
                return Err(GeometryError::overflow(
                    &daughter.name,
                    format!(
                        "radial extent {radial} exceeds radius {} of '{}'",
                        parent.radial_capacity(),
                        self.name
                    ),
                ));
            }
            if off_axis + tolerance < parent.radial_inner()
                && solid.radial_inner() + tolerance < parent.radial_inner()
            {
                return Err(GeometryError::overflow(
                    &daughter.name,
                    format!(
                        "reaches into the bore of radius {} of '{}'",
                        parent.radial_inner(),
                        self.name
                    ),
                ));
            }
            daughter.check_containment(tolerance)?;
        }
        Ok(())
    }

    /// Verifies that no two sibling volumes share axial space.
    pub fn check_overlaps(&self, tolerance: f64) -> GeometryResult<()> {
        for (i, a) in self.daughters.iter().enumerate() {
            let (a_lo, a_hi) = a.axial_interval();
            for b in &self.daughters[i + 1..] {
                let (b_lo, b_hi) = b.axial_interval();
                if a_hi > b_lo + tolerance && b_hi > a_lo + tolerance {
                    return Err(GeometryError::overflow(
                        &b.name,
                        format!(
                            "overlaps '{}' along the axis: [{b_lo}, {b_hi}] vs [{a_lo}, {a_hi}]",
                            a.name
                        ),
                    ));
                }
            }
            a.check_overlaps(tolerance)?;
        }
        Ok(())
    }

    fn axial_interval(&self) -> (f64, f64) {
        let x = self.translation.x;
        let h = self.half_length();
        (x - h, x + h)
    }
}

/// Iterator returned by [`PhysicalVolume::iter`].
#[derive(Debug)]
pub struct DepthFirst<'a> {
    stack: Vec<(usize, &'a PhysicalVolume)>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = (usize, &'a PhysicalVolume);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, volume) = self.stack.pop()?;
        self.stack
            .extend(volume.daughters.iter().rev().map(|d| (depth + 1, d)));
        Some((depth, volume))
    }
}
