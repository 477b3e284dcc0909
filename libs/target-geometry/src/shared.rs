//! Mutex-guarded builder for callers on other threads.
//!
//! Every setter and every construction goes through one lock, so a
//! construction never observes a half-applied parameter set.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::builder::GeometryBuilder;
use crate::error::GeometryResult;
use crate::volume::PhysicalVolume;

/// Cloneable handle to one [`GeometryBuilder`].
#[derive(Debug, Clone)]
pub struct SharedGeometryBuilder {
    inner: Arc<Mutex<GeometryBuilder>>,
}

impl SharedGeometryBuilder {
    /// Wraps `builder`.
    pub fn new(builder: GeometryBuilder) -> Self {
        Self {
            inner: Arc::new(Mutex::new(builder)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, GeometryBuilder> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`GeometryBuilder::set_target_length`].
    pub fn set_target_length(&self, half_length: f64) {
        self.lock().set_target_length(half_length);
    }

    /// See [`GeometryBuilder::set_target_radius`].
    pub fn set_target_radius(&self, radius: f64) {
        self.lock().set_target_radius(radius);
    }

    /// See [`GeometryBuilder::set_target_material`].
    pub fn set_target_material(&self, name: &str) -> GeometryResult<()> {
        self.lock().set_target_material(name)
    }

    /// Constructs under the lock and returns a copy of the world volume.
    pub fn construct(&self) -> GeometryResult<PhysicalVolume> {
        self.lock().construct().cloned()
    }

    /// Runs `f` with exclusive access to the builder.
    pub fn with<R>(&self, f: impl FnOnce(&mut GeometryBuilder) -> R) -> R {
        f(&mut self.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use target_materials::MaterialCatalog;

    #[test]
    fn concurrent_setters_and_constructions_stay_consistent() {
        let builder = GeometryBuilder::new(Arc::new(MaterialCatalog::new())).expect("builder");
        let shared = SharedGeometryBuilder::new(builder);

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let radius = 2.0 + f64::from(i);
                    shared.with(|b| {
                        b.set_target_radius(radius);
                        b.set_target_length(1.0);
                        let world = b.construct().expect("valid parameters");
                        let target = world.find("Target").expect("target");
                        assert_eq!(target.logical.solid.radial_reach(), radius);
                    });
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("thread");
        }

        let world = shared.construct().expect("construct");
        assert_eq!(world.volume_count(), 7);
    }

    #[test]
    fn rejected_material_leaves_state_unchanged() {
        let builder = GeometryBuilder::new(Arc::new(MaterialCatalog::new())).expect("builder");
        let shared = SharedGeometryBuilder::new(builder);
        assert!(shared.set_target_material("unobtainium").is_err());
        let name = shared.with(|b| b.target_material().name().to_string());
        assert_eq!(name, "Water_18O");
    }
}
