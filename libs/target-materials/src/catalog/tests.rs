//! Tests covering catalog lookup, definition and reuse-by-name.

use super::*;
use approx::assert_relative_eq;
use std::thread;

#[test]
fn standard_material_is_defined_once() {
    let catalog = MaterialCatalog::new();
    assert!(catalog.is_empty());
    let first = catalog.get_or_define_standard("Havar").expect("havar");
    let second = catalog.get_or_define_standard("Havar").expect("havar");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(catalog.len(), 1);
}

#[test]
fn unknown_standard_material_is_an_error() {
    let catalog = MaterialCatalog::new();
    assert_eq!(
        catalog.get_or_define_standard("unobtainium").unwrap_err(),
        MaterialError::UnknownMaterial {
            name: "unobtainium".to_string()
        }
    );
    assert!(catalog.is_empty());
}

#[test]
fn single_isotope_material_has_one_isotope() {
    let catalog = MaterialCatalog::new();
    let o18 = catalog
        .define_single_isotope_element("Oxygen18", "O18", 1.608e-3, 8, 18)
        .expect("oxygen-18");
    assert!(o18.is_single_isotope());
    assert_eq!(o18.name(), "Oxygen18");
    let element = o18.sole_element().expect("one element");
    assert_eq!(element.symbol, "O18");
    assert_relative_eq!(element.molar_mass, 17.999_159_612_86);
}

#[test]
fn first_isotope_definition_wins() {
    let catalog = MaterialCatalog::new();
    let first = catalog
        .define_single_isotope_element("Nickel64", "Ni64", 8.9, 28, 64)
        .expect("first");
    let second = catalog
        .define_single_isotope_element("Nickel64", "Ni58", 1.0, 28, 58)
        .expect("second returns the first");
    assert!(Arc::ptr_eq(&first, &second));
    assert_relative_eq!(second.density(), 8.9);
    assert_eq!(second.sole_element().map(|e| e.symbol.as_str()), Some("Ni64"));
}

#[test]
fn existing_name_is_returned_even_for_invalid_arguments() {
    let catalog = MaterialCatalog::new();
    let first = catalog
        .define_single_isotope_element("Zinc68", "Zn68", 7.14, 30, 68)
        .expect("first");
    let again = catalog
        .define_single_isotope_element("Zinc68", "Zn68", -1.0, 0, 0)
        .expect("reuse by name");
    assert!(Arc::ptr_eq(&first, &again));
}

#[test]
fn invalid_isotope_constants_register_nothing() {
    let catalog = MaterialCatalog::new();
    let cases = [
        (1.0, 0, 1),
        (1.0, 8, 7),
        (0.0, 8, 18),
        (-2.0, 8, 18),
        (f64::NAN, 8, 18),
    ];
    for (density, z, a) in cases {
        let err = catalog
            .define_single_isotope_element("Bad", "X", density, z, a)
            .unwrap_err();
        let MaterialError::InvalidIsotopeSpec { ref element, .. } = err else {
            panic!("density={density} z={z} a={a}: {err}");
        };
        assert_eq!(element, "Bad");
    }
    assert!(catalog.find("Bad").is_none());
}

#[test]
fn resolve_prefers_custom_definitions() {
    let catalog = MaterialCatalog::new();
    let custom = MaterialBuilder::new("Water", 1.11)
        .add_element_by_atoms(catalog.element("H").expect("H"), 2)
        .add_element_by_atoms(catalog.element("O").expect("O"), 1)
        .build()
        .expect("custom water");
    catalog.register(custom);
    let resolved = catalog.resolve("Water").expect("water");
    assert_relative_eq!(resolved.density(), 1.11);
}

#[test]
fn register_keeps_first_definition() {
    let catalog = MaterialCatalog::new();
    let h = catalog.element("H").expect("H");
    let a = MaterialBuilder::new("Gas", 1e-4)
        .add_element_by_atoms(Arc::clone(&h), 1)
        .build()
        .expect("a");
    let b = MaterialBuilder::new("Gas", 2e-4)
        .add_element_by_atoms(h, 2)
        .build()
        .expect("b");
    let first = catalog.register(a);
    let second = catalog.register(b);
    assert!(Arc::ptr_eq(&first, &second));
    assert_relative_eq!(second.density(), 1e-4);
}

#[test]
fn elements_are_cached() {
    let catalog = MaterialCatalog::new();
    let a = catalog.element("Ni").expect("Ni");
    let b = catalog.element("Ni").expect("Ni");
    assert!(Arc::ptr_eq(&a, &b));
    assert!(matches!(
        catalog.element("Zz"),
        Err(MaterialError::UnknownElement { .. })
    ));
}

#[test]
fn names_are_sorted() {
    let catalog = MaterialCatalog::new();
    catalog.resolve("Nickel").expect("nickel");
    catalog.resolve("Helium").expect("helium");
    catalog.resolve("Aluminium").expect("aluminium");
    assert_eq!(catalog.names(), vec!["Aluminium", "Helium", "Nickel"]);
}

#[test]
fn concurrent_definitions_share_one_material() {
    let catalog = Arc::new(MaterialCatalog::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                catalog
                    .define_single_isotope_element("Oxygen18", "O18", 1.0 + f64::from(i), 8, 18)
                    .expect("definition")
            })
        })
        .collect();
    let materials: Vec<Arc<Material>> = handles
        .into_iter()
        .map(|h| h.join().expect("thread"))
        .collect();
    for m in &materials[1..] {
        assert!(Arc::ptr_eq(&materials[0], m));
    }
    assert_eq!(catalog.len(), 1);
}

#[test]
fn global_catalog_is_shared() {
    let a = MaterialCatalog::global();
    let b = MaterialCatalog::global();
    assert!(Arc::ptr_eq(&a, &b));
}
