use super::*;
use approx::assert_relative_eq;

fn element(symbol: &str) -> Arc<Element> {
    Arc::new(Element::natural(symbol).expect("tabulated element"))
}

#[test]
fn water_mass_fractions_follow_formula() {
    let water = MaterialBuilder::new("Water", 1.0)
        .state(MaterialState::Liquid)
        .add_element_by_atoms(element("H"), 2)
        .add_element_by_atoms(element("O"), 1)
        .build()
        .expect("water");

    let h = &water.components()[0];
    let expected = 2.0 * 1.00794 / (2.0 * 1.00794 + 15.9994);
    assert_relative_eq!(h.mass_fraction, expected, epsilon = 1e-12);
    assert_relative_eq!(water.mean_molar_mass(), 18.01528 / 3.0, epsilon = 1e-6);
    assert_eq!(water.state(), MaterialState::Liquid);
}

#[test]
fn mass_fractions_must_sum_to_one() {
    let err = MaterialBuilder::new("Broken", 8.0)
        .add_element_by_mass(element("Fe"), 0.5)
        .add_element_by_mass(element("Cr"), 0.2)
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("sum to"));
}

#[test]
fn mixing_atoms_and_mass_is_rejected() {
    let err = MaterialBuilder::new("Mixed", 1.0)
        .add_element_by_atoms(element("H"), 2)
        .add_element_by_mass(element("O"), 0.5)
        .build()
        .unwrap_err();
    assert!(matches!(err, MaterialError::InvalidComposition { .. }));
}

#[test]
fn non_positive_density_is_rejected() {
    for density in [0.0, -1.0, f64::NAN] {
        let result = MaterialBuilder::new("Void", density)
            .add_element_by_atoms(element("H"), 1)
            .build();
        assert!(result.is_err(), "density {density} accepted");
    }
}

#[test]
fn empty_material_is_rejected() {
    assert!(MaterialBuilder::new("Nothing", 1.0).build().is_err());
}

#[test]
fn nested_material_merges_duplicate_elements() {
    let steel = MaterialBuilder::new("Steel", 8.0)
        .add_element_by_mass(element("Fe"), 0.8)
        .add_element_by_mass(element("Ni"), 0.2)
        .build()
        .expect("steel");
    let alloy = MaterialBuilder::new("Alloy", 8.2)
        .add_material_by_mass(&steel, 0.5)
        .add_element_by_mass(element("Ni"), 0.5)
        .build()
        .expect("alloy");

    assert_eq!(alloy.components().len(), 2);
    let ni = alloy
        .components()
        .iter()
        .find(|c| c.element.symbol == "Ni")
        .expect("nickel");
    assert_relative_eq!(ni.mass_fraction, 0.6, epsilon = 1e-12);
}

#[test]
fn state_inferred_from_density() {
    let gas = MaterialBuilder::new("Thin", 1.0e-4)
        .add_element_by_atoms(element("He"), 1)
        .build()
        .expect("gas");
    assert_eq!(gas.state(), MaterialState::Gas);

    let solid = MaterialBuilder::new("Dense", 8.9)
        .add_element_by_atoms(element("Ni"), 1)
        .build()
        .expect("solid");
    assert_eq!(solid.state(), MaterialState::Solid);
}

#[test]
fn nickel_atom_density() {
    let ni = MaterialBuilder::new("Ni", 8.908)
        .add_element_by_atoms(element("Ni"), 1)
        .build()
        .expect("nickel");
    // 8.908 g/cm3 / 58.6934 g/mol * N_A
    assert_relative_eq!(ni.total_atom_density(), 9.1399e22, max_relative = 1e-4);
    assert_relative_eq!(
        ni.electron_density(),
        28.0 * ni.total_atom_density(),
        max_relative = 1e-12
    );
    assert!(ni.sole_element().is_some());
    assert!(!ni.is_single_isotope());
}

#[test]
fn display_lists_components() {
    let water = MaterialBuilder::new("Water", 1.0)
        .add_element_by_atoms(element("H"), 2)
        .add_element_by_atoms(element("O"), 1)
        .build()
        .expect("water");
    let text = water.to_string();
    assert!(text.contains("Water"));
    assert!(text.contains("Hydrogen"));
    assert!(text.contains("Oxygen"));
}
