//! Embedded element and isotope data.
//!
//! Natural elements: (symbol, name, Z, molar mass g/mol).
//! Isotopes: (Z, A, atomic mass g/mol) from the 2016 atomic mass evaluation.

/// Natural-abundance elements available to composite materials.
pub(crate) const NATURAL_ELEMENTS: &[(&str, &str, u32, f64)] = &[
    ("H", "Hydrogen", 1, 1.00794),
    ("He", "Helium", 2, 4.002602),
    ("C", "Carbon", 6, 12.0107),
    ("N", "Nitrogen", 7, 14.0067),
    ("O", "Oxygen", 8, 15.9994),
    ("Al", "Aluminium", 13, 26.981538),
    ("Si", "Silicon", 14, 28.0855),
    ("Ar", "Argon", 18, 39.948),
    ("Ti", "Titanium", 22, 47.867),
    ("Cr", "Chromium", 24, 51.9961),
    ("Mn", "Manganese", 25, 54.938049),
    ("Fe", "Iron", 26, 55.845),
    ("Co", "Cobalt", 27, 58.9332),
    ("Ni", "Nickel", 28, 58.6934),
    ("Cu", "Copper", 29, 63.546),
    ("Nb", "Niobium", 41, 92.90638),
    ("Mo", "Molybdenum", 42, 95.94),
    ("Ag", "Silver", 47, 107.8682),
    ("Ta", "Tantalum", 73, 180.9479),
    ("W", "Tungsten", 74, 183.84),
];

/// Isotopes commonly enriched in production targets.
pub(crate) const ISOTOPE_MASSES: &[(u32, u32, f64)] = &[
    (1, 1, 1.007_825_032_24),
    (1, 2, 2.014_101_778_12),
    (2, 3, 3.016_029_322_65),
    (2, 4, 4.002_603_254_13),
    (6, 12, 12.0),
    (6, 13, 13.003_354_835_07),
    (7, 14, 14.003_074_004_43),
    (7, 15, 15.000_108_898_89),
    (8, 16, 15.994_914_619_57),
    (8, 17, 16.999_131_756_50),
    (8, 18, 17.999_159_612_86),
    (28, 58, 57.935_342_41),
    (28, 60, 59.930_785_88),
    (28, 64, 63.927_966_82),
    (30, 68, 67.924_844_55),
    (38, 86, 85.909_260_73),
    (42, 100, 99.907_471_8),
    (52, 124, 123.902_817_1),
    (54, 124, 123.905_892),
];

/// Largest atomic number accepted for isotope definitions.
pub(crate) const MAX_ATOMIC_NUMBER: u32 = 118;

/// Looks up a natural element by symbol.
pub(crate) fn natural_element(symbol: &str) -> Option<(&'static str, u32, f64)> {
    NATURAL_ELEMENTS
        .iter()
        .find(|(s, ..)| *s == symbol)
        .map(|&(_, name, z, molar_mass)| (name, z, molar_mass))
}

/// Tabulated atomic mass of isotope (Z, A), if known.
pub(crate) fn isotope_mass(z: u32, a: u32) -> Option<f64> {
    ISOTOPE_MASSES
        .iter()
        .find(|&&(iz, ia, _)| iz == z && ia == a)
        .map(|&(.., mass)| mass)
}
