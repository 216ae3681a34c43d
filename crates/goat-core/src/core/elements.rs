use phf::{Map, phf_map};

/// Static chemical data for one element.
///
/// Radii are the Pyykkö–Atsumi molecular covalent radii in Angstroms. Double and triple bond
/// radii are only listed for main-group elements that routinely form multiple bonds in
/// biomolecules; the bond-order heuristic never considers an order for which either partner
/// lacks a radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementEntry {
    pub symbol: &'static str,
    pub atomic_number: u8,
    /// Standard atomic weight in unified atomic mass units.
    pub atomic_mass: f64,
    /// Single-bond covalent radius in Angstroms.
    pub covalent_radius: f64,
    pub double_bond_radius: Option<f64>,
    pub triple_bond_radius: Option<f64>,
}

const fn entry(symbol: &'static str, atomic_number: u8, atomic_mass: f64, r1: f64) -> ElementEntry {
    ElementEntry {
        symbol,
        atomic_number,
        atomic_mass,
        covalent_radius: r1,
        double_bond_radius: None,
        triple_bond_radius: None,
    }
}

const fn multi(
    symbol: &'static str,
    atomic_number: u8,
    atomic_mass: f64,
    r1: f64,
    r2: f64,
    r3: f64,
) -> ElementEntry {
    ElementEntry {
        symbol,
        atomic_number,
        atomic_mass,
        covalent_radius: r1,
        double_bond_radius: Some(r2),
        triple_bond_radius: Some(r3),
    }
}

static ELEMENTS: Map<&'static str, ElementEntry> = phf_map! {
    "H" => entry("H", 1, 1.008, 0.32),
    "He" => entry("He", 2, 4.0026, 0.46),
    "Li" => entry("Li", 3, 6.94, 1.33),
    "Be" => entry("Be", 4, 9.0122, 1.02),
    "B" => multi("B", 5, 10.81, 0.85, 0.78, 0.73),
    "C" => multi("C", 6, 12.011, 0.75, 0.67, 0.60),
    "N" => multi("N", 7, 14.007, 0.71, 0.60, 0.54),
    "O" => multi("O", 8, 15.999, 0.63, 0.57, 0.53),
    "F" => entry("F", 9, 18.998, 0.64),
    "Ne" => entry("Ne", 10, 20.180, 0.67),
    "Na" => entry("Na", 11, 22.990, 1.55),
    "Mg" => entry("Mg", 12, 24.305, 1.39),
    "Al" => entry("Al", 13, 26.982, 1.26),
    "Si" => multi("Si", 14, 28.085, 1.16, 1.07, 1.02),
    "P" => multi("P", 15, 30.974, 1.11, 1.02, 0.94),
    "S" => multi("S", 16, 32.06, 1.03, 0.94, 0.95),
    "Cl" => entry("Cl", 17, 35.45, 0.99),
    "Ar" => entry("Ar", 18, 39.948, 0.96),
    "K" => entry("K", 19, 39.098, 1.96),
    "Ca" => entry("Ca", 20, 40.078, 1.71),
    "Sc" => entry("Sc", 21, 44.956, 1.48),
    "Ti" => entry("Ti", 22, 47.867, 1.36),
    "V" => entry("V", 23, 50.942, 1.34),
    "Cr" => entry("Cr", 24, 51.996, 1.22),
    "Mn" => entry("Mn", 25, 54.938, 1.19),
    "Fe" => entry("Fe", 26, 55.845, 1.16),
    "Co" => entry("Co", 27, 58.933, 1.11),
    "Ni" => entry("Ni", 28, 58.693, 1.10),
    "Cu" => entry("Cu", 29, 63.546, 1.12),
    "Zn" => entry("Zn", 30, 65.38, 1.18),
    "Ga" => entry("Ga", 31, 69.723, 1.24),
    "Ge" => entry("Ge", 32, 72.630, 1.21),
    "As" => entry("As", 33, 74.922, 1.21),
    "Se" => entry("Se", 34, 78.971, 1.16),
    "Br" => entry("Br", 35, 79.904, 1.14),
    "Kr" => entry("Kr", 36, 83.798, 1.17),
    "Rb" => entry("Rb", 37, 85.468, 2.10),
    "Sr" => entry("Sr", 38, 87.62, 1.85),
    "Y" => entry("Y", 39, 88.906, 1.63),
    "Zr" => entry("Zr", 40, 91.224, 1.54),
    "Nb" => entry("Nb", 41, 92.906, 1.47),
    "Mo" => entry("Mo", 42, 95.95, 1.38),
    "Tc" => entry("Tc", 43, 97.907, 1.28),
    "Ru" => entry("Ru", 44, 101.07, 1.25),
    "Rh" => entry("Rh", 45, 102.91, 1.25),
    "Pd" => entry("Pd", 46, 106.42, 1.20),
    "Ag" => entry("Ag", 47, 107.87, 1.28),
    "Cd" => entry("Cd", 48, 112.41, 1.36),
    "In" => entry("In", 49, 114.82, 1.42),
    "Sn" => entry("Sn", 50, 118.71, 1.40),
    "Sb" => entry("Sb", 51, 121.76, 1.40),
    "Te" => entry("Te", 52, 127.6, 1.36),
    "I" => entry("I", 53, 126.904, 1.33),
    "Xe" => entry("Xe", 54, 131.29, 1.31),
    "Cs" => entry("Cs", 55, 132.91, 2.32),
    "Ba" => entry("Ba", 56, 137.33, 1.96),
    "La" => entry("La", 57, 138.91, 1.80),
    "Ce" => entry("Ce", 58, 140.12, 1.63),
    "Pr" => entry("Pr", 59, 140.91, 1.76),
    "Nd" => entry("Nd", 60, 144.24, 1.74),
    "Pm" => entry("Pm", 61, 144.91, 1.73),
    "Sm" => entry("Sm", 62, 150.36, 1.72),
    "Eu" => entry("Eu", 63, 151.96, 1.68),
    "Gd" => entry("Gd", 64, 157.25, 1.69),
    "Tb" => entry("Tb", 65, 158.93, 1.68),
    "Dy" => entry("Dy", 66, 162.5, 1.67),
    "Ho" => entry("Ho", 67, 164.93, 1.66),
    "Er" => entry("Er", 68, 167.26, 1.65),
    "Tm" => entry("Tm", 69, 168.93, 1.64),
    "Yb" => entry("Yb", 70, 173.05, 1.70),
    "Lu" => entry("Lu", 71, 174.97, 1.62),
    "Hf" => entry("Hf", 72, 178.49, 1.52),
    "Ta" => entry("Ta", 73, 180.95, 1.46),
    "W" => entry("W", 74, 183.84, 1.37),
    "Re" => entry("Re", 75, 186.21, 1.31),
    "Os" => entry("Os", 76, 190.23, 1.29),
    "Ir" => entry("Ir", 77, 192.22, 1.22),
    "Pt" => entry("Pt", 78, 195.08, 1.23),
    "Au" => entry("Au", 79, 196.97, 1.24),
    "Hg" => entry("Hg", 80, 200.59, 1.33),
    "Tl" => entry("Tl", 81, 204.38, 1.44),
    "Pb" => entry("Pb", 82, 207.2, 1.44),
    "Bi" => entry("Bi", 83, 208.98, 1.51),
    "Po" => entry("Po", 84, 208.98, 1.45),
    "At" => entry("At", 85, 209.99, 1.47),
    "Rn" => entry("Rn", 86, 222.02, 1.42),
};

static SYMBOLS_BY_NUMBER: Map<u8, &'static str> = phf_map! {
    1u8 => "H", 2u8 => "He", 3u8 => "Li", 4u8 => "Be", 5u8 => "B", 6u8 => "C", 7u8 => "N",
    8u8 => "O", 9u8 => "F", 10u8 => "Ne", 11u8 => "Na", 12u8 => "Mg", 13u8 => "Al",
    14u8 => "Si", 15u8 => "P", 16u8 => "S", 17u8 => "Cl", 18u8 => "Ar", 19u8 => "K",
    20u8 => "Ca", 21u8 => "Sc", 22u8 => "Ti", 23u8 => "V", 24u8 => "Cr", 25u8 => "Mn",
    26u8 => "Fe", 27u8 => "Co", 28u8 => "Ni", 29u8 => "Cu", 30u8 => "Zn", 31u8 => "Ga",
    32u8 => "Ge", 33u8 => "As", 34u8 => "Se", 35u8 => "Br", 36u8 => "Kr", 37u8 => "Rb",
    38u8 => "Sr", 39u8 => "Y", 40u8 => "Zr", 41u8 => "Nb", 42u8 => "Mo", 43u8 => "Tc",
    44u8 => "Ru", 45u8 => "Rh", 46u8 => "Pd", 47u8 => "Ag", 48u8 => "Cd", 49u8 => "In",
    50u8 => "Sn", 51u8 => "Sb", 52u8 => "Te", 53u8 => "I", 54u8 => "Xe", 55u8 => "Cs",
    56u8 => "Ba", 57u8 => "La", 58u8 => "Ce", 59u8 => "Pr", 60u8 => "Nd", 61u8 => "Pm",
    62u8 => "Sm", 63u8 => "Eu", 64u8 => "Gd", 65u8 => "Tb", 66u8 => "Dy", 67u8 => "Ho",
    68u8 => "Er", 69u8 => "Tm", 70u8 => "Yb", 71u8 => "Lu", 72u8 => "Hf", 73u8 => "Ta",
    74u8 => "W", 75u8 => "Re", 76u8 => "Os", 77u8 => "Ir", 78u8 => "Pt", 79u8 => "Au",
    80u8 => "Hg", 81u8 => "Tl", 82u8 => "Pb", 83u8 => "Bi", 84u8 => "Po", 85u8 => "At",
    86u8 => "Rn",
};

/// Looks up an element by its (case-sensitive, trimmed) symbol.
pub fn lookup(symbol: &str) -> Option<&'static ElementEntry> {
    ELEMENTS.get(symbol.trim())
}

pub fn lookup_by_atomic_number(atomic_number: u8) -> Option<&'static ElementEntry> {
    SYMBOLS_BY_NUMBER
        .get(&atomic_number)
        .and_then(|symbol| ELEMENTS.get(symbol))
}

/// Normalizes the capitalization of an element symbol (`"CL"` and `"cl"` become `"Cl"`).
pub fn normalize_symbol(raw: &str) -> String {
    let mut chars = raw.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
