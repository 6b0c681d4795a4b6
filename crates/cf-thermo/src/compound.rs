//! Chemical compound definitions.

/// Compounds carried by the catalog.
///
/// Discriminants index [`crate::catalog::compound_catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompoundType {
    CH4 = 0,
    O2,
    H2O,
    CO2,
    CO,
    H2,
    OH,
    O,
    H,
    He,
    N2,
}

impl CompoundType {
    pub const COUNT: usize = 11;

    pub const ALL: [CompoundType; Self::COUNT] = [
        CompoundType::CH4,
        CompoundType::O2,
        CompoundType::H2O,
        CompoundType::CO2,
        CompoundType::CO,
        CompoundType::H2,
        CompoundType::OH,
        CompoundType::O,
        CompoundType::H,
        CompoundType::He,
        CompoundType::N2,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for CompoundType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(crate::catalog::compound(*self).name)
    }
}

/// Atomic elements tracked for mass-balance bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    C = 0,
    H,
    O,
    N,
    He,
}

impl Element {
    pub const COUNT: usize = 5;

    pub const ALL: [Element; Self::COUNT] =
        [Element::C, Element::H, Element::O, Element::N, Element::He];
}

/// Number of atoms per element, summed over a mixture [mol].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementTotals([f64; Element::COUNT]);

impl ElementTotals {
    pub fn add_compound(&mut self, compound: &ChemicalCompound, moles: f64) {
        for &(element, count) in compound.atoms {
            self.0[element as usize] += f64::from(count) * moles;
        }
    }
}

impl std::ops::Index<Element> for ElementTotals {
    type Output = f64;

    fn index(&self, element: Element) -> &f64 {
        &self.0[element as usize]
    }
}

/// Static properties of a compound: identity, molar mass, atoms, and the two
/// 7-term NASA polynomial coefficient sets.
///
/// Coefficients follow the usual layout `a1..a7`:
/// - `cp/R = a1 + a2·T + a3·T² + a4·T³ + a5·T⁴`
/// - `h/RT = a1 + a2·T/2 + a3·T²/3 + a4·T³/4 + a5·T⁴/5 + a6/T`
/// - `s°/R = a1·ln T + a2·T + a3·T²/2 + a4·T³/3 + a5·T⁴/4 + a7`
#[derive(Debug, Clone, PartialEq)]
pub struct ChemicalCompound {
    pub kind: CompoundType,
    pub name: &'static str,
    /// Molar mass [g/mol]
    pub molar_mass: f64,
    pub atoms: &'static [(Element, u8)],
    /// Coefficients valid below [`ChemicalCompound::T_SWITCH`]
    pub low: [f64; 7],
    /// Coefficients valid at and above [`ChemicalCompound::T_SWITCH`]
    pub high: [f64; 7],
}

impl ChemicalCompound {
    /// Temperature [K] separating the low and high coefficient ranges.
    pub const T_SWITCH: f64 = 1000.0;

    /// Coefficient set applicable at temperature `t` [K].
    #[inline]
    pub fn coefficients(&self, t: f64) -> &[f64; 7] {
        if t < Self::T_SWITCH {
            &self.low
        } else {
            &self.high
        }
    }

    /// Number of atoms of `element` in one molecule.
    pub fn atom_count(&self, element: Element) -> u8 {
        self.atoms
            .iter()
            .find(|(e, _)| *e == element)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}
