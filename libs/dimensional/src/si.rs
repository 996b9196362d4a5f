//! The SI base dimensions and the derived units that expand into them.

use crate::dimension::DimensionVector;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// One of the seven SI base dimensions.
///
/// Declaration order is the canonical display order for unit maps and the
/// slot order of [`DimensionVector`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BaseDimension {
    Length,
    Mass,
    Time,
    Temperature,
    ElectricCurrent,
    AmountOfSubstance,
    LuminousIntensity,
}

impl BaseDimension {
    pub const ALL: [BaseDimension; DimensionVector::LEN] = [
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Time,
        BaseDimension::Temperature,
        BaseDimension::ElectricCurrent,
        BaseDimension::AmountOfSubstance,
        BaseDimension::LuminousIntensity,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Human-readable name, e.g. `"Electric Current"`.
    pub const fn name(self) -> &'static str {
        match self {
            BaseDimension::Length => "Length",
            BaseDimension::Mass => "Mass",
            BaseDimension::Time => "Time",
            BaseDimension::Temperature => "Temperature",
            BaseDimension::ElectricCurrent => "Electric Current",
            BaseDimension::AmountOfSubstance => "Amount of Substance",
            BaseDimension::LuminousIntensity => "Luminous Intensity",
        }
    }

    /// Dimension symbol used in dimensional formulas (`L`, `M`, `T`, `Θ`, ...).
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Length => "L",
            BaseDimension::Mass => "M",
            BaseDimension::Time => "T",
            BaseDimension::Temperature => "Θ",
            BaseDimension::ElectricCurrent => "I",
            BaseDimension::AmountOfSubstance => "N",
            BaseDimension::LuminousIntensity => "J",
        }
    }

    /// Canonical SI base-unit symbol.
    pub const fn unit(self) -> &'static str {
        match self {
            BaseDimension::Length => "m",
            BaseDimension::Mass => "kg",
            BaseDimension::Time => "s",
            BaseDimension::Temperature => "K",
            BaseDimension::ElectricCurrent => "A",
            BaseDimension::AmountOfSubstance => "mol",
            BaseDimension::LuminousIntensity => "cd",
        }
    }

    /// Looks up a base dimension by its SI unit symbol. Case-sensitive.
    pub fn from_unit(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.unit() == symbol)
    }
}

impl fmt::Display for BaseDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Slot order: m, kg, s, K, A, mol, cd.
const DERIVED_UNIT_TABLE: &[(&str, [i32; DimensionVector::LEN])] = &[
    ("N", [1, 1, -2, 0, 0, 0, 0]),
    ("Pa", [-1, 1, -2, 0, 0, 0, 0]),
    ("J", [2, 1, -2, 0, 0, 0, 0]),
    ("W", [2, 1, -3, 0, 0, 0, 0]),
    ("C", [0, 0, 1, 0, 1, 0, 0]),
    ("V", [2, 1, -3, 0, -1, 0, 0]),
    ("Ω", [2, 1, -3, 0, -2, 0, 0]),
    ("S", [-2, -1, 3, 0, 2, 0, 0]),
    ("F", [-2, -1, 4, 0, 2, 0, 0]),
    ("T", [0, 1, -2, 0, -1, 0, 0]),
    ("Wb", [2, 1, -2, 0, -1, 0, 0]),
    ("H", [2, 1, -2, 0, -2, 0, 0]),
];

/// Alternative spellings accepted for table entries.
const DERIVED_UNIT_ALIASES: &[(&str, &str)] = &[("\\ohm", "Ω"), ("ohm", "Ω")];

static DERIVED_UNITS: Lazy<HashMap<&'static str, DimensionVector>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, DimensionVector> = DERIVED_UNIT_TABLE
        .iter()
        .map(|(symbol, exponents)| (*symbol, DimensionVector(*exponents)))
        .collect();
    for (alias, target) in DERIVED_UNIT_ALIASES {
        if let Some(dim) = map.get(target).copied() {
            map.insert(*alias, dim);
        }
    }
    map
});

/// Base-unit decomposition of a derived unit symbol, if it is one.
pub fn derived_unit(symbol: &str) -> Option<DimensionVector> {
    DERIVED_UNITS.get(symbol).copied()
}

/// The canonical derived units (aliases excluded), in table order.
pub fn derived_units() -> impl Iterator<Item = (&'static str, DimensionVector)> {
    DERIVED_UNIT_TABLE
        .iter()
        .map(|(symbol, exponents)| (*symbol, DimensionVector(*exponents)))
}
