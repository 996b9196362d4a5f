use crate::dimension::DimensionVector;
use crate::error::{Error, Result};
use crate::parser::parse_unit_spec;
use crate::si::{self, BaseDimension};
use std::collections::BTreeMap;
use std::fmt;

/// A named physical quantity tagged with SI base-unit exponents.
///
/// Operations never mutate their operands; each returns a new quantity whose
/// symbol records the expression that produced it (`"V * t"`, `"L / T"`).
/// Exponents are `i32`; arithmetic that would leave that range fails with
/// [`Error::Overflow`] instead of wrapping.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Quantity {
    symbol: String,
    units: DimensionVector,
}

impl Quantity {
    /// Builds a quantity from raw `(unit, exponent)` pairs.
    ///
    /// Derived units are expanded into base units and merged additively with
    /// any base units already present. Entries that cancel to zero are
    /// dropped; anything left that is not an SI base or derived unit is
    /// reported as [`Error::UnknownUnit`].
    pub fn new<S, I, K>(symbol: S, raw_units: I) -> Result<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = (K, i32)>,
        K: AsRef<str>,
    {
        let symbol = symbol.into();
        let units = normalize_units(&symbol, raw_units)?;
        Ok(Self { symbol, units })
    }

    /// Builds a quantity from a textual unit specification such as
    /// `"kg m^-3"` or `"N/m"`.
    pub fn parse(symbol: impl Into<String>, units: &str) -> Result<Self> {
        let spec = parse_unit_spec(units)?;
        Self::new(symbol, spec.terms()?)
    }

    pub fn from_dimensions(symbol: impl Into<String>, units: DimensionVector) -> Self {
        Self {
            symbol: symbol.into(),
            units,
        }
    }

    pub fn dimensionless(symbol: impl Into<String>) -> Self {
        Self::from_dimensions(symbol, DimensionVector::ZERO)
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn set_symbol(&mut self, symbol: impl Into<String>) {
        self.symbol = symbol.into();
    }

    /// A copy of this quantity under a new label.
    pub fn with_symbol(&self, symbol: impl Into<String>) -> Self {
        Self::from_dimensions(symbol, self.units)
    }

    pub fn units(&self) -> DimensionVector {
        self.units
    }

    /// Exponent of a base unit, `0` when absent or not a base unit.
    pub fn exponent(&self, unit: &str) -> i32 {
        BaseDimension::from_unit(unit)
            .map(|dim| self.units.get(dim))
            .unwrap_or(0)
    }

    /// The unit map relabelled by base dimension.
    pub fn dimension(&self) -> BTreeMap<BaseDimension, i32> {
        self.units.dimensions()
    }

    pub fn is_dimensionless(&self) -> bool {
        self.units.is_dimensionless()
    }

    /// Product of two quantities. Fails only if an exponent overflows.
    pub fn multiply(&self, other: &Quantity) -> Result<Quantity> {
        let units = self.units.checked_add(other.units).ok_or(Error::Overflow)?;
        Ok(Quantity::from_dimensions(
            format!("{} * {}", self.symbol, other.symbol),
            units,
        ))
    }

    pub fn divide(&self, other: &Quantity) -> Result<Quantity> {
        let units = self.units.checked_sub(other.units).ok_or(Error::Overflow)?;
        Ok(Quantity::from_dimensions(
            format!("{} / {}", self.symbol, other.symbol),
            units,
        ))
    }

    pub fn reciprocal(&self) -> Result<Quantity> {
        let units = self.units.checked_neg().ok_or(Error::Overflow)?;
        Ok(Quantity::from_dimensions(format!("1 / {}", self.symbol), units))
    }

    /// Sum of two quantities; both must carry identical units.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Quantity) -> Result<Quantity> {
        self.ensure_same_units(other)?;
        Ok(Quantity::from_dimensions(
            format!("{} + {}", self.symbol, other.symbol),
            self.units,
        ))
    }

    pub fn subtract(&self, other: &Quantity) -> Result<Quantity> {
        self.ensure_same_units(other)?;
        Ok(Quantity::from_dimensions(
            format!("{} - {}", self.symbol, other.symbol),
            self.units,
        ))
    }

    fn ensure_same_units(&self, other: &Quantity) -> Result<()> {
        if self.units != other.units {
            return Err(Error::InconsistentUnits {
                lhs: self.units,
                rhs: other.units,
            });
        }
        Ok(())
    }

    /// `$$<symbol>\ \ (unit: ...)$$`, ready for a LaTeX renderer.
    pub fn to_latex(&self) -> String {
        format!("$${}\\ \\ (unit: {})$$", self.symbol, self.units)
    }
}

fn normalize_units<I, K>(symbol: &str, raw_units: I) -> Result<DimensionVector>
where
    I: IntoIterator<Item = (K, i32)>,
    K: AsRef<str>,
{
    let mut units = DimensionVector::ZERO;
    let mut unknown: BTreeMap<String, i32> = BTreeMap::new();

    for (unit, exponent) in raw_units {
        let unit = unit.as_ref();
        if let Some(dim) = BaseDimension::from_unit(unit) {
            let total = units.get(dim).checked_add(exponent).ok_or(Error::Overflow)?;
            units.set(dim, total);
        } else if let Some(decomposition) = si::derived_unit(unit) {
            tracing::debug!(symbol, unit, exponent, "expanding derived unit");
            units = decomposition
                .checked_powi(exponent)
                .and_then(|expanded| units.checked_add(expanded))
                .ok_or(Error::Overflow)?;
        } else {
            let total = unknown.entry(unit.to_string()).or_insert(0);
            *total = total.checked_add(exponent).ok_or(Error::Overflow)?;
        }
    }

    let unknown: Vec<String> = unknown
        .into_iter()
        .filter(|(_, exponent)| *exponent != 0)
        .map(|(unit, _)| unit)
        .collect();
    if !unknown.is_empty() {
        return Err(Error::UnknownUnit { units: unknown });
    }
    Ok(units)
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (unit: {})", self.symbol, self.units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_keys_accumulate() {
        let q = Quantity::new("x", [("m", 1), ("m", 2)]).unwrap();
        assert_eq!(q.exponent("m"), 3);
    }

    #[test]
    fn unknown_unit_cancelling_to_zero_is_dropped() {
        let q = Quantity::new("x", [("banana", 0), ("kg", 1)]).unwrap();
        assert_eq!(q.units(), DimensionVector::of(BaseDimension::Mass));
    }

    #[test]
    fn derived_and_base_entries_merge() {
        // N m^-1 s^2 = kg
        let q = Quantity::new("x", [("N", 1), ("m", -1), ("s", 2)]).unwrap();
        assert_eq!(q.units(), DimensionVector::of(BaseDimension::Mass));
    }

    #[test]
    fn unknown_exponents_that_overflow_are_rejected() {
        let err = Quantity::new("x", [("banana", i32::MAX), ("banana", 1)]).unwrap_err();
        assert_eq!(err, Error::Overflow);
    }
}
