use crate::error::{Error, Result};

/// A unit specification as written, e.g. `kg m^-3` or `N/m`.
///
/// Symbols are kept verbatim; they are only checked against the SI tables
/// when the specification is turned into a [`crate::Quantity`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitSpec {
    pub numerator: Vec<UnitTerm>,
    pub denominator: Vec<UnitTerm>,
}

impl UnitSpec {
    pub fn one() -> Self {
        Self {
            numerator: vec![],
            denominator: vec![],
        }
    }

    pub fn is_one(&self) -> bool {
        self.numerator.is_empty() && self.denominator.is_empty()
    }

    /// Signed `(symbol, exponent)` pairs; denominator terms are negated.
    pub fn terms(&self) -> Result<Vec<(&str, i32)>> {
        let num = self
            .numerator
            .iter()
            .map(|t| Ok((t.symbol.as_str(), t.exponent)));
        let den = self.denominator.iter().map(|t| {
            t.exponent
                .checked_neg()
                .map(|exponent| (t.symbol.as_str(), exponent))
                .ok_or(Error::Overflow)
        });
        num.chain(den).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitTerm {
    /// A unit symbol (e.g. `kg`, `Pa`, `Ω`, `\ohm`).
    pub symbol: String,
    pub exponent: i32,
}
