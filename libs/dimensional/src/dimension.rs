use crate::si::BaseDimension;
use std::collections::BTreeMap;
use std::fmt;

/// Integer exponents of the SI base units, one slot per [`BaseDimension`].
///
/// A zero slot means the unit is absent, so equality already ignores
/// "pruned" entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DimensionVector(pub [i32; DimensionVector::LEN]);

impl DimensionVector {
    pub const LEN: usize = 7;

    pub const ZERO: Self = Self([0; Self::LEN]);

    pub const fn of(dim: BaseDimension) -> Self {
        let mut exponents = [0; Self::LEN];
        exponents[dim.index()] = 1;
        Self(exponents)
    }

    pub fn get(&self, dim: BaseDimension) -> i32 {
        self.0[dim.index()]
    }

    pub fn set(&mut self, dim: BaseDimension, exponent: i32) {
        self.0[dim.index()] = exponent;
    }

    pub fn is_dimensionless(&self) -> bool {
        *self == Self::ZERO
    }

    /// Non-zero slots in table order.
    pub fn iter(&self) -> impl Iterator<Item = (BaseDimension, i32)> + '_ {
        BaseDimension::ALL
            .into_iter()
            .map(move |dim| (dim, self.get(dim)))
            .filter(|(_, exp)| *exp != 0)
    }

    /// Exponents keyed by base-unit symbol (`"kg" -> 1`).
    pub fn units(&self) -> BTreeMap<&'static str, i32> {
        self.iter().map(|(dim, exp)| (dim.unit(), exp)).collect()
    }

    pub fn dimensions(&self) -> BTreeMap<BaseDimension, i32> {
        self.iter().collect()
    }

    /// Slot-wise sum, `None` if any exponent overflows.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.zip_with(rhs, i32::checked_add)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.zip_with(rhs, i32::checked_sub)
    }

    /// The reciprocal's exponents.
    pub fn checked_neg(self) -> Option<Self> {
        self.checked_powi(-1)
    }

    /// Every exponent scaled by `n`, i.e. the vector of `self^n`.
    pub fn checked_powi(self, n: i32) -> Option<Self> {
        let mut out = self.0;
        for slot in out.iter_mut() {
            *slot = slot.checked_mul(n)?;
        }
        Some(Self(out))
    }

    fn zip_with(self, rhs: Self, op: fn(i32, i32) -> Option<i32>) -> Option<Self> {
        let mut out = self.0;
        for (slot, exp) in out.iter_mut().zip(rhs.0) {
            *slot = op(*slot, exp)?;
        }
        Some(Self(out))
    }

    /// Dimension formula in base-dimension symbols, e.g. `L^{-3} M`.
    pub fn formula(&self) -> String {
        if self.is_dimensionless() {
            return "1".to_string();
        }
        self.iter()
            .map(|(dim, exp)| match exp {
                1 => dim.symbol().to_string(),
                _ => format!("{}^{{{exp}}}", dim.symbol()),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Space-separated `unit^{exp}` tokens in table order, `1` when dimensionless.
impl fmt::Display for DimensionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        for (i, (dim, exp)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(dim.unit())?;
            if exp != 1 {
                write!(f, "^{{{exp}}}")?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DimensionVector {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(dim, exp)| (dim.unit(), exp)))
    }
}
