use crate::error::{Error, Result};
use crate::quantity::Quantity;
use crate::si::BaseDimension;
use num_rational::Rational64;
use num_traits::{CheckedAdd, CheckedMul, One, Signed, Zero};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;

/// A product of powers of an ordered list of quantities.
///
/// The rendered forms are computed once, when the group is built. Positive
/// powers go to the numerator and negative powers to the denominator, so the
/// Reynolds number reads `ρ V L / μ` instead of `ρ V L μ^{-1}`.
#[derive(Clone, Debug, PartialEq)]
pub struct NondimensionalGroup {
    parameters: Vec<Quantity>,
    exponents: Vec<Rational64>,
    dimension: BTreeMap<BaseDimension, Rational64>,
    rendered: String,
    latex: String,
}

impl NondimensionalGroup {
    pub fn new(parameters: Vec<Quantity>, exponents: Vec<Rational64>) -> Result<Self> {
        if parameters.len() != exponents.len() {
            return Err(Error::InvalidArgument(format!(
                "{} parameters but {} exponents",
                parameters.len(),
                exponents.len()
            )));
        }
        // |i64::MIN| is not representable, so its magnitude cannot be rendered.
        if exponents.iter().any(|e| *e.numer() == i64::MIN) {
            return Err(Error::Overflow);
        }
        let dimension = combine(&parameters, &exponents)?;
        let rendered = render(&parameters, &exponents, Notation::Plain);
        let latex = render(&parameters, &exponents, Notation::Latex);
        tracing::trace!(%rendered, "rendered nondimensional group");
        Ok(Self {
            parameters,
            exponents,
            dimension,
            rendered,
            latex,
        })
    }

    pub fn from_integers(parameters: Vec<Quantity>, exponents: &[i64]) -> Result<Self> {
        Self::new(
            parameters,
            exponents.iter().copied().map(Rational64::from_integer).collect(),
        )
    }

    pub fn parameters(&self) -> &[Quantity] {
        &self.parameters
    }

    pub fn exponents(&self) -> &[Rational64] {
        &self.exponents
    }

    /// Plain-text form, e.g. `ρ V L / μ` or `sqrt(g) / L`.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    /// LaTeX form, e.g. `\frac{ρ V L}{μ}`.
    pub fn latex(&self) -> &str {
        &self.latex
    }

    /// Σ exponentᵢ · dim(parameterᵢ), non-zero slots only.
    pub fn combined_dimension(&self) -> BTreeMap<BaseDimension, Rational64> {
        self.dimension.clone()
    }

    pub fn is_dimensionless(&self) -> bool {
        self.dimension.is_empty()
    }
}

impl fmt::Display for NondimensionalGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

fn combine(
    parameters: &[Quantity],
    exponents: &[Rational64],
) -> Result<BTreeMap<BaseDimension, Rational64>> {
    let mut out = BTreeMap::new();
    for dim in BaseDimension::ALL {
        let mut total = Rational64::zero();
        for (parameter, exponent) in parameters.iter().zip(exponents) {
            let slot = Rational64::from_integer(i64::from(parameter.units().get(dim)));
            total = exponent
                .checked_mul(&slot)
                .and_then(|term| total.checked_add(&term))
                .ok_or(Error::Overflow)?;
        }
        if !total.is_zero() {
            out.insert(dim, total);
        }
    }
    Ok(out)
}

#[derive(Clone, Copy)]
enum Notation {
    Plain,
    Latex,
}

impl Notation {
    fn sqrt(self, symbol: &str) -> String {
        match self {
            Notation::Plain => format!("sqrt({symbol})"),
            Notation::Latex => format!("\\sqrt{{{symbol}}}"),
        }
    }

    fn fraction(self, numerator: &str, denominator: &str) -> String {
        match self {
            Notation::Plain => format!("{numerator} / {denominator}"),
            Notation::Latex => format!("\\frac{{{numerator}}}{{{denominator}}}"),
        }
    }
}

fn render(parameters: &[Quantity], exponents: &[Rational64], notation: Notation) -> String {
    let mut numerator = Vec::new();
    let mut denominator = Vec::new();

    for (parameter, exponent) in parameters.iter().zip(exponents) {
        if exponent.is_zero() {
            continue;
        }
        let token = power_token(parameter.symbol(), exponent, notation);
        if exponent.is_positive() {
            numerator.push(token);
        } else {
            denominator.push(token);
        }
    }

    let numerator = numerator.join(" ");
    let denominator = denominator.join(" ");
    match (numerator.is_empty(), denominator.is_empty()) {
        (true, true) => "1".to_string(),
        (true, false) => notation.fraction("1", &denominator),
        (false, true) => numerator,
        (false, false) => notation.fraction(&numerator, &denominator),
    }
}

/// The sign is carried by placement, so only the magnitude is written.
fn power_token(symbol: &str, exponent: &Rational64, notation: Notation) -> String {
    let magnitude = exponent.abs();
    if magnitude.is_one() {
        symbol.to_string()
    } else if magnitude.is_integer() {
        format!("{symbol}^{{{}}}", magnitude.numer())
    } else if magnitude == Rational64::new(1, 2) {
        notation.sqrt(symbol)
    } else {
        format!("{symbol}^{{{}/{}}}", magnitude.numer(), magnitude.denom())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for NondimensionalGroup {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let exponents: Vec<String> = self.exponents.iter().map(|e| e.to_string()).collect();
        let mut state = serializer.serialize_struct("NondimensionalGroup", 5)?;
        state.serialize_field("parameters", &self.parameters)?;
        state.serialize_field("exponents", &exponents)?;
        state.serialize_field("rendered", &self.rendered)?;
        state.serialize_field("latex", &self.latex)?;
        state.serialize_field("dimensionless", &self.is_dimensionless())?;
        state.end()
    }
}

/// An ordered list of groups, rendered comma-separated.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GroupList(Vec<NondimensionalGroup>);

impl GroupList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The joined plain renderings wrapped in `$$` display delimiters.
    pub fn to_display_string(&self) -> String {
        format!("$${self}$$")
    }

    /// The joined LaTeX renderings wrapped in `$$` display delimiters.
    pub fn to_latex(&self) -> String {
        let body = self
            .0
            .iter()
            .map(NondimensionalGroup::latex)
            .collect::<Vec<_>>()
            .join(", ");
        format!("$${body}$$")
    }
}

impl Deref for GroupList {
    type Target = [NondimensionalGroup];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<NondimensionalGroup>> for GroupList {
    fn from(groups: Vec<NondimensionalGroup>) -> Self {
        Self(groups)
    }
}

impl FromIterator<NondimensionalGroup> for GroupList {
    fn from_iter<T: IntoIterator<Item = NondimensionalGroup>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for GroupList {
    type Item = NondimensionalGroup;
    type IntoIter = std::vec::IntoIter<NondimensionalGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for GroupList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(group.rendered())?;
        }
        Ok(())
    }
}
