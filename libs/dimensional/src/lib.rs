//! Symbolic dimensional analysis over the SI base units.
//!
//! A [`Quantity`] is a symbol tagged with integer exponents of the seven SI
//! base units. Derived units (`N`, `Pa`, `Ω`, ...) are expanded into base units
//! when a quantity is constructed, so two quantities compare equal exactly when
//! their base-unit exponents match.
//!
//! A [`NondimensionalGroup`] raises an ordered list of quantities to rational
//! powers and renders the product the way dimensionless numbers are usually
//! written: positive powers above the fraction bar, negative powers below it.
//!
//! ```
//! use buckingham_dimensional::{NondimensionalGroup, Quantity};
//!
//! let rho = Quantity::new("ρ", [("kg", 1), ("m", -3)])?;
//! let v = Quantity::new("V", [("m", 1), ("s", -1)])?;
//! let l = Quantity::new("L", [("m", 1)])?;
//! let mu = Quantity::new("μ", [("Pa", 1), ("s", 1)])?;
//!
//! let re = NondimensionalGroup::from_integers(vec![rho, v, l, mu], &[1, 1, 1, -1])?;
//! assert_eq!(re.rendered(), "ρ V L / μ");
//! assert!(re.is_dimensionless());
//! # Ok::<(), buckingham_dimensional::Error>(())
//! ```

#![forbid(unsafe_code)]

mod ast;
mod dimension;
mod error;
mod group;
mod parser;
mod quantity;
pub mod si;

pub use ast::{UnitSpec, UnitTerm};
pub use dimension::DimensionVector;
pub use error::{Error, Result};
pub use group::{GroupList, NondimensionalGroup};
pub use parser::parse_unit_spec;
pub use quantity::Quantity;
pub use si::BaseDimension;

pub use num_rational::Rational64;
