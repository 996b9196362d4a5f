use crate::dimension::DimensionVector;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown units: {}", format_symbols(.units))]
    UnknownUnit { units: Vec<String> },

    #[error("inconsistent units: '{lhs}' vs '{rhs}'")]
    InconsistentUnits {
        lhs: DimensionVector,
        rhs: DimensionVector,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid unit specification at byte {pos}: {message}")]
    Syntax { pos: usize, message: &'static str },

    #[error("numeric overflow")]
    Overflow,
}

fn format_symbols(units: &[String]) -> String {
    units
        .iter()
        .map(|u| format!("'{u}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
