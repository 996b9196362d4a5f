use crate::config::OutputFormat;
use buckingham_dimensional::Rational64;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "buckingham",
    version,
    about = "Dimensional analysis and nondimensional group rendering"
)]
pub struct Cli {
    /// Settings file (defaults to ./buckingham.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List catalog parameters and their units
    Params {
        /// Only show parameters whose name contains this text
        filter: Option<String>,
    },
    /// Render one group from catalog parameters
    Group {
        /// Comma-separated catalog names, in display order
        #[arg(
            short = 'p',
            long = "params",
            value_name = "NAMES",
            value_delimiter = ',',
            required = true
        )]
        params: Vec<String>,

        /// Comma-separated exponents (`1`, `-2`, `1/2`, `0.5`)
        #[arg(
            short = 'e',
            long = "exponents",
            value_name = "EXPS",
            value_delimiter = ',',
            required = true,
            allow_hyphen_values = true,
            value_parser = parse_exponent
        )]
        exponents: Vec<Rational64>,
    },
    /// Render every group declared in a problem file
    Solve {
        /// Problem file (TOML, JSON or YAML)
        file: PathBuf,
    },
}

/// Parses an exponent written as an integer, a fraction or a decimal.
pub fn parse_exponent(s: &str) -> Result<Rational64, String> {
    let s = s.trim();
    if s.contains('.') {
        let value: f64 = s
            .parse()
            .map_err(|e| format!("invalid exponent '{s}': {e}"))?;
        return Rational64::approximate_float(value)
            .ok_or_else(|| format!("exponent '{s}' is out of range"));
    }
    let (numer, denom) = s.split_once('/').unwrap_or((s, "1"));
    let parse = |part: &str| {
        part.trim()
            .parse::<i64>()
            .map_err(|e| format!("invalid exponent '{s}': {e}"))
    };
    let (numer, denom) = (parse(numer)?, parse(denom)?);
    if denom == 0 {
        return Err(format!("invalid exponent '{s}': zero denominator"));
    }
    if numer == i64::MIN || denom == i64::MIN {
        return Err(format!("exponent '{s}' is out of range"));
    }
    Ok(Rational64::new(numer, denom))
}
