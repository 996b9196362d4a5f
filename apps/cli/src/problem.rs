//! Problem files: the parameters of a physical setup and the groups to render
//! from them.
//!
//! ```toml
//! title = "Pipe flow"
//!
//! [[parameters]]
//! name = "density"
//! catalog = "density"
//!
//! [[parameters]]
//! name = "drop"
//! symbol = "Δp"
//! units = "Pa"
//!
//! [[groups]]
//! name = "Euler"
//! exponents = [-1, 1]
//! ```
//!
//! A parameter either references a catalog entry (optionally relabelled with
//! `symbol`) or declares its own `units` specification. Groups list one
//! exponent per parameter, in parameter order.

use crate::cli::parse_exponent;
use anyhow::{bail, Context};
use buckingham_dimensional::{GroupList, NondimensionalGroup, Quantity, Rational64};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Problem {
    #[serde(default)]
    pub title: Option<String>,
    pub parameters: Vec<ParameterSpec>,
    #[serde(default)]
    pub groups: Vec<GroupSpec>,
}

#[derive(Debug, Deserialize)]
pub struct ParameterSpec {
    pub name: String,
    #[serde(default)]
    pub catalog: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub units: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GroupSpec {
    #[serde(default)]
    pub name: Option<String>,
    pub exponents: Vec<ExponentSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ExponentSpec {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Problem {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let problem = config::Config::builder()
            .add_source(config::File::from(path))
            .build()?
            .try_deserialize()?;
        Ok(problem)
    }

    pub fn quantities(&self) -> anyhow::Result<Vec<Quantity>> {
        self.parameters.iter().map(ParameterSpec::to_quantity).collect()
    }

    pub fn groups(&self) -> anyhow::Result<GroupList> {
        let parameters = self.quantities()?;
        self.groups
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                let label = spec.label(i);
                let exponents = spec
                    .exponents
                    .iter()
                    .map(ExponentSpec::to_rational)
                    .collect::<anyhow::Result<Vec<_>>>()
                    .with_context(|| format!("group {label}"))?;
                let group = NondimensionalGroup::new(parameters.clone(), exponents)
                    .with_context(|| format!("group {label}"))?;
                if !group.is_dimensionless() {
                    tracing::warn!(group = %label, rendered = %group, "group is not dimensionless");
                }
                Ok(group)
            })
            .collect()
    }
}

impl ParameterSpec {
    pub fn to_quantity(&self) -> anyhow::Result<Quantity> {
        match (&self.catalog, &self.units) {
            (Some(_), Some(_)) => {
                bail!("parameter '{}' sets both 'catalog' and 'units'", self.name)
            }
            (Some(entry), None) => {
                let quantity = buckingham_catalog::get(entry).with_context(|| {
                    format!("parameter '{}': unknown catalog entry '{entry}'", self.name)
                })?;
                Ok(match &self.symbol {
                    Some(symbol) => quantity.with_symbol(symbol.as_str()),
                    None => quantity,
                })
            }
            (None, units) => {
                let symbol = self.symbol.as_deref().unwrap_or(&self.name);
                Quantity::parse(symbol, units.as_deref().unwrap_or("1"))
                    .with_context(|| format!("parameter '{}'", self.name))
            }
        }
    }
}

impl GroupSpec {
    fn label(&self, index: usize) -> String {
        match &self.name {
            Some(name) => format!("'{name}'"),
            None => format!("#{}", index + 1),
        }
    }
}

impl ExponentSpec {
    pub fn to_rational(&self) -> anyhow::Result<Rational64> {
        match self {
            ExponentSpec::Integer(n) => Ok(Rational64::from_integer(*n)),
            ExponentSpec::Float(f) => Rational64::approximate_float(*f)
                .with_context(|| format!("exponent {f} is out of range")),
            ExponentSpec::Text(text) => parse_exponent(text).map_err(anyhow::Error::msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    impl Problem {
        fn from_str(text: &str, format: FileFormat) -> anyhow::Result<Self> {
            let problem = config::Config::builder()
                .add_source(config::File::from_str(text, format))
                .build()?
                .try_deserialize()?;
            Ok(problem)
        }
    }

    const PIPE_FLOW: &str = r#"
title = "Pipe flow"

[[parameters]]
name = "density"
catalog = "density"

[[parameters]]
name = "velocity"
catalog = "velocity"

[[parameters]]
name = "diameter"
catalog = "length"
symbol = "D"

[[parameters]]
name = "viscosity"
symbol = "μ"
units = "Pa s"

[[groups]]
name = "Reynolds"
exponents = [1, 1, 1, -1]

[[groups]]
exponents = ["1/2", 0, 0, 0.0]
"#;

    #[test]
    fn renders_groups_in_order() {
        let problem = Problem::from_str(PIPE_FLOW, FileFormat::Toml).unwrap();
        assert_eq!(problem.title.as_deref(), Some("Pipe flow"));

        let groups = problem.groups().unwrap();
        assert_eq!(groups.to_string(), "ρ V D / μ, sqrt(ρ)");
        assert!(groups[0].is_dimensionless());
    }

    #[test]
    fn custom_parameters_default_symbol_to_name() {
        let problem = Problem::from_str(
            "[[parameters]]\nname = \"F\"\nunits = \"N\"\n",
            FileFormat::Toml,
        )
        .unwrap();
        let quantities = problem.quantities().unwrap();
        assert_eq!(quantities[0].symbol(), "F");
        assert_eq!(quantities[0].exponent("kg"), 1);
    }

    #[test]
    fn json_problem_files_work() {
        let problem = Problem::from_str(
            r#"{"parameters": [{"name": "g", "catalog": "gravity"}, {"name": "L", "units": "m"}],
                "groups": [{"exponents": [1, -1]}]}"#,
            FileFormat::Json,
        )
        .unwrap();
        assert_eq!(problem.groups().unwrap().to_string(), "g / L");
    }

    #[test]
    fn errors_name_the_offending_parameter() {
        let problem = Problem::from_str(
            "[[parameters]]\nname = \"x\"\nunits = \"banana\"\n",
            FileFormat::Toml,
        )
        .unwrap();
        let err = problem.quantities().unwrap_err();
        assert!(format!("{err:#}").contains("parameter 'x'"));
        assert!(format!("{err:#}").contains("banana"));

        let problem = Problem::from_str(
            "[[parameters]]\nname = \"x\"\ncatalog = \"nope\"\n",
            FileFormat::Toml,
        )
        .unwrap();
        assert!(problem.quantities().is_err());
    }

    #[test]
    fn exponent_count_must_match() {
        let problem = Problem::from_str(
            "[[parameters]]\nname = \"L\"\nunits = \"m\"\n[[groups]]\nexponents = [1, 2]\n",
            FileFormat::Toml,
        )
        .unwrap();
        let err = problem.groups().unwrap_err();
        assert!(format!("{err:#}").contains("#1"));
    }
}
