use crate::config::OutputFormat;
use buckingham_dimensional::{GroupList, Quantity};
use std::collections::BTreeMap;
use std::io::Write;

pub fn write_groups<W: Write>(
    out: &mut W,
    groups: &GroupList,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Plain => writeln!(out, "{groups}")?,
        OutputFormat::Latex => writeln!(out, "{}", groups.to_latex())?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(groups)?)?,
    }
    Ok(())
}

pub fn write_parameters<'a, W, I>(
    out: &mut W,
    entries: I,
    format: OutputFormat,
) -> anyhow::Result<()>
where
    W: Write,
    I: IntoIterator<Item = (&'a str, &'a Quantity)>,
{
    match format {
        OutputFormat::Plain => {
            for (name, quantity) in entries {
                writeln!(out, "{name:<24} {quantity}  [{}]", quantity.units().formula())?;
            }
        }
        OutputFormat::Latex => {
            for (name, quantity) in entries {
                writeln!(out, "{name}: {}", quantity.to_latex())?;
            }
        }
        OutputFormat::Json => {
            let map: BTreeMap<&str, &Quantity> = entries.into_iter().collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&map)?)?;
        }
    }
    Ok(())
}
