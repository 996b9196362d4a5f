//! Common physical parameters and their SI units.
//!
//! Every entry is an ordinary [`Quantity`] built through the public
//! constructor; lookups return clones so callers are free to relabel them.
//!
//! ```
//! let rho = buckingham_catalog::get("density").unwrap();
//! assert_eq!(rho.symbol(), "ρ");
//! ```

use buckingham_dimensional::Quantity;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

type UnitTable = &'static [(&'static str, i32)];

/// `(name, symbol, units)`.
const PARAMETERS: &[(&str, &str, UnitTable)] = &[
    // SI base parameters
    ("mass", "M", &[("kg", 1)]),
    ("length", "L", &[("m", 1)]),
    ("temperature", "Θ", &[("K", 1)]),
    ("time", "T", &[("s", 1)]),
    ("electric_current", "I", &[("A", 1)]),
    ("luminous_intensity", "J", &[("cd", 1)]),
    ("amount_substance", "N", &[("mol", 1)]),
    // Mechanics and fluids
    ("velocity", "V", &[("m", 1), ("s", -1)]),
    ("acceleration", "a", &[("m", 1), ("s", -2)]),
    ("density", "ρ", &[("kg", 1), ("m", -3)]),
    ("volume", "Vol", &[("m", 3)]),
    ("area", "A", &[("m", 2)]),
    ("head", "h", &[("m", 1)]),
    ("angle", "θ", &[]),
    ("surface_tension", "σ", &[("N", 1), ("m", -1)]),
    ("stress", "σ_s", &[("N", 1), ("m", -2)]),
    ("viscosity", "μ", &[("kg", 1), ("m", -1), ("s", -1)]),
    ("kinematic_viscosity", "ν", &[("m", 2), ("s", -1)]),
    ("rotation_rate", "Ω", &[("s", -1)]),
    ("discharge", "Q", &[("m", 3), ("s", -1)]),
    ("bulk_modulus", "K", &[("kg", 1), ("m", -1), ("s", -2)]),
    ("compressibility", "ξ", &[("kg", -1), ("m", 1), ("s", 2)]),
    // Heat and porous media
    ("thermal_expansivity", "α", &[("K", -1)]),
    ("thermal_conductivity", "k", &[("kg", 1), ("m", 1), ("s", -3), ("K", -1)]),
    ("hydraulic_permeability", "κ", &[("m", 2)]),
    ("hydraulic_conductivity", "K", &[("m", 1), ("s", -1)]),
    ("thermal_diffusivity", "κ", &[("m", 2), ("s", -1)]),
    ("specific_heat", "c", &[("m", 2), ("s", -2), ("K", -1)]),
    ("debye_temperature", "Θ_D", &[("K", 1)]),
    ("einstein_temperature", "Θ_E", &[("K", 1)]),
    // Waves and quantum
    ("decay_time", "τ", &[("s", 1)]),
    ("speed_of_light", "c", &[("m", 1), ("s", -1)]),
    ("wavelength", "λ", &[("m", 1)]),
    ("frequency", "ν", &[("s", -1)]),
    ("planck", "h", &[("m", 2), ("kg", 1), ("s", -1)]),
    ("boltzmann", "k_B", &[("m", 2), ("kg", 1), ("K", -1), ("s", -2)]),
    // Electromagnetism
    ("charge", "q", &[("A", 1), ("s", 1)]),
    ("charge_density", "ρ_c", &[("C", 1), ("m", -3)]),
    ("electrical_conductivity", "C_e", &[("S", 1), ("m", -1)]),
    ("electrical_resistivity", "R", &[("Ω", 1), ("m", 1)]),
    ("voltage", "V", &[("kg", 1), ("m", 2), ("s", -3), ("A", -1)]),
    ("magnetic_permeability", "μ", &[("kg", 1), ("m", 1), ("s", -2), ("A", -2)]),
    ("magnetic_diffusivity", "η_m", &[("m", 2), ("s", -1)]),
];

/// `(name, source, symbol)`: relabelled copies of another entry.
const ALIASES: &[(&str, &str, &str)] = &[
    ("gravity_acceleration", "acceleration", "g"),
    ("gravity", "acceleration", "g"),
    ("heat_capacity", "specific_heat", "c"),
    ("pressure", "stress", "P"),
    ("current", "electric_current", "I"),
];

static CATALOG: Lazy<BTreeMap<&'static str, Quantity>> = Lazy::new(build_catalog);

fn build_catalog() -> BTreeMap<&'static str, Quantity> {
    let mut map = BTreeMap::new();
    for (name, symbol, units) in PARAMETERS {
        let quantity = Quantity::new(*symbol, units.iter().copied())
            .unwrap_or_else(|e| panic!("invalid catalog parameter '{name}': {e}"));
        map.insert(*name, quantity);
    }
    for (name, source, symbol) in ALIASES {
        let quantity = map
            .get(source)
            .map(|q: &Quantity| q.with_symbol(*symbol))
            .unwrap_or_else(|| panic!("catalog alias '{name}' refers to unknown '{source}'"));
        map.insert(*name, quantity);
    }
    tracing::debug!(entries = map.len(), "parameter catalog loaded");
    map
}

/// A copy of the named parameter.
pub fn get(name: &str) -> Option<Quantity> {
    CATALOG.get(name).cloned()
}

pub fn contains(name: &str) -> bool {
    CATALOG.contains_key(name)
}

/// Parameter names in alphabetical order.
pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOG.keys().copied()
}

pub fn iter() -> impl Iterator<Item = (&'static str, &'static Quantity)> {
    CATALOG.iter().map(|(name, q)| (*name, q))
}

pub fn len() -> usize {
    CATALOG.len()
}
