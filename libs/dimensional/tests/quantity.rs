use buckingham_dimensional::{si, BaseDimension, DimensionVector, Error, Quantity};

fn q(symbol: &str, units: &[(&str, i32)]) -> Quantity {
    Quantity::new(symbol, units.iter().copied()).unwrap()
}

#[test]
fn newton_expands_to_base_units() {
    let derived = q("F_n", &[("N", 1)]);
    let base = q("F_n", &[("kg", 1), ("m", 1), ("s", -2)]);
    assert_eq!(derived, base);
}

#[test]
fn every_derived_unit_round_trips() {
    for (symbol, decomposition) in si::derived_units() {
        let derived = Quantity::new("x", [(symbol, 1)]).unwrap();
        let base = Quantity::new("x", decomposition.units()).unwrap();
        assert_eq!(derived.units(), base.units(), "{symbol}");
        assert_eq!(derived.units(), decomposition, "{symbol}");
    }
}

#[test]
fn derived_unit_exponent_scales_decomposition() {
    let inverse_square = q("x", &[("Pa", -2)]);
    assert_eq!(inverse_square.exponent("kg"), -2);
    assert_eq!(inverse_square.exponent("m"), 2);
    assert_eq!(inverse_square.exponent("s"), 4);
}

#[test]
fn multiple_derived_units_merge_additively() {
    // V / Ω = A
    let current = q("I", &[("V", 1), ("Ω", -1)]);
    assert_eq!(current.units(), DimensionVector::of(BaseDimension::ElectricCurrent));

    let backslash = q("R", &[("\\ohm", 1)]);
    assert_eq!(backslash.units(), q("R", &[("Ω", 1)]).units());
}

#[test]
fn unknown_unit_is_rejected_by_name() {
    let err = Quantity::new("x", [("banana", 1)]).unwrap_err();
    assert_eq!(
        err,
        Error::UnknownUnit {
            units: vec!["banana".to_string()]
        }
    );
    assert!(err.to_string().contains("banana"));
}

#[test]
fn unknown_units_are_all_reported() {
    let err = Quantity::new("x", [("kg", 1), ("ft", 1), ("lb", -1)]).unwrap_err();
    match err {
        Error::UnknownUnit { units } => assert_eq!(units, vec!["ft", "lb"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn units_are_case_sensitive() {
    assert!(Quantity::new("x", [("KG", 1)]).is_err());
    // S is siemens, s is second
    assert_ne!(q("x", &[("S", 1)]).units(), q("x", &[("s", 1)]).units());
}

#[test]
fn multiply_sums_exponents() {
    let v = q("V", &[("m", 1), ("s", -1)]);
    let t = q("t", &[("s", 1)]);
    let d = v.multiply(&t).unwrap();
    assert_eq!(d.symbol(), "V * t");
    assert_eq!(d.units(), DimensionVector::of(BaseDimension::Length));
}

#[test]
fn divide_by_self_is_dimensionless() {
    let mu = q("μ", &[("kg", 1), ("m", -1), ("s", -1)]);
    let ratio = mu.divide(&mu).unwrap();
    assert_eq!(ratio.symbol(), "μ / μ");
    assert!(ratio.is_dimensionless());
    assert!(ratio.dimension().is_empty());
}

#[test]
fn operations_leave_operands_untouched() {
    let l = q("L", &[("m", 1)]);
    let t = q("T", &[("s", 1)]);
    let _ = l.divide(&t).unwrap();
    let _ = t.reciprocal().unwrap();
    assert_eq!(l, q("L", &[("m", 1)]));
    assert_eq!(t, q("T", &[("s", 1)]));
}

#[test]
fn add_requires_matching_units() {
    let a = q("a", &[("m", 1)]);
    let b = q("b", &[("m", 1)]);
    let c = q("c", &[("s", 1)]);

    let sum = a.add(&b).unwrap();
    assert_eq!(sum.symbol(), "a + b");
    assert_eq!(sum.units(), a.units());

    let diff = a.subtract(&b).unwrap();
    assert_eq!(diff.symbol(), "a - b");

    let err = a.add(&c).unwrap_err();
    assert!(matches!(err, Error::InconsistentUnits { .. }));
    assert_eq!(err.to_string(), "inconsistent units: 'm' vs 's'");
    assert!(a.subtract(&c).is_err());
}

#[test]
fn add_after_cancellation_matches_constructed_units() {
    let force = q("F", &[("N", 1)]);
    let mass_accel = q("m", &[("kg", 1)])
        .multiply(&q("a", &[("m", 1), ("s", -2)]))
        .unwrap();
    assert!(force.add(&mass_accel).is_ok());
    assert!(mass_accel.add(&force).is_ok());
}

#[test]
fn copy_is_independent() {
    let acceleration = q("a", &[("m", 1), ("s", -2)]);
    let mut gravity = acceleration.clone();
    gravity.set_symbol("g");
    assert_eq!(acceleration.symbol(), "a");
    assert_eq!(gravity.symbol(), "g");
    assert_eq!(gravity.units(), acceleration.units());
    assert_eq!(acceleration.with_symbol("g"), gravity);
}

#[test]
fn dimension_relabels_units() {
    let k = q("k", &[("kg", 1), ("m", 1), ("s", -3), ("K", -1)]);
    let dim = k.dimension();
    assert_eq!(dim[&BaseDimension::Mass], 1);
    assert_eq!(dim[&BaseDimension::Temperature], -1);
    assert_eq!(
        dim.keys().map(|d| d.name()).collect::<Vec<_>>(),
        vec!["Length", "Mass", "Time", "Temperature"]
    );
}

#[test]
fn display_writes_superscripts() {
    let rho = q("ρ", &[("kg", 1), ("m", -3)]);
    assert_eq!(rho.to_string(), "ρ (unit: m^{-3} kg)");
    assert_eq!(rho.to_latex(), "$$ρ\\ \\ (unit: m^{-3} kg)$$");

    let theta = Quantity::dimensionless("θ");
    assert_eq!(theta.to_string(), "θ (unit: 1)");
}

#[test]
fn parse_accepts_unit_specifications() {
    let sigma = Quantity::parse("σ", "N/m").unwrap();
    assert_eq!(sigma.units(), q("σ", &[("kg", 1), ("s", -2)]).units());

    let mu = Quantity::parse("μ", "Pa s").unwrap();
    assert_eq!(mu.units(), q("μ", &[("kg", 1), ("m", -1), ("s", -1)]).units());

    assert!(matches!(
        Quantity::parse("x", "furlong/fortnight"),
        Err(Error::UnknownUnit { .. })
    ));
    assert!(matches!(
        Quantity::parse("x", "m^^2"),
        Err(Error::Syntax { .. })
    ));
}

#[test]
fn reciprocal_flips_every_exponent() {
    let v = q("V", &[("m", 1), ("s", -1)]);
    let inverse = v.reciprocal().unwrap();
    assert_eq!(inverse.symbol(), "1 / V");
    assert_eq!(inverse.exponent("m"), -1);
    assert_eq!(inverse.exponent("s"), 1);
}

#[test]
fn extreme_exponents_fail_with_overflow() {
    assert_eq!(
        Quantity::parse("x", "1/m^-2147483648").unwrap_err(),
        Error::Overflow
    );
    // N^n scales s^-2 by n
    assert_eq!(
        Quantity::parse("x", "N^2000000000").unwrap_err(),
        Error::Overflow
    );
    assert_eq!(
        Quantity::new("x", [("m", i32::MAX), ("m", 1)]).unwrap_err(),
        Error::Overflow
    );
    assert_eq!(Error::Overflow.to_string(), "numeric overflow");
}

#[test]
fn algebra_on_extreme_exponents_fails_with_overflow() {
    let big = q("x", &[("m", i32::MAX)]);
    let length = q("L", &[("m", 1)]);
    assert_eq!(big.multiply(&length).unwrap_err(), Error::Overflow);

    let small = q("y", &[("m", i32::MIN)]);
    assert_eq!(small.reciprocal().unwrap_err(), Error::Overflow);
    assert_eq!(small.divide(&length).unwrap_err(), Error::Overflow);
    assert!(small.divide(&small).unwrap().is_dimensionless());
}
