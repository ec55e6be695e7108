use std::collections::HashSet;

use approx::assert_relative_eq;
use livapor::constants;
use livapor::{
    library, EvaluatorConfig, LiVaporError, PropertyEvaluator, PropertyKind, RangePolicy,
};

// ═══════════════════════════════════════════════════════════════════
//  Source selection
// ═══════════════════════════════════════════════════════════════════

#[test]
fn unknown_source_label() {
    let li = PropertyEvaluator::new();
    let err = li.vapor_pressure_from("no_such_paper", 900.0).unwrap_err();
    assert_eq!(
        err,
        LiVaporError::UnknownSource {
            property: PropertyKind::VaporPressure,
            label: "no_such_paper".to_string(),
        }
    );
}

#[test]
fn labels_are_scoped_by_property() {
    // "davison_1968" exists for vapor pressure and surface tension only.
    let li = PropertyEvaluator::new();
    assert!(li.surface_tension_from("davison_1968", 600.0).is_ok());
    assert!(matches!(
        li.viscosity_from("davison_1968", 1000.0),
        Err(LiVaporError::UnknownSource { property: PropertyKind::Viscosity, .. })
    ));
}

#[test]
fn unknown_property_name() {
    let li = PropertyEvaluator::new();
    assert_eq!(
        li.get("enthalpy", 900.0, None),
        Err(LiVaporError::UnknownProperty("enthalpy".to_string()))
    );
}

#[test]
fn string_keys_and_aliases() {
    let li = PropertyEvaluator::new();
    let p = li.vapor_pressure(1100.0).unwrap();
    assert_eq!(li.get("vapor_pressure", 1100.0, None).unwrap(), p);
    assert_eq!(li.get("P", 1100.0, None).unwrap(), p);
    assert_eq!(li.get("eta", 1100.0, None).unwrap(), li.viscosity(1100.0).unwrap());
    assert_eq!(li.get("Lambda", 1100.0, None).unwrap(), li.thermal_conductivity(1100.0).unwrap());
    assert_eq!(
        li.get("SIGMA", 600.0, Some("davison_1968")).unwrap(),
        li.surface_tension(600.0).unwrap()
    );
}

#[test]
fn labels_are_unique_and_defaults_registered() {
    for kind in PropertyKind::ALL {
        let labels: Vec<_> = library::sources(kind).map(|s| s.label).collect();
        let unique: HashSet<_> = labels.iter().collect();
        assert_eq!(labels.len(), unique.len(), "duplicate label for {kind}");
        assert!(
            labels.contains(&library::default_label(kind)),
            "default source of {kind} is not registered"
        );
    }
    assert_eq!(library::all().len(), 30);
}

#[test]
fn source_metadata_prints() {
    let li = PropertyEvaluator::new();
    let source = li.default_source(PropertyKind::VaporPressure).unwrap();
    let printed = source.to_string();
    assert!(printed.starts_with("browning_potter_1985 [vapor_pressure] 1057.00–2156.00 K"));
    assert!(printed.contains("Browning"));
}

// ═══════════════════════════════════════════════════════════════════
//  Range policy
// ═══════════════════════════════════════════════════════════════════

#[test]
fn strict_policy_rejects_out_of_range() {
    let li = PropertyEvaluator::with_config(EvaluatorConfig::strict()).unwrap();
    let err = li.vapor_pressure(900.0).unwrap_err();
    match err {
        LiVaporError::OutOfRange { property, label, temperature, min, max } => {
            assert_eq!(property, PropertyKind::VaporPressure);
            assert_eq!(label, "browning_potter_1985");
            assert_eq!(temperature, 900.0);
            assert_eq!((min, max), (1057.0, 2156.0));
        }
        other => panic!("expected OutOfRange, got {other:?}"),
    }
    assert!(li.vapor_pressure(1200.0).is_ok());
}

#[test]
fn strict_policy_ignores_sources_without_range() {
    let li = PropertyEvaluator::with_config(EvaluatorConfig::strict()).unwrap();
    assert!(li.vapor_pressure_from("jsme_data_book", 300.0).is_ok());
    assert!(li.surface_tension(2000.0).is_ok());
}

#[test]
fn warn_and_extrapolate_return_the_same_value() {
    let warn = PropertyEvaluator::new();
    let silent = PropertyEvaluator::with_config(EvaluatorConfig::extrapolating()).unwrap();
    assert_eq!(warn.config().range_policy, RangePolicy::Warn);
    assert_eq!(warn.vapor_pressure(600.0).unwrap(), silent.vapor_pressure(600.0).unwrap());
}

// ═══════════════════════════════════════════════════════════════════
//  Configuration
// ═══════════════════════════════════════════════════════════════════

#[test]
fn configured_default_source() {
    let config = EvaluatorConfig::new().default_source(PropertyKind::VaporPressure, "nist_webbook");
    let li = PropertyEvaluator::with_config(config).unwrap();
    assert_eq!(
        li.vapor_pressure(1000.0).unwrap(),
        li.vapor_pressure_from("nist_webbook", 1000.0).unwrap()
    );
    // Other properties keep their recommended source.
    assert_eq!(
        li.default_source(PropertyKind::Viscosity).unwrap().label,
        "vargaftik_yargin_1985"
    );
}

#[test]
fn configured_default_must_exist() {
    let config = EvaluatorConfig::new().default_source(PropertyKind::Viscosity, "alcock_1984");
    assert!(matches!(
        PropertyEvaluator::with_config(config),
        Err(LiVaporError::UnknownSource { property: PropertyKind::Viscosity, .. })
    ));
}

#[test]
fn config_serializes_with_snake_case_keys() {
    let config = EvaluatorConfig::strict().default_source(PropertyKind::SurfaceTension, "davison_1968");
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains(r#""range_policy":"strict""#), "{json}");
    assert!(json.contains(r#""surface_tension":"davison_1968""#), "{json}");
    let back: EvaluatorConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

// ═══════════════════════════════════════════════════════════════════
//  Constants
// ═══════════════════════════════════════════════════════════════════

#[test]
fn lithium_constants() {
    let li = PropertyEvaluator::new();
    assert_relative_eq!(li.atomic_mass(), 1.152_414e-26, max_relative = 1e-6);
    assert_relative_eq!(li.heat_of_vaporization(), 147_100.0);
    assert_relative_eq!(constants::HEAT_OF_VAPORIZATION_PER_ATOM, 2.442_65e-19, max_relative = 1e-5);
    assert_relative_eq!(constants::HEAT_OF_VAPORIZATION_PER_KG, 2.119_597e7, max_relative = 1e-6);
    assert_relative_eq!(constants::MELTING_POINT, 453.65);
}

#[test]
fn surface_tension_at_melting_point() {
    let li = PropertyEvaluator::new();
    assert_relative_eq!(li.surface_tension(453.7).unwrap(), 0.395_673, max_relative = 1e-5);
    assert_relative_eq!(li.surface_tension(1000.0).unwrap(), 0.326_49, max_relative = 1e-10);
}
