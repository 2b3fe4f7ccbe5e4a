use std::io::Write;

use lunar_config::{ConfigError, ScenarioConfig, load_scenario, load_scenarios};

fn base() -> ScenarioConfig {
    ScenarioConfig {
        name: "base".to_string(),
        initial_state: [0.5, 0.0, 0.0, 1.2, 0.0, 0.0],
        step_size: 0.01,
        t_start: 0.0,
        t_end: 1.0,
        samples: 101,
        masses: None,
    }
}

#[test]
fn bundled_yaml_scenario_loads() {
    let scenario = load_scenario("configs/scenarios/cislunar.yaml").expect("cislunar");
    assert_eq!(scenario.name, "cislunar");
    assert_eq!(scenario.samples, 1501);
    assert!(scenario.masses.is_none());
    assert!((scenario.grid_spacing() - scenario.step_size).abs() < 1e-12);
}

#[test]
fn bundled_toml_scenario_loads_with_mass_overrides() {
    let scenario = load_scenario("configs/scenarios/dro.toml").expect("dro");
    assert_eq!(scenario.name, "dro");
    let masses = scenario.masses.expect("mass overrides");
    assert!(masses.earth_mass_kg > masses.moon_mass_kg);
}

#[test]
fn scenario_directory_loads_sorted_by_file_name() {
    let scenarios = load_scenarios("configs/scenarios").expect("catalog");
    let names: Vec<_> = scenarios.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["cislunar", "dro"]);
}

#[test]
fn zero_step_size_is_invalid() {
    let mut scenario = base();
    scenario.step_size = 0.0;
    assert!(matches!(
        scenario.validate(),
        Err(ConfigError::Invalid { .. })
    ));
}

#[test]
fn grid_spacing_survives_degenerate_sample_counts() {
    let mut scenario = base();
    scenario.samples = 0;
    assert_eq!(scenario.grid_spacing(), 1.0);
    scenario.samples = 1;
    assert_eq!(scenario.grid_spacing(), 1.0);
}

#[test]
fn single_sample_is_invalid() {
    let mut scenario = base();
    scenario.samples = 1;
    assert!(scenario.validate().is_err());
}

#[test]
fn step_direction_must_match_span() {
    let mut scenario = base();
    scenario.step_size = -0.01;
    let err = scenario.validate().unwrap_err();
    assert!(err.to_string().contains("direction"));

    scenario.t_start = 1.0;
    scenario.t_end = 0.0;
    assert!(scenario.validate().is_ok());
}

#[test]
fn non_positive_mass_overrides_are_invalid() {
    let mut scenario = base();
    scenario.masses = Some(lunar_config::MassOverrides {
        earth_mass_kg: 5.97e24,
        moon_mass_kg: -1.0,
    });
    assert!(scenario.validate().is_err());
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("tempfile");
    writeln!(file, "name: [unterminated").expect("write");
    let err = load_scenario(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn missing_manifest_is_an_io_error() {
    let err = load_scenario("configs/scenarios/no_such.yaml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
