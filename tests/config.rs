use std::path::PathBuf;

use twobody::configuration::config::EARTH_MOON_MASS_RATIO;
use twobody::{
    BodyConfig, Edit, InitialConfig, Scenario, ScenarioConfig, Softening, Which, DISTANCE_EPSILON,
};

const MANUAL_YAML: &str = r#"
parameters:
  G: 1.0
  dt: 0.01
  max_steps: 1500

initial:
  mode: manual
  body_a:
    x: [ -0.5, 0.0 ]
    v: [  0.0, 0.6 ]
    m: 1.0
  body_b:
    x: [  0.5, 0.0 ]
    v: [  0.0, -0.6 ]
    m: 2.0
"#;

const EARTH_MOON_YAML: &str = r#"
parameters:
  G: 1.0
  dt: 0.03
  max_steps: 20000
  render_every: 6

initial:
  mode: earth_moon
"#;

fn earth_moon_config() -> ScenarioConfig {
    ScenarioConfig::from_yaml_str(EARTH_MOON_YAML).unwrap()
}

// ==================================================================================
// Loading
// ==================================================================================

#[test]
fn load_manual_with_defaults() {
    let cfg = ScenarioConfig::from_yaml_str(MANUAL_YAML).unwrap();

    assert_eq!(cfg.parameters.render_every, 1);
    assert_eq!(cfg.parameters.trail_window, None);
    assert_eq!(cfg.parameters.epsilon, DISTANCE_EPSILON);
    assert_eq!(cfg.parameters.softening, Softening::Unconditional);

    match cfg.initial {
        InitialConfig::Manual { body_a, body_b } => {
            assert_eq!(body_a.x, [-0.5, 0.0]);
            assert_eq!(body_b.v, [0.0, -0.6]);
            assert_eq!(body_b.m, 2.0);
        }
        other => panic!("expected manual mode, got {:?}", other),
    }
}

#[test]
fn load_earth_moon_default_separation() {
    let cfg = earth_moon_config();

    assert_eq!(cfg.initial, InitialConfig::EarthMoon { separation: 1.5 });
    assert!(cfg.initial.is_locked());
    assert_eq!(cfg.parameters.render_every, 6);
}

#[test]
fn load_conditional_softening() {
    let yaml = r#"
parameters:
  gravitational_constant: 0.5
  dt: 0.001
  max_steps: 10
  softening:
    policy: conditional
    threshold: 0.001
initial:
  mode: symmetric
  m_a: 1.0
  m_b: 2.0
  v0: 0.6
"#;
    let cfg = ScenarioConfig::from_yaml_str(yaml).unwrap();

    assert_eq!(cfg.parameters.G, 0.5);
    assert_eq!(cfg.parameters.softening, Softening::Conditional { threshold: 0.001 });
}

#[test]
fn earth_moon_rejects_explicit_bodies() {
    let yaml = format!(
        "{}  body_a: {{ x: [0.0, 0.0], v: [0.0, 0.0], m: 1.0 }}\n",
        EARTH_MOON_YAML
    );
    assert!(ScenarioConfig::from_yaml_str(&yaml).is_err());
}

#[test]
fn unknown_mode_is_rejected() {
    let yaml = MANUAL_YAML.replace("mode: manual", "mode: three_body");
    assert!(ScenarioConfig::from_yaml_str(&yaml).is_err());
}

#[test]
fn bundled_scenarios_are_valid() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios");
    for name in ["default.yaml", "earth_moon.yaml", "symmetric.yaml", "softened_close_pass.yaml"] {
        let cfg = ScenarioConfig::from_yaml_file(&dir.join(name));
        assert!(cfg.is_ok(), "{}: {:?}", name, cfg.err());
    }
}

// ==================================================================================
// Validation
// ==================================================================================

#[test]
fn out_of_range_values_are_rejected() {
    let cases = [
        ("G: 1.0", "G: 0.0"),
        ("G: 1.0", "G: 11.0"),
        ("dt: 0.01", "dt: 0.1"),
        ("max_steps: 1500", "max_steps: 0"),
        ("m: 2.0", "m: 0.05"),
        ("x: [ -0.5, 0.0 ]", "x: [ -2.5, 0.0 ]"),
        ("v: [  0.0, 0.6 ]", "v: [  0.0, 3.0 ]"),
    ];
    for (from, to) in cases {
        let yaml = MANUAL_YAML.replace(from, to);
        assert!(ScenarioConfig::from_yaml_str(&yaml).is_err(), "accepted {}", to);
    }
}

#[test]
fn zero_render_every_is_rejected() {
    let mut cfg = ScenarioConfig::default();
    cfg.parameters.render_every = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn preset_skips_manual_bounds_but_checks_separation() {
    // 81.3 exceeds the manual mass bound; the preset is still valid
    let scenario = Scenario::build_scenario(&earth_moon_config()).unwrap();
    assert_eq!(scenario.initial.body_a.m, EARTH_MOON_MASS_RATIO);
    assert!(scenario.initial.body_b.v.norm() > 2.0);

    let mut cfg = earth_moon_config();
    cfg.initial = InitialConfig::EarthMoon { separation: 3.0 };
    assert!(cfg.validate().is_err());
}

#[test]
fn symmetric_bounds() {
    let mut cfg = ScenarioConfig::default();
    cfg.initial = InitialConfig::Symmetric { m_a: 0.3, m_b: 1.0, v0: 0.6 };
    assert!(cfg.validate().is_err());

    cfg.initial = InitialConfig::Symmetric { m_a: 1.0, m_b: 1.0, v0: 2.5 };
    assert!(cfg.validate().is_err());
}

// ==================================================================================
// Scenario building
// ==================================================================================

#[test]
fn build_symmetric_scenario() {
    let mut cfg = ScenarioConfig::default();
    cfg.initial = InitialConfig::Symmetric { m_a: 1.0, m_b: 2.0, v0: 0.8 };

    let scenario = Scenario::build_scenario(&cfg).unwrap();
    let s = &scenario.initial;

    assert_eq!(s.step_index, 0);
    assert_eq!((s.body_a.x.x, s.body_b.x.x), (-0.5, 0.5));
    assert_eq!((s.body_a.v.y, s.body_b.v.y), (0.8, -0.8));
    assert_eq!((s.body_a.m, s.body_b.m), (1.0, 2.0));
}

#[test]
fn build_copies_parameters() {
    let cfg = ScenarioConfig::from_yaml_str(MANUAL_YAML).unwrap();
    let scenario = Scenario::build_scenario(&cfg).unwrap();

    assert_eq!(scenario.parameters.G, 1.0);
    assert_eq!(scenario.parameters.dt, 0.01);
    assert_eq!(scenario.parameters.max_steps, 1500);
    assert_eq!(scenario.render_every, 1);
}

// ==================================================================================
// Form edits
// ==================================================================================

#[test]
fn manual_edits_apply() {
    let mut cfg = ScenarioConfig::default();

    cfg.apply(Edit::Mass(Which::B, 3.0)).unwrap();
    cfg.apply(Edit::Position(Which::A, [-1.0, 0.5])).unwrap();
    cfg.apply(Edit::Velocity(Which::B, [0.1, -0.2])).unwrap();
    cfg.apply(Edit::TimeStep(0.02)).unwrap();

    let expected = InitialConfig::Manual {
        body_a: BodyConfig { x: [-1.0, 0.5], v: [0.0, 0.6], m: 1.0 },
        body_b: BodyConfig { x: [0.5, 0.0], v: [0.1, -0.2], m: 3.0 },
    };
    assert_eq!(cfg.initial, expected);
    assert_eq!(cfg.parameters.dt, 0.02);
}

#[test]
fn preset_locks_body_edits() {
    let mut cfg = earth_moon_config();
    let before = cfg.clone();

    for edit in [
        Edit::Mass(Which::A, 2.0),
        Edit::Position(Which::B, [1.0, 0.0]),
        Edit::Velocity(Which::A, [0.0, 1.0]),
        Edit::Speed(1.0),
    ] {
        let err = cfg.apply(edit).unwrap_err();
        assert!(err.to_string().contains("locked"), "{}", err);
    }
    assert_eq!(cfg, before);

    cfg.apply(Edit::GravitationalConstant(2.0)).unwrap();
    assert_eq!(cfg.parameters.G, 2.0);
}

#[test]
fn edits_outside_mode_are_rejected() {
    let mut cfg = ScenarioConfig::default();
    let err = cfg.apply(Edit::Speed(1.0)).unwrap_err();
    assert!(err.to_string().contains("does not apply"), "{}", err);

    cfg.initial = InitialConfig::symmetric();
    assert!(cfg.apply(Edit::Position(Which::A, [0.0, 0.0])).is_err());
    cfg.apply(Edit::Speed(1.2)).unwrap();
    cfg.apply(Edit::Mass(Which::A, 4.0)).unwrap();
    assert_eq!(cfg.initial, InitialConfig::Symmetric { m_a: 4.0, m_b: 1.0, v0: 1.2 });
}

#[test]
fn out_of_range_edit_leaves_config_unchanged() {
    let mut cfg = ScenarioConfig::default();
    let before = cfg.clone();

    assert!(cfg.apply(Edit::Mass(Which::A, 20.0)).is_err());
    assert!(cfg.apply(Edit::TimeStep(0.0)).is_err());
    assert!(cfg.apply(Edit::RenderEvery(0)).is_err());

    assert_eq!(cfg, before);
}
