//! Configuration types for loading two-body scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters, physical constant and run length
//! - [`InitialConfig`]    – how the two bodies start (manual, symmetric or a preset)
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example manual scenario matching these types:
//!
//! ```yaml
//! parameters:
//!   G: 1.0                  # gravitational constant
//!   dt: 0.01                # fixed step size
//!   max_steps: 1500         # run length
//!   render_every: 1         # emit a frame every n-th step
//!
//! initial:
//!   mode: manual
//!   body_a:
//!     x: [ -0.5, 0.0 ]
//!     v: [  0.0, 0.6 ]
//!     m: 1.0
//!   body_b:
//!     x: [  0.5, 0.0 ]
//!     v: [  0.0, -0.6 ]
//!     m: 1.0
//! ```
//!
//! and the locked Earth–Moon preset, whose masses, positions and velocities are
//! derived rather than given:
//!
//! ```yaml
//! parameters:
//!   G: 1.0
//!   dt: 0.03
//!   max_steps: 20000
//!   render_every: 6
//!
//! initial:
//!   mode: earth_moon
//!   separation: 1.5
//! ```
//!
//! Values are bounded like the controls of an interactive form;
//! [`ScenarioConfig::validate`] checks them before any state is built.

use std::fs::File;
use std::io::BufReader;
use std::ops::RangeInclusive;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

use crate::simulation::params::{Softening, DISTANCE_EPSILON};

pub const G_RANGE: RangeInclusive<f64> = 0.01..=10.0;
pub const DT_RANGE: RangeInclusive<f64> = 0.001..=0.05;
pub const MANUAL_MASS_RANGE: RangeInclusive<f64> = 0.1..=10.0;
pub const SYMMETRIC_MASS_RANGE: RangeInclusive<f64> = 0.5..=5.0;
pub const SYMMETRIC_SPEED_RANGE: RangeInclusive<f64> = 0.1..=2.0;
pub const SEPARATION_RANGE: RangeInclusive<f64> = 0.1..=2.0;

/// Per-axis bound of the display window, used for positions and velocities
pub const WINDOW_HALF_WIDTH: f64 = 2.0;

/// Earth mass relative to a Moon mass of 1
pub const EARTH_MOON_MASS_RATIO: f64 = 81.3;
pub const EARTH_MOON_SEPARATION: f64 = 1.5;

/// Half the separation of the symmetric mode's fixed start positions
pub const SYMMETRIC_OFFSET: f64 = 0.5;

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ParametersConfig {
    #[serde(alias = "gravitational_constant")]
    pub G: f64, // gravitational constant
    pub dt: f64, // fixed step size
    pub max_steps: usize, // number of steps in a run
    #[serde(default = "default_render_every")]
    pub render_every: usize, // sampling interval for frames, physics is unaffected
    #[serde(default)]
    pub trail_window: Option<usize>, // keep only the newest n trail points, unbounded when absent
    #[serde(default = "default_epsilon")]
    pub epsilon: f64, // distance floor
    #[serde(default)]
    pub softening: Softening, // when the floor applies
}

fn default_render_every() -> usize {
    1
}

fn default_epsilon() -> f64 {
    DISTANCE_EPSILON
}

fn default_separation() -> f64 {
    EARTH_MOON_SEPARATION
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G: 1.0,
            dt: 0.01,
            max_steps: 1500,
            render_every: default_render_every(),
            trail_window: None,
            epsilon: default_epsilon(),
            softening: Softening::Unconditional,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    pub x: [f64; 2], // initial position
    pub v: [f64; 2], // initial velocity
    pub m: f64, // mass
}

/// How the two bodies are initialised
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case", deny_unknown_fields)]
pub enum InitialConfig {
    /// Every value given explicitly
    Manual { body_a: BodyConfig, body_b: BodyConfig },

    /// Bodies at (-0.5, 0) and (0.5, 0) moving at `v0` in opposite directions
    Symmetric { m_a: f64, m_b: f64, v0: f64 },

    /// Locked Earth–Moon preset on a circular orbit about the origin
    EarthMoon {
        #[serde(default = "default_separation")]
        separation: f64,
    },
}

impl InitialConfig {
    /// Derived fields of a locked preset cannot be edited
    pub fn is_locked(&self) -> bool {
        matches!(self, InitialConfig::EarthMoon { .. })
    }

    pub fn mode_name(&self) -> &'static str {
        match self {
            InitialConfig::Manual { .. } => "manual",
            InitialConfig::Symmetric { .. } => "symmetric",
            InitialConfig::EarthMoon { .. } => "earth_moon",
        }
    }

    pub fn earth_moon() -> Self {
        InitialConfig::EarthMoon {
            separation: EARTH_MOON_SEPARATION,
        }
    }

    pub fn symmetric() -> Self {
        InitialConfig::Symmetric {
            m_a: 1.0,
            m_b: 1.0,
            v0: 0.6,
        }
    }
}

impl Default for InitialConfig {
    fn default() -> Self {
        InitialConfig::Manual {
            body_a: BodyConfig {
                x: [-0.5, 0.0],
                v: [0.0, 0.6],
                m: 1.0,
            },
            body_b: BodyConfig {
                x: [0.5, 0.0],
                v: [0.0, -0.6],
                m: 1.0,
            },
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    pub initial: InitialConfig, // Initial state of the two bodies
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml).context("invalid scenario yaml")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario {}", path.display()))?;
        let reader = BufReader::new(file);
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)
            .with_context(|| format!("failed to parse scenario {}", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every value against its allowed range
    pub fn validate(&self) -> Result<()> {
        let p = &self.parameters;
        in_range("G", p.G, &G_RANGE)?;
        in_range("dt", p.dt, &DT_RANGE)?;
        ensure!(p.max_steps >= 1, "max_steps must be at least 1");
        ensure!(p.render_every >= 1, "render_every must be at least 1");
        if let Some(window) = p.trail_window {
            ensure!(window >= 1, "trail_window must be at least 1");
        }
        ensure!(
            p.epsilon.is_finite() && p.epsilon > 0.0,
            "epsilon must be positive, got {}",
            p.epsilon
        );
        if let Softening::Conditional { threshold } = p.softening {
            ensure!(
                threshold.is_finite() && threshold > 0.0,
                "softening threshold must be positive, got {threshold}"
            );
        }

        match &self.initial {
            InitialConfig::Manual { body_a, body_b } => {
                validate_body("body_a", body_a)?;
                validate_body("body_b", body_b)?;
            }
            InitialConfig::Symmetric { m_a, m_b, v0 } => {
                in_range("m_a", *m_a, &SYMMETRIC_MASS_RANGE)?;
                in_range("m_b", *m_b, &SYMMETRIC_MASS_RANGE)?;
                in_range("v0", *v0, &SYMMETRIC_SPEED_RANGE)?;
            }
            InitialConfig::EarthMoon { separation } => {
                in_range("separation", *separation, &SEPARATION_RANGE)?;
            }
        }
        Ok(())
    }
}

fn validate_body(name: &str, body: &BodyConfig) -> Result<()> {
    in_range(&format!("{name}.m"), body.m, &MANUAL_MASS_RANGE)?;
    let window = -WINDOW_HALF_WIDTH..=WINDOW_HALF_WIDTH;
    for axis in 0..2 {
        in_range(&format!("{name}.x[{axis}]"), body.x[axis], &window)?;
        in_range(&format!("{name}.v[{axis}]"), body.v[axis], &window)?;
    }
    Ok(())
}

fn in_range(name: &str, value: f64, range: &RangeInclusive<f64>) -> Result<()> {
    ensure!(
        range.contains(&value),
        "{name} = {value} is outside {}..={}",
        range.start(),
        range.end()
    );
    Ok(())
}
