//! Build fully-initialized runs from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime `Scenario`
//! containing:
//! - numerical parameters (`SimulationParameters`)
//! - the initial state (`SimulationState` with both bodies at step 0)
//! - frame sampling and trail settings for the driving loop
//!
//! Manual, symmetric and preset configurations are resolved here, once, so the
//! integrator never sees a mode flag

use anyhow::Result;

use crate::configuration::config::{
    BodyConfig, InitialConfig, ScenarioConfig, EARTH_MOON_MASS_RATIO, SYMMETRIC_OFFSET,
};
use crate::simulation::params::SimulationParameters;
use crate::simulation::states::{Body, NVec2, SimulationState};

/// A validated, normalized run: parameters plus initial state
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub parameters: SimulationParameters,
    pub initial: SimulationState,
    pub render_every: usize,
    pub trail_window: Option<usize>,
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self> {
        cfg.validate()?;

        // Parameters (runtime) from ParametersConfig
        let p_cfg = &cfg.parameters;
        let parameters = SimulationParameters {
            G: p_cfg.G,
            dt: p_cfg.dt,
            max_steps: p_cfg.max_steps,
            epsilon: p_cfg.epsilon,
            softening: p_cfg.softening,
        };

        let (body_a, body_b) = initial_bodies(&cfg.initial, parameters.G);

        Ok(Self {
            parameters,
            initial: SimulationState::new(body_a, body_b),
            render_every: p_cfg.render_every,
            trail_window: p_cfg.trail_window,
        })
    }
}

/// Resolve an initial configuration into the two starting bodies
#[allow(non_snake_case)]
pub fn initial_bodies(initial: &InitialConfig, G: f64) -> (Body, Body) {
    match *initial {
        InitialConfig::Manual { body_a, body_b } => (body_from_config(&body_a), body_from_config(&body_b)),
        InitialConfig::Symmetric { m_a, m_b, v0 } => (
            Body::new(NVec2::new(-SYMMETRIC_OFFSET, 0.0), NVec2::new(0.0, v0), m_a),
            Body::new(NVec2::new(SYMMETRIC_OFFSET, 0.0), NVec2::new(0.0, -v0), m_b),
        ),
        InitialConfig::EarthMoon { separation } => {
            circular_orbit(EARTH_MOON_MASS_RATIO, 1.0, separation, G)
        }
    }
}

fn body_from_config(bc: &BodyConfig) -> Body {
    Body::new(NVec2::new(bc.x[0], bc.x[1]), NVec2::new(bc.v[0], bc.v[1]), bc.m)
}

/// Two bodies on a circular orbit about a barycenter at the origin.
///
/// The bodies sit on the x axis, `separation` apart, at distances
/// `separation * m_other / M` from the origin. The relative orbital speed
/// `v = sqrt(G M / separation)` is split in proportion to the other body's
/// mass and points along y, so `|v_a| / |v_b| = m_b / m_a` and the total
/// momentum is zero.
#[allow(non_snake_case)]
pub fn circular_orbit(m_a: f64, m_b: f64, separation: f64, G: f64) -> (Body, Body) {
    let total_mass = m_a + m_b;

    let offset_a = -separation * m_b / total_mass;
    let offset_b = separation * m_a / total_mass;

    let v_orbital = (G * total_mass / separation).sqrt();

    let body_a = Body::new(
        NVec2::new(offset_a, 0.0),
        NVec2::new(0.0, v_orbital * m_b / total_mass),
        m_a,
    );
    let body_b = Body::new(
        NVec2::new(offset_b, 0.0),
        NVec2::new(0.0, -v_orbital * m_a / total_mass),
        m_b,
    );
    (body_a, body_b)
}
