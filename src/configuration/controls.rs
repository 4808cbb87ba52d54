//! Interactive edits of a scenario, one form control at a time.
//!
//! Parameter controls (G, dt, run length, sampling) apply in every mode.
//! Body controls only apply to the mode that exposes them, and every body
//! control is locked while a preset is active. An edit that is rejected for
//! any reason leaves the configuration untouched.

use anyhow::{bail, Result};

use super::config::{InitialConfig, ScenarioConfig};

/// Which of the two bodies a control targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Which {
    A,
    B,
}

/// A single form input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edit {
    GravitationalConstant(f64),
    TimeStep(f64),
    MaxSteps(usize),
    RenderEvery(usize),
    Mass(Which, f64),
    Position(Which, [f64; 2]),
    Velocity(Which, [f64; 2]),
    /// Initial speed of the symmetric mode
    Speed(f64),
}

impl Edit {
    /// Edits of the bodies' initial conditions, as opposed to run parameters
    pub fn targets_bodies(&self) -> bool {
        matches!(
            self,
            Edit::Mass(..) | Edit::Position(..) | Edit::Velocity(..) | Edit::Speed(_)
        )
    }
}

impl ScenarioConfig {
    /// Apply `edit`, keeping the previous configuration if the result is
    /// locked, not applicable or out of range
    pub fn apply(&mut self, edit: Edit) -> Result<()> {
        if edit.targets_bodies() && self.initial.is_locked() {
            bail!("{edit:?} is locked by preset {}", self.initial.mode_name());
        }

        let mut next = self.clone();
        let p = &mut next.parameters;
        match (edit, &mut next.initial) {
            (Edit::GravitationalConstant(g), _) => p.G = g,
            (Edit::TimeStep(dt), _) => p.dt = dt,
            (Edit::MaxSteps(n), _) => p.max_steps = n,
            (Edit::RenderEvery(n), _) => p.render_every = n,

            (Edit::Mass(which, m), InitialConfig::Manual { body_a, body_b }) => {
                pick(which, body_a, body_b).m = m
            }
            (Edit::Position(which, x), InitialConfig::Manual { body_a, body_b }) => {
                pick(which, body_a, body_b).x = x
            }
            (Edit::Velocity(which, v), InitialConfig::Manual { body_a, body_b }) => {
                pick(which, body_a, body_b).v = v
            }

            (Edit::Mass(which, m), InitialConfig::Symmetric { m_a, m_b, .. }) => {
                *pick(which, m_a, m_b) = m
            }
            (Edit::Speed(speed), InitialConfig::Symmetric { v0, .. }) => *v0 = speed,

            (edit, initial) => {
                bail!("{edit:?} does not apply in {} mode", initial.mode_name())
            }
        }

        next.validate()?;
        *self = next;
        Ok(())
    }
}

fn pick<'a, T>(which: Which, a: &'a mut T, b: &'a mut T) -> &'a mut T {
    match which {
        Which::A => a,
        Which::B => b,
    }
}
