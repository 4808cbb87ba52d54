//! Numerical and physical parameters for a run
//!
//! `SimulationParameters` holds runtime settings:
//! - gravitational constant and fixed step size (`G`, `dt`),
//! - run length in steps,
//! - the distance epsilon and the policy deciding when it is applied

use serde::Deserialize;

/// Distance floor added to the separation before the force is evaluated
pub const DISTANCE_EPSILON: f64 = 1e-6;

/// When the distance epsilon is added to the separation
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum Softening {
    /// Always add epsilon, even for well separated bodies
    #[default]
    Unconditional,

    /// Only add epsilon when the true separation is below `threshold`
    Conditional { threshold: f64 },
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    pub G: f64, // gravitational constant
    pub dt: f64, // step size
    pub max_steps: usize, // run length
    pub epsilon: f64, // distance floor
    pub softening: Softening,
}

impl SimulationParameters {
    /// Parameters with the reference epsilon applied unconditionally
    #[allow(non_snake_case)]
    pub fn new(G: f64, dt: f64, max_steps: usize) -> Self {
        Self {
            G,
            dt,
            max_steps,
            epsilon: DISTANCE_EPSILON,
            softening: Softening::Unconditional,
        }
    }

    pub fn with_softening(mut self, softening: Softening) -> Self {
        self.softening = softening;
        self
    }

    /// Distance used by the force law for a true separation `r`
    pub fn softened_distance(&self, r: f64) -> f64 {
        match self.softening {
            Softening::Unconditional => r + self.epsilon,
            Softening::Conditional { threshold } if r < threshold => r + self.epsilon,
            Softening::Conditional { .. } => r,
        }
    }
}
