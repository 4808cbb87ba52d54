//! Newtonian gravity between the two bodies
//!
//! The separation is floored by the distance epsilon from [`SimulationParameters`]
//! so coincident bodies yield a finite force instead of a division by zero

use crate::simulation::params::SimulationParameters;
use crate::simulation::states::{Body, NVec2, SimulationState};

/// Pairwise gravity with the epsilon distance floor
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity<'p> {
    pub params: &'p SimulationParameters,
}

impl<'p> NewtonianGravity<'p> {
    pub fn new(params: &'p SimulationParameters) -> Self {
        Self { params }
    }

    /// Distance actually used by the force law: `|r| + eps`
    /// (or `|r|` when a conditional policy decides no floor is needed)
    pub fn distance(&self, r: &NVec2) -> f64 {
        self.params.softened_distance(r.norm())
    }

    /// Scalar factor `G * m_a * m_b / d^3` multiplying the separation vector
    pub fn coefficient(&self, a: &Body, b: &Body) -> f64 {
        let r = b.x - a.x;
        let d = self.distance(&r);
        self.params.G * a.m * b.m / (d * d * d)
    }

    /// Force acting on `a` due to `b`: `G m_a m_b r / d^3` with `r = x_b - x_a`.
    /// The force on `b` is the negation.
    pub fn force(&self, a: &Body, b: &Body) -> NVec2 {
        let r = b.x - a.x;
        self.coefficient(a, b) * r
    }

    /// Accelerations of (a, b); equal and opposite forces divided by each mass
    pub fn accelerations(&self, state: &SimulationState) -> (NVec2, NVec2) {
        let force = self.force(&state.body_a, &state.body_b);
        let accel_a = force / state.body_a.m;
        let accel_b = -force / state.body_b.m;
        (accel_a, accel_b)
    }
}
