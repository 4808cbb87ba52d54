//! Core state types for the two-body simulation.
//!
//! Defines the planar body and the state of a run:
//! - `Body` using `NVec2` (position, velocity) and a mass
//! - `SimulationState` holding exactly two bodies and the current step index
//!
//! The state is owned by a single session and mutated in place by the
//! integrator; everything else only reads it.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass, strictly positive
}

impl Body {
    pub fn new(x: NVec2, v: NVec2, m: f64) -> Self {
        Self { x, v, m }
    }

    /// Linear momentum `m v`
    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub body_a: Body,
    pub body_b: Body,
    pub step_index: usize, // number of integrator steps taken so far
}

impl SimulationState {
    /// Fresh state at step 0
    pub fn new(body_a: Body, body_b: Body) -> Self {
        Self {
            body_a,
            body_b,
            step_index: 0,
        }
    }

    /// Separation vector pointing from body a to body b
    pub fn separation(&self) -> NVec2 {
        self.body_b.x - self.body_a.x
    }

    /// Mass-weighted mean position of the two bodies
    pub fn barycenter(&self) -> NVec2 {
        let (a, b) = (&self.body_a, &self.body_b);
        (a.m * a.x + b.m * b.x) / (a.m + b.m)
    }

    pub fn total_mass(&self) -> f64 {
        self.body_a.m + self.body_b.m
    }

    /// Elapsed simulated time for a fixed step size `dt`
    pub fn time(&self, dt: f64) -> f64 {
        self.step_index as f64 * dt
    }
}
