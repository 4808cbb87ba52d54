//! Conserved-quantity diagnostics
//!
//! Used to report energy drift at the end of a run and to check the
//! integrator in tests. Potential energy uses the true separation without
//! the distance epsilon.

use super::states::{NVec2, SimulationState};

/// Separation below which a run logs a close-approach warning
pub const CLOSE_APPROACH: f64 = 1e-3;

pub fn kinetic_energy(state: &SimulationState) -> f64 {
    let (a, b) = (&state.body_a, &state.body_b);
    0.5 * a.m * a.v.norm_squared() + 0.5 * b.m * b.v.norm_squared()
}

/// `-G m_a m_b / |r|`
#[allow(non_snake_case)]
pub fn potential_energy(state: &SimulationState, G: f64) -> f64 {
    let r = state.separation().norm();
    -G * state.body_a.m * state.body_b.m / r
}

#[allow(non_snake_case)]
pub fn total_energy(state: &SimulationState, G: f64) -> f64 {
    kinetic_energy(state) + potential_energy(state, G)
}

pub fn total_momentum(state: &SimulationState) -> NVec2 {
    state.body_a.momentum() + state.body_b.momentum()
}

/// z-component of the total angular momentum about the origin
pub fn angular_momentum(state: &SimulationState) -> f64 {
    [&state.body_a, &state.body_b]
        .iter()
        .map(|b| b.m * b.x.perp(&b.v))
        .sum()
}

/// `|now - initial| / |initial|`, or the absolute change when `initial` is zero
pub fn relative_drift(initial: f64, now: f64) -> f64 {
    if initial == 0.0 {
        (now - initial).abs()
    } else {
        ((now - initial) / initial).abs()
    }
}
