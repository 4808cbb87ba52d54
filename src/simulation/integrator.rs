//! Fixed-step time integrator for the two-body system
//!
//! Semi-implicit (symplectic) Euler: velocities are kicked first and the
//! positions drift with the already-updated velocities. Driven by
//! [`NewtonianGravity`] and [`SimulationParameters`]

use super::forces::NewtonianGravity;
use super::params::SimulationParameters;
use super::states::SimulationState;

/// Advance the state by one step in place.
/// Uses one force evaluation per step and updates velocities, positions and
/// `state.step_index` based on `params.dt`
pub fn symplectic_euler_integrator(state: &mut SimulationState, params: &SimulationParameters) {
    let dt = params.dt;

    // a_n from x_n
    let (accel_a, accel_b) = NewtonianGravity::new(params).accelerations(state);

    // Kick: v_n+1 = v_n + dt * a_n
    state.body_a.v += accel_a * dt;
    state.body_b.v += accel_b * dt;

    // Drift with the new velocities: x_n+1 = x_n + dt * v_n+1
    state.body_a.x += state.body_a.v * dt;
    state.body_b.x += state.body_b.v * dt;

    state.step_index += 1;
}

/// Pure form of [`symplectic_euler_integrator`]: returns the next state and
/// leaves the input untouched
pub fn step(state: &SimulationState, params: &SimulationParameters) -> SimulationState {
    let mut next = state.clone();
    symplectic_euler_integrator(&mut next, params);
    next
}
