//! One interactive simulation session
//!
//! The session exclusively owns the configuration, the live state and the
//! trajectory history. It is the only caller of the integrator and the
//! recorder. Pacing is up to the caller: drive it with `tick` from a timer,
//! or with `run` as a tight loop bounded by `max_steps`.

use anyhow::Result;
use log::{debug, info, warn};

use crate::configuration::config::{InitialConfig, ScenarioConfig};
use crate::configuration::controls::Edit;
use crate::simulation::diagnostics::{self, CLOSE_APPROACH};
use crate::simulation::integrator::symplectic_euler_integrator;
use crate::simulation::params::SimulationParameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, SimulationState};
use crate::simulation::trajectory::TrajectoryHistory;
use crate::visualization::trace::{Frame, FrameSink};

/// What a call to [`Session::run`] did
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub steps: usize, // steps taken by this call
    pub frames: usize, // frames emitted by this call
    pub initial_energy: f64,
    pub final_energy: f64,
    pub energy_drift: f64, // relative
    pub barycenter_shift: f64, // distance the barycenter moved
}

pub struct Session {
    config: ScenarioConfig,
    last_unlocked: InitialConfig, // restored by `reset`
    scenario: Scenario,
    state: SimulationState,
    history: TrajectoryHistory,
    close_approach_logged: bool,
}

impl Session {
    pub fn new(config: ScenarioConfig) -> Result<Self> {
        let scenario = Scenario::build_scenario(&config)?;
        let last_unlocked = if config.initial.is_locked() {
            InitialConfig::default()
        } else {
            config.initial.clone()
        };

        Ok(Self {
            state: scenario.initial.clone(),
            history: TrajectoryHistory::with_window(scenario.trail_window),
            config,
            last_unlocked,
            scenario,
            close_approach_logged: false,
        })
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.scenario.parameters
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn history(&self) -> &TrajectoryHistory {
        &self.history
    }

    /// True while a locked preset is active
    pub fn is_locked(&self) -> bool {
        self.config.initial.is_locked()
    }

    pub fn is_finished(&self) -> bool {
        self.state.step_index >= self.scenario.parameters.max_steps
    }

    /// Advance one step and record it. Returns false once `max_steps` is reached.
    pub fn tick(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }

        symplectic_euler_integrator(&mut self.state, &self.scenario.parameters);
        self.history.record(&self.state);

        if !self.close_approach_logged {
            let distance = self.state.separation().norm();
            if distance < CLOSE_APPROACH {
                warn!(
                    "close approach at step {}: separation {:.3e}",
                    self.state.step_index, distance
                );
                self.close_approach_logged = true;
            }
        }
        true
    }

    /// Tick until `max_steps`, handing every `render_every`-th step to `sink`
    pub fn run<S: FrameSink + ?Sized>(&mut self, sink: &mut S) -> Result<RunSummary> {
        let g = self.scenario.parameters.G;
        let dt = self.scenario.parameters.dt;
        let render_every = self.scenario.render_every;

        let initial_energy = diagnostics::total_energy(&self.state, g);
        let initial_barycenter = self.state.barycenter();
        let start = self.state.step_index;

        info!(
            "run: {} mode, {} steps of dt = {}, G = {}",
            self.config.initial.mode_name(),
            self.scenario.parameters.max_steps.saturating_sub(start),
            dt,
            g
        );

        let mut frames = 0;
        while self.tick() {
            // zero-based index of the step just taken
            let i = self.state.step_index - 1;
            if i % render_every == 0 {
                sink.frame(&Frame::capture(&self.state, &self.history, dt))?;
                frames += 1;
            }
        }
        sink.finish()?;

        let final_energy = diagnostics::total_energy(&self.state, g);
        let summary = RunSummary {
            steps: self.state.step_index - start,
            frames,
            initial_energy,
            final_energy,
            energy_drift: diagnostics::relative_drift(initial_energy, final_energy),
            barycenter_shift: distance(initial_barycenter, self.state.barycenter()),
        };

        info!(
            "run finished: {} steps, {} frames, energy drift {:.3e}, barycenter shift {:.3e}",
            summary.steps, summary.frames, summary.energy_drift, summary.barycenter_shift
        );
        Ok(summary)
    }

    /// Switch to another initial configuration and restart
    pub fn select_initial(&mut self, initial: InitialConfig) -> Result<()> {
        let mut next = self.config.clone();
        next.initial = initial;
        self.rebuild(next)
    }

    /// Switch to the locked Earth–Moon preset and restart
    pub fn select_earth_moon(&mut self) -> Result<()> {
        debug!("selecting earth_moon preset");
        self.select_initial(InitialConfig::earth_moon())
    }

    /// Apply a form edit and restart. Rejected edits change nothing.
    pub fn apply(&mut self, edit: Edit) -> Result<()> {
        let mut next = self.config.clone();
        next.apply(edit)?;
        self.rebuild(next)
    }

    /// Leave any preset, restore the last manual configuration and clear the trails
    pub fn reset(&mut self) -> Result<()> {
        debug!("reset to {} mode", self.last_unlocked.mode_name());
        let mut next = self.config.clone();
        next.initial = self.last_unlocked.clone();
        self.rebuild(next)
    }

    fn rebuild(&mut self, config: ScenarioConfig) -> Result<()> {
        let scenario = Scenario::build_scenario(&config)?;
        if !config.initial.is_locked() {
            self.last_unlocked = config.initial.clone();
        }

        debug!("rebuilt session in {} mode", config.initial.mode_name());
        self.state = scenario.initial.clone();
        self.history = TrajectoryHistory::with_window(scenario.trail_window);
        self.scenario = scenario;
        self.config = config;
        self.close_approach_logged = false;
        Ok(())
    }
}

fn distance(a: NVec2, b: NVec2) -> f64 {
    (b - a).norm()
}
