//! Frames handed to whatever draws or stores the run
//!
//! The session emits a [`Frame`] every `render_every` steps. A [`FrameSink`]
//! consumes it; [`CsvFrameWriter`] writes one line per frame and
//! [`FrameRecorder`] keeps them in memory.

use std::io::Write;

use anyhow::Result;

use crate::simulation::states::{NVec2, SimulationState};
use crate::simulation::trajectory::TrajectoryHistory;

/// Snapshot of one sampled step
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub step_index: usize,
    pub time: f64,
    pub x_a: NVec2,
    pub x_b: NVec2,
    pub barycenter: NVec2,
    pub trail_len: usize,
}

impl Frame {
    pub fn capture(state: &SimulationState, history: &TrajectoryHistory, dt: f64) -> Self {
        Self {
            step_index: state.step_index,
            time: state.time(dt),
            x_a: state.body_a.x,
            x_b: state.body_b.x,
            barycenter: state.barycenter(),
            trail_len: history.len(),
        }
    }
}

/// Consumer of sampled frames
pub trait FrameSink {
    fn frame(&mut self, frame: &Frame) -> Result<()>;

    /// Called once after the last frame of a run
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Writes `step,time,xa,ya,xb,yb,bx,by` lines
pub struct CsvFrameWriter<W: Write> {
    out: W,
    header_written: bool,
}

impl<W: Write> CsvFrameWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            header_written: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for CsvFrameWriter<W> {
    fn frame(&mut self, f: &Frame) -> Result<()> {
        if !self.header_written {
            writeln!(self.out, "step,time,xa,ya,xb,yb,bx,by")?;
            self.header_written = true;
        }
        writeln!(
            self.out,
            "{},{:.6},{:.9},{:.9},{:.9},{:.9},{:.9},{:.9}",
            f.step_index, f.time, f.x_a.x, f.x_a.y, f.x_b.x, f.x_b.y, f.barycenter.x, f.barycenter.y
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Keeps every frame in memory
#[derive(Debug, Default)]
pub struct FrameRecorder {
    pub frames: Vec<Frame>,
}

impl FrameSink for FrameRecorder {
    fn frame(&mut self, frame: &Frame) -> Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}
