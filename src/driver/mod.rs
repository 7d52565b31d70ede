//! Step driver: pulls frames from the active run on a cooperative timer
//!
//! # States
//!
//! ```text
//!            start                 pause
//!   Idle ───────────▶ Running ◀──────────▶ Paused
//!    ▲                  │        resume      │
//!    └──── stop / terminal frame ◀───────────┘
//! ```
//!
//! The driver owns at most one run at a time. Time is passed in explicitly:
//! the event loop calls [`StepDriver::tick`] with the current [`Instant`] and
//! the driver performs a pull only when the single pending deadline has
//! passed. Every run gets a fresh id and the pending pull is stamped with it,
//! so a pull scheduled for an earlier run can never reach a newer one.
//!
//! Invalid transitions (`pause` while paused, `resume` while idle, ...) are
//! ignored and reported by a `false` return.

mod canvas;
mod errors;

pub use canvas::Canvas;
pub use errors::DriverError;

use crate::algorithms::{FrameSequence, Step};
use crate::params::{parse_params, Params};
use crate::registry::{AlgorithmMeta, Registry};
use crate::visual::{Frame, Outcome};
use rustc_hash::FxHashMap;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Delay used when a frame carries no speed of its own
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// No active run (a finished run also lands here)
    Idle,
    Running,
    Paused,
}

impl fmt::Display for DriverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverState::Idle => write!(f, "idle"),
            DriverState::Running => write!(f, "running"),
            DriverState::Paused => write!(f, "paused"),
        }
    }
}

/// Result of a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub algorithm: &'static str,
    pub outcome: Outcome,
    pub message: Option<String>,
    /// Frames delivered, terminal frame included
    pub frames: usize,
}

/// Live state of the one in-progress run
struct RunContext {
    run_id: u64,
    meta: AlgorithmMeta,
    sequence: Box<dyn FrameSequence>,
    paused: bool,
    delivered: usize,
}

/// A deferred pull for a specific run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scheduled {
    run_id: u64,
    due: Instant,
}

pub struct StepDriver<C: Canvas> {
    registry: Registry,
    canvas: C,
    context: Option<RunContext>,
    scheduled: Option<Scheduled>,
    completion: Option<Completion>,
    next_run_id: u64,
    default_delay: Duration,
}

impl<C: Canvas> StepDriver<C> {
    pub fn new(registry: Registry, canvas: C) -> Self {
        StepDriver {
            registry,
            canvas,
            context: None,
            scheduled: None,
            completion: None,
            next_run_id: 1,
            default_delay: DEFAULT_DELAY,
        }
    }

    pub fn with_default_delay(mut self, delay: Duration) -> Self {
        if !delay.is_zero() {
            self.default_delay = delay;
        }
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn state(&self) -> DriverState {
        match &self.context {
            None => DriverState::Idle,
            Some(ctx) if ctx.paused => DriverState::Paused,
            Some(_) => DriverState::Running,
        }
    }

    /// Id of the algorithm whose run is active
    pub fn active_algorithm(&self) -> Option<&'static str> {
        self.context.as_ref().map(|ctx| ctx.meta.id)
    }

    /// Id of the active run, if any
    pub fn run_id(&self) -> Option<u64> {
        self.context.as_ref().map(|ctx| ctx.run_id)
    }

    /// Frames delivered so far by the active run
    pub fn frames_delivered(&self) -> usize {
        self.context.as_ref().map_or(0, |ctx| ctx.delivered)
    }

    /// Result of the last run, kept until the next `start` or `stop`
    pub fn completion(&self) -> Option<&Completion> {
        self.completion.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.context.is_none() && self.completion.is_some()
    }

    /// Deadline of the pending pull
    pub fn next_due(&self) -> Option<Instant> {
        self.scheduled.map(|s| s.due)
    }

    pub fn default_delay(&self) -> Duration {
        self.default_delay
    }

    /// Start `id` with already typed parameters.
    ///
    /// On error nothing changes: the previous run (if any) keeps going.
    pub fn start(&mut self, id: &str, params: &Params, now: Instant) -> Result<(), DriverError> {
        let meta = *self.registry.get(id)?;
        let sequence = (meta.run)(params)?;
        self.launch(meta, sequence, now);
        Ok(())
    }

    /// Start `id` from raw field text, parsed against its schema
    pub fn start_from_inputs(
        &mut self,
        id: &str,
        inputs: &FxHashMap<String, String>,
        now: Instant,
    ) -> Result<(), DriverError> {
        let meta = *self.registry.get(id)?;
        let params = parse_params(meta.params, inputs)?;
        let sequence = (meta.run)(&params)?;
        self.launch(meta, sequence, now);
        Ok(())
    }

    fn launch(&mut self, meta: AlgorithmMeta, sequence: Box<dyn FrameSequence>, now: Instant) {
        self.teardown();
        self.completion = None;
        self.canvas.clear();

        let run_id = self.next_run_id;
        self.next_run_id += 1;
        debug!(algorithm = meta.id, run_id, "run started");

        self.context = Some(RunContext {
            run_id,
            meta,
            sequence,
            paused: false,
            delivered: 0,
        });
        self.pull(now, true);
    }

    /// Cancel the pending pull and drop the run context
    fn teardown(&mut self) {
        self.scheduled = None;
        if let Some(ctx) = self.context.take() {
            debug!(algorithm = ctx.meta.id, run_id = ctx.run_id, "run discarded");
        }
    }

    pub fn pause(&mut self) -> bool {
        match self.context.as_mut() {
            Some(ctx) if !ctx.paused => {
                self.scheduled = None;
                ctx.paused = true;
                debug!(run_id = ctx.run_id, delivered = ctx.delivered, "paused");
                true
            }
            _ => false,
        }
    }

    /// Continue a paused run, pulling the next frame right away
    pub fn resume(&mut self, now: Instant) -> bool {
        match self.context.as_mut() {
            Some(ctx) if ctx.paused => {
                ctx.paused = false;
                debug!(run_id = ctx.run_id, "resumed");
                self.pull(now, true);
                true
            }
            _ => false,
        }
    }

    /// Pull exactly one frame while paused, staying paused
    pub fn step(&mut self, now: Instant) -> bool {
        match self.context.as_ref() {
            Some(ctx) if ctx.paused => self.pull(now, false),
            _ => false,
        }
    }

    pub fn stop(&mut self) -> bool {
        let was_active = self.context.is_some() || self.completion.is_some();
        self.teardown();
        self.completion = None;
        was_active
    }

    /// Perform the scheduled pull if it is due. Returns whether a frame was
    /// delivered.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(scheduled) = self.scheduled else {
            return false;
        };
        if now < scheduled.due {
            return false;
        }
        self.scheduled = None;

        let current = self
            .context
            .as_ref()
            .filter(|ctx| !ctx.paused)
            .map(|ctx| ctx.run_id);
        if current != Some(scheduled.run_id) {
            trace!(run_id = scheduled.run_id, "dropping stale pull");
            return false;
        }
        self.pull(now, true)
    }

    /// Pull one frame from the active run and present it. Schedules the next
    /// pull when `schedule` is set and the frame is not terminal.
    fn pull(&mut self, now: Instant, schedule: bool) -> bool {
        let Some(ctx) = self.context.as_mut() else {
            return false;
        };

        match ctx.sequence.next_step() {
            Some(Step::Continue(frame)) => {
                ctx.delivered += 1;
                trace!(run_id = ctx.run_id, frame = ctx.delivered, "frame");
                let view = (ctx.meta.visualize)(&frame, false);
                if schedule && !ctx.paused {
                    self.scheduled = Some(Scheduled {
                        run_id: ctx.run_id,
                        due: now + delay_for(&frame, self.default_delay),
                    });
                }
                self.canvas.present(view);
            }
            Some(Step::Done(frame)) => {
                ctx.delivered += 1;
                let view = (ctx.meta.visualize)(&frame, true);
                let frames = ctx.delivered;
                let algorithm = ctx.meta.id;
                debug!(algorithm, run_id = ctx.run_id, frames, "run finished");

                self.scheduled = None;
                self.context = None;
                self.completion = frame.outcome.clone().map(|outcome| Completion {
                    algorithm,
                    outcome,
                    message: frame.completion_message.clone(),
                    frames,
                });
                self.canvas.present(view);
            }
            None => {
                // exhausted without a terminal frame
                self.scheduled = None;
                self.context = None;
                return false;
            }
        }
        true
    }
}

/// Frame speed, or `fallback` when the frame has none (or zero)
fn delay_for(frame: &Frame, fallback: Duration) -> Duration {
    frame
        .speed
        .filter(|speed| !speed.is_zero())
        .unwrap_or(fallback)
}
