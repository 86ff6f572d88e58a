//! The per-frame aggregating scheduler.

use std::collections::HashMap;
use std::sync::Arc;

use haptic_core::clock::{FrameClock, FrameTime};
use haptic_core::device::{DeviceKey, Impulse, ImpulseSink};
use haptic_core::pattern::Pattern;
use haptic_core::scheduler::HapticScheduler;

use crate::requests::{RunningPattern, VibrationRequest};

/// Lifecycle state of a [`Scheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Nothing scheduled yet, or shut down. Ticks are ignored.
    Idle,
    /// Ticks aggregate and emit output.
    Running,
}

/// Counters describing a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickSummary {
    /// Devices that received an impulse.
    pub devices: usize,
    /// Requests aggregated, including those derived from running patterns.
    pub requests: usize,
    /// Running patterns removed because they played to the end.
    pub expired: usize,
}

/// Aggregates vibration requests and running patterns into one output
/// strength per device per frame.
///
/// Callers enqueue work through [`HapticScheduler`]; the host's frame loop
/// calls [`Scheduler::tick`] once per rendered frame.
#[derive(Debug)]
pub struct Scheduler<D> {
    state: SchedulerState,
    pending: Vec<VibrationRequest<D>>,
    running: Vec<RunningPattern<D>>,
    output: HashMap<D, f32>,
}

impl<D: DeviceKey> Scheduler<D> {
    /// Creates an idle scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: SchedulerState::Idle,
            pending: Vec::new(),
            running: Vec::new(),
            output: HashMap::new(),
        }
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Returns `true` once the scheduler has been started.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    /// Starts processing ticks. Starting twice logs a warning and does nothing.
    pub fn start(&mut self) {
        if self.is_running() {
            tracing::warn!("haptic scheduler was started twice, ignoring");
            return;
        }
        self.state = SchedulerState::Running;
        tracing::debug!("haptic scheduler started");
    }

    /// Drops all queued work and output and returns to [`SchedulerState::Idle`].
    ///
    /// Scheduling anything afterwards starts the scheduler again.
    pub fn shutdown(&mut self) {
        tracing::debug!(
            pending = self.pending.len(),
            running = self.running.len(),
            "haptic scheduler shut down"
        );
        self.pending.clear();
        self.running.clear();
        self.output.clear();
        self.state = SchedulerState::Idle;
    }

    /// Output strength aggregated for `device` during the last tick, or `0`.
    #[must_use]
    pub fn current_strength(&self, device: &D) -> f32 {
        self.output.get(device).copied().unwrap_or(0.0)
    }

    /// All devices that received output during the last tick.
    #[must_use]
    pub fn strengths(&self) -> &HashMap<D, f32> {
        &self.output
    }

    /// Number of requests waiting for the next tick.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Number of running pattern playbacks.
    #[must_use]
    pub fn running_count(&self) -> usize {
        self.running.len()
    }

    /// Number of running pattern playbacks targeting `device`.
    #[must_use]
    pub fn running_on(&self, device: &D) -> usize {
        self.running.iter().filter(|r| &r.device == device).count()
    }

    /// Runs one frame of aggregation and emits the result to `sink`.
    ///
    /// Does nothing while the scheduler is idle.
    pub fn tick(&mut self, clock: &dyn FrameClock, sink: &mut dyn ImpulseSink<D>) -> TickSummary {
        if !self.is_running() {
            return TickSummary::default();
        }
        let frame = clock.frame();

        self.output.clear();
        let expired = self.schedule_running_patterns(frame);

        let requests = self.pending.len();
        for request in self.pending.drain(..) {
            let strength = self.output.entry(request.device).or_insert(0.0);
            *strength = (*strength + request.strength).clamp(0.0, 1.0);
        }

        for (device, strength) in &self.output {
            tracing::trace!(?device, strength, "sending haptic impulse");
            sink.send_impulse(
                device,
                Impulse {
                    strength: *strength,
                    duration: frame.delta_time,
                },
            );
        }

        TickSummary {
            devices: self.output.len(),
            requests,
            expired,
        }
    }

    /// Converts running patterns into this frame's requests and drops the
    /// ones that have finished. Returns how many were dropped.
    fn schedule_running_patterns(&mut self, frame: FrameTime) -> usize {
        let pending = &mut self.pending;
        let before = self.running.len();

        self.running.retain(|running| {
            if running.is_finished(frame.now) {
                tracing::debug!(
                    device = ?running.device,
                    pattern = running.pattern.name(),
                    "running pattern finished"
                );
                return false;
            }
            let strength = running.strength_for_frame(frame.now, frame.delta_time);
            pending.push(VibrationRequest::new(running.device.clone(), strength));
            true
        });

        before - self.running.len()
    }

    fn ensure_started(&mut self) {
        if !self.is_running() {
            self.start();
        }
    }
}

impl<D: DeviceKey> Default for Scheduler<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DeviceKey> HapticScheduler<D> for Scheduler<D> {
    fn schedule_vibration(&mut self, device: D, strength01: f32) {
        self.ensure_started();
        self.pending.push(VibrationRequest::new(device, strength01));
    }

    fn schedule_pattern(
        &mut self,
        device: D,
        pattern: Arc<Pattern>,
        strength_multiplier: f32,
        clock: &dyn FrameClock,
    ) {
        self.ensure_started();
        self.running.push(RunningPattern {
            device,
            pattern,
            start_time: clock.now(),
            strength_multiplier,
        });
    }
}
