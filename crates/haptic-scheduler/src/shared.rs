//! Thread-safe scheduler handle for multi-threaded hosts.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use haptic_core::clock::FrameClock;
use haptic_core::device::{DeviceKey, ImpulseSink};
use haptic_core::pattern::Pattern;
use haptic_core::scheduler::HapticScheduler;

use crate::scheduler::{Scheduler, TickSummary};

/// A cloneable handle to a [`Scheduler`] guarded by a mutex.
///
/// Request handlers on any thread enqueue through the handle while the frame
/// loop ticks it.
#[derive(Debug)]
pub struct SharedScheduler<D> {
    inner: Arc<Mutex<Scheduler<D>>>,
}

impl<D> Clone for SharedScheduler<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D: DeviceKey> SharedScheduler<D> {
    /// Wraps a new idle scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::from(Scheduler::new())
    }

    // A panic while holding the lock cannot leave the queues half-updated in
    // a way that breaks the next tick, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, Scheduler<D>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with exclusive access to the scheduler.
    pub fn with<R>(&self, f: impl FnOnce(&mut Scheduler<D>) -> R) -> R {
        f(&mut self.lock())
    }

    /// See [`Scheduler::start`].
    pub fn start(&self) {
        self.lock().start();
    }

    /// See [`Scheduler::shutdown`].
    pub fn shutdown(&self) {
        self.lock().shutdown();
    }

    /// See [`Scheduler::is_running`].
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.lock().is_running()
    }

    /// See [`Scheduler::tick`].
    pub fn tick(&self, clock: &dyn FrameClock, sink: &mut dyn ImpulseSink<D>) -> TickSummary {
        self.lock().tick(clock, sink)
    }

    /// See [`Scheduler::current_strength`].
    #[must_use]
    pub fn current_strength(&self, device: &D) -> f32 {
        self.lock().current_strength(device)
    }

    /// Copy of the last tick's per-device output.
    #[must_use]
    pub fn strengths(&self) -> HashMap<D, f32> {
        self.lock().strengths().clone()
    }

    /// See [`Scheduler::running_count`].
    #[must_use]
    pub fn running_count(&self) -> usize {
        self.lock().running_count()
    }
}

impl<D: DeviceKey> Default for SharedScheduler<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DeviceKey> From<Scheduler<D>> for SharedScheduler<D> {
    fn from(scheduler: Scheduler<D>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(scheduler)),
        }
    }
}

impl<D: DeviceKey> HapticScheduler<D> for SharedScheduler<D> {
    fn schedule_vibration(&mut self, device: D, strength01: f32) {
        self.lock().schedule_vibration(device, strength01);
    }

    fn schedule_pattern(
        &mut self,
        device: D,
        pattern: Arc<Pattern>,
        strength_multiplier: f32,
        clock: &dyn FrameClock,
    ) {
        self.lock()
            .schedule_pattern(device, pattern, strength_multiplier, clock);
    }
}
