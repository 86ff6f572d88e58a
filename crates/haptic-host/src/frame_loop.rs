//! Fixed-rate frame loop that ticks the shared scheduler.

use std::sync::Arc;
use std::time::Duration;

use haptic_core::clock::SystemFrameClock;
use haptic_core::device::ImpulseSink;
use haptic_scheduler::SharedScheduler;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Handle to a running frame loop task.
#[derive(Debug)]
pub struct FrameLoop {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl FrameLoop {
    /// Starts the scheduler and ticks it every `period` until stopped.
    ///
    /// Each frame advances `clock` once, so request handlers reading the
    /// clock between ticks all see the same frame time.
    pub fn spawn<S>(
        scheduler: SharedScheduler<String>,
        clock: Arc<SystemFrameClock>,
        sink: S,
        period: Duration,
    ) -> Self
    where
        S: ImpulseSink<String> + Send + 'static,
    {
        let (shutdown, receiver) = watch::channel(false);
        let task = tokio::spawn(run(scheduler, clock, sink, period, receiver));
        Self { shutdown, task }
    }

    /// Signals the loop to stop and waits for it to shut the scheduler down.
    pub async fn stop(self) {
        // The receiver only goes away once the task has already finished.
        let _ = self.shutdown.send(true);
        if let Err(e) = self.task.await {
            tracing::warn!(error = %e, "frame loop task ended abnormally");
        }
    }
}

async fn run<S>(
    scheduler: SharedScheduler<String>,
    clock: Arc<SystemFrameClock>,
    mut sink: S,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) where
    S: ImpulseSink<String>,
{
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    scheduler.start();
    tracing::info!(period_ms = period.as_millis(), "frame loop started");

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let frame = clock.advance();
                let summary = scheduler.tick(&frame, &mut sink);
                if summary.expired > 0 {
                    tracing::debug!(expired = summary.expired, now = frame.now, "running patterns expired");
                }
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }

    scheduler.shutdown();
    tracing::info!("frame loop stopped");
}
