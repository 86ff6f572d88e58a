//! Shared application state.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use haptic_core::clock::FrameClock;
use haptic_playback::{GradualPlayback, PatternLibrary};
use haptic_scheduler::SharedScheduler;

/// Gradual playback sessions keyed by pattern name.
pub type GradualSessions = HashMap<String, GradualPlayback<String>>;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Scheduler ticked by the frame loop.
    pub scheduler: SharedScheduler<String>,
    /// Patterns available to the API.
    pub library: Arc<PatternLibrary>,
    /// Frame clock advanced by the frame loop.
    pub clock: Arc<dyn FrameClock>,
    gradual: Arc<Mutex<GradualSessions>>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        scheduler: SharedScheduler<String>,
        library: Arc<PatternLibrary>,
        clock: Arc<dyn FrameClock>,
    ) -> Self {
        Self {
            scheduler,
            library,
            clock,
            gradual: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Locks the gradual playback sessions.
    pub fn gradual_sessions(&self) -> MutexGuard<'_, GradualSessions> {
        self.gradual.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
