//! Asset readiness barrier.
//!
//! Counts settled image loads (success or failure alike) and flips `ready`
//! exactly once when every source has settled. After [`ReadinessGate::teardown`]
//! late callbacks are dropped without touching the state.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadinessPhase {
    Loading,
    Ready,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadinessState {
    pub total_sources: usize,
    pub settled_count: usize,
    pub ready: bool,
}

#[derive(Debug)]
pub struct ReadinessGate {
    state: ReadinessState,
    failed: usize,
    alive: bool,
}

impl ReadinessGate {
    pub fn new(total_sources: usize) -> Self {
        Self {
            state: ReadinessState {
                total_sources,
                settled_count: 0,
                ready: total_sources == 0,
            },
            failed: 0,
            alive: true,
        }
    }

    /// Record one settled load. Returns `true` only on the call that makes
    /// the gate ready.
    pub fn settle(&mut self, outcome: LoadOutcome) -> bool {
        if !self.alive || self.state.ready {
            return false;
        }
        self.state.settled_count += 1;
        if outcome == LoadOutcome::Failed {
            self.failed += 1;
        }
        if self.state.settled_count >= self.state.total_sources {
            self.state.ready = true;
            if self.failed > 0 {
                log::warn!(
                    "[assets] ready with {}/{} sources failed",
                    self.failed,
                    self.state.total_sources
                );
            }
            return true;
        }
        false
    }

    /// Owner is gone: freeze the state.
    pub fn teardown(&mut self) {
        self.alive = false;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.state.ready
    }

    #[inline]
    pub fn phase(&self) -> ReadinessPhase {
        if self.state.ready {
            ReadinessPhase::Ready
        } else {
            ReadinessPhase::Loading
        }
    }

    #[inline]
    pub fn failed_count(&self) -> usize {
        self.failed
    }

    #[inline]
    pub fn state(&self) -> &ReadinessState {
        &self.state
    }
}
