use std::time::{Duration, Instant};

/// Why a commit was scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitReason {
    /// Debounced edit.
    Autosave,
    /// The user asked to save.
    ExplicitSave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingCommit {
    pub deadline: Instant,
    pub reason: CommitReason,
}

/// A single-slot cancellable timer. At most one commit is pending at a time;
/// arming replaces whatever was pending.
#[derive(Debug, Default)]
pub struct DebounceTimer {
    pending: Option<PendingCommit>,
}

impl DebounceTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer to fire `delay` after `now`. Returns the commit it replaced.
    pub fn arm(
        &mut self,
        now: Instant,
        delay: Duration,
        reason: CommitReason,
    ) -> Option<PendingCommit> {
        self.pending.replace(PendingCommit {
            deadline: now + delay,
            reason,
        })
    }

    pub fn cancel(&mut self) -> Option<PendingCommit> {
        self.pending.take()
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.deadline)
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.pending.is_some_and(|p| now >= p.deadline)
    }

    /// Disarms and returns the pending commit if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<PendingCommit> {
        if self.is_due(now) {
            self.pending.take()
        } else {
            None
        }
    }

    /// Disarms and returns the pending commit regardless of its deadline.
    pub fn take(&mut self) -> Option<PendingCommit> {
        self.pending.take()
    }
}
