//! Input debouncing
//!
//! Every keystroke reschedules the pending search; only the last schedule
//! within the quiet period ever fires.

use std::time::Duration;

/// Identifies one scheduled firing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebounceTicket(u64);

/// Environment timer primitive
pub trait Scheduler {
    /// What gets delivered when the delay elapses
    type Job;
    type Handle;

    fn schedule(&mut self, delay: Duration, job: Self::Job) -> Self::Handle;
    fn cancel(&mut self, handle: Self::Handle);
}

pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay: Duration,
    pending: Option<(DebounceTicket, S::Handle)>,
    next_ticket: u64,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            pending: None,
            next_ticket: 0,
        }
    }

    /// Cancel whatever is pending and schedule a fresh job.
    pub fn trigger<F>(&mut self, make_job: F) -> DebounceTicket
    where
        F: FnOnce(DebounceTicket) -> S::Job,
    {
        self.cancel();

        self.next_ticket += 1;
        let ticket = DebounceTicket(self.next_ticket);
        let handle = self.scheduler.schedule(self.delay, make_job(ticket));
        self.pending = Some((ticket, handle));
        ticket
    }

    /// Drop the pending job, if any.
    pub fn cancel(&mut self) {
        if let Some((ticket, handle)) = self.pending.take() {
            tracing::debug!("Debounce {:?} superseded", ticket);
            self.scheduler.cancel(handle);
        }
    }

    /// Called when a scheduled job is delivered. Returns `true` if it is the
    /// latest one and should run.
    pub fn fire(&mut self, ticket: DebounceTicket) -> bool {
        match &self.pending {
            Some((pending, _)) if *pending == ticket => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[cfg(test)]
    pub fn pending_ticket(&self) -> Option<DebounceTicket> {
        self.pending.as_ref().map(|(ticket, _)| *ticket)
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
