//! Execution trace and interval-sampled tick events.
//!
//! The trace records one entry per dispatch event (initial load,
//! post-termination reload, post-preemption reload) — not one per tick.
//! Its length is the run's context-switch count. Tick events are a
//! separate, purely observational stream sampled at a configurable
//! interval for the simulation log; capturing them never mutates
//! simulation state.

use crate::types::{Pid, Tick};

/// Ordered sequence of dispatched process IDs for one algorithm run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    dispatches: Vec<Pid>,
}

impl Trace {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_dispatch(&mut self, pid: Pid) {
        self.dispatches.push(pid);
    }

    /// All dispatch events in order.
    pub fn dispatches(&self) -> &[Pid] {
        &self.dispatches
    }

    /// Number of dispatch events, i.e. the context-switch count.
    pub fn len(&self) -> usize {
        self.dispatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dispatches.is_empty()
    }

    /// Count how many times a process was dispatched.
    pub fn schedule_count(&self, pid: Pid) -> usize {
        self.dispatches.iter().filter(|&&p| p == pid).count()
    }
}

/// What the CPU did on a sampled tick, captured before the tick's state
/// transition is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CpuState {
    /// No process running and none ready.
    Idle,
    /// The running process burns one tick.
    Running { pid: Pid, remaining: i64 },
    /// The CPU was idle and loads the queue head.
    Loading { pid: Pid, burst: u32 },
    /// The running process terminates; the queue head (if any) is
    /// loaded in its place.
    Finishing {
        pid: Pid,
        next: Option<(Pid, i64)>,
    },
    /// The running process is preempted in favor of the queue head.
    Preempting {
        pid: Pid,
        remaining: i64,
        next: Pid,
        next_remaining: i64,
    },
}

/// A sampled simulation snapshot: the tick, the CPU decision, and the
/// ready-queue contents in queue order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickEvent {
    pub tick: Tick,
    pub state: CpuState,
    pub ready: Vec<Pid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_count() {
        let mut trace = Trace::new();
        trace.record_dispatch(Pid(0));
        trace.record_dispatch(Pid(1));
        trace.record_dispatch(Pid(0));

        assert_eq!(trace.len(), 3);
        assert_eq!(trace.schedule_count(Pid(0)), 2);
        assert_eq!(trace.schedule_count(Pid(1)), 1);
        assert_eq!(trace.schedule_count(Pid(9)), 0);
        assert_eq!(trace.dispatches(), &[Pid(0), Pid(1), Pid(0)]);
    }
}
