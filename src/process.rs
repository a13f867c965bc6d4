//! Process records: static description plus per-run runtime state.

use crate::stats::ProcessMetrics;
use crate::types::{Pid, Tick};

/// The state a simulated process can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcState {
    /// Not yet arrived or admitted.
    New,
    /// Admitted to the ready queue. A process is in the queue iff it is
    /// in this state.
    Ready,
    /// Currently on the CPU. At most one process per tick.
    Running,
    /// Preempted; eligible for re-admission on the next admission scan.
    Waiting,
    /// Finished.
    Terminated,
}

/// One simulated process: immutable load-time description plus the
/// runtime state one algorithm run mutates.
#[derive(Debug, Clone)]
pub struct Process {
    pub pid: Pid,
    /// Total CPU time required, in ticks. Immutable after load.
    pub burst: u32,
    /// Lower value means higher priority. Mutable only through aging
    /// under priority scheduling.
    pub priority: i32,
    /// Tick at which the process becomes eligible. Immutable.
    pub arrival: Tick,
    /// Ticks of CPU time still owed. Decremented once per running tick;
    /// a zero-burst process briefly reaches -1 between its dispatch and
    /// the termination check.
    pub remaining: i64,
    /// Tick of the first dispatch. Set exactly once per run, so
    /// `start_time.is_none()` identifies a first dispatch.
    pub start_time: Option<Tick>,
    /// Tick of the most recent dispatch or resume.
    pub last_start: Option<Tick>,
    /// Tick of termination.
    pub end_time: Option<Tick>,
    pub state: ProcState,
}

impl Process {
    pub fn new(pid: Pid, burst: u32, priority: i32, arrival: Tick) -> Self {
        Process {
            pid,
            burst,
            priority,
            arrival,
            remaining: burst as i64,
            start_time: None,
            last_start: None,
            end_time: None,
            state: ProcState::New,
        }
    }

    /// Restore the runtime state for a fresh algorithm run.
    ///
    /// Priority is deliberately not restored: it is part of the static
    /// description, and the aging rule is the only mutation path.
    pub fn reset(&mut self) {
        self.remaining = self.burst as i64;
        self.start_time = None;
        self.last_start = None;
        self.end_time = None;
        self.state = ProcState::New;
    }

    /// Whether the process has consumed its full burst.
    pub fn is_done(&self) -> bool {
        self.remaining <= 0
    }

    /// Wait and turnaround times from the final timestamps.
    ///
    /// # Panics
    /// Panics if the process has not terminated; callers derive metrics
    /// only after a run completes.
    pub fn metrics(&self) -> ProcessMetrics {
        let end = self.end_time.expect("metrics for unterminated process");
        let turnaround = end - self.arrival;
        ProcessMetrics {
            pid: self.pid,
            wait: turnaround - self.burst as Tick,
            turnaround,
        }
    }
}
