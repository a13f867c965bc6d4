//! Scheduling algorithms and their queue/preemption disciplines.
//!
//! Each algorithm is the pairing of an insertion discipline for the
//! ready queue with a preemption predicate. The engine runs one
//! parameterized tick loop; everything algorithm-specific lives here.

use std::fmt;

use serde::Serialize;

use crate::process::Process;
use crate::queue::ReadyQueue;
use crate::types::Tick;

/// The five simulated scheduling algorithms, in their fixed run and
/// ranking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Algorithm {
    /// First-come-first-served: FIFO, non-preemptive.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest-job-first: ordered by burst time, non-preemptive.
    #[serde(rename = "SJF")]
    Sjf,
    /// Shortest-time-to-completion-first: ordered by time remaining,
    /// preempts whenever the queue head owes strictly less CPU time
    /// than the running process.
    #[serde(rename = "STCF")]
    Stcf,
    /// Round robin: FIFO, preempts on quantum expiry.
    #[serde(rename = "RR")]
    RoundRobin,
    /// Non-preemptive priority with aging.
    #[serde(rename = "NPP")]
    Priority,
}

impl Algorithm {
    /// All algorithms in enumeration order. Runs execute and rankings
    /// break ties in this order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Stcf,
        Algorithm::RoundRobin,
        Algorithm::Priority,
    ];

    /// Short identifier.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Stcf => "STCF",
            Algorithm::RoundRobin => "RR",
            Algorithm::Priority => "NPP",
        }
    }

    /// Display name used in reports.
    pub fn title(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Stcf => "STCF",
            Algorithm::RoundRobin => "Round Robin",
            Algorithm::Priority => "Priority",
        }
    }

    pub fn is_preemptive(self) -> bool {
        matches!(self, Algorithm::Stcf | Algorithm::RoundRobin)
    }

    /// Insert a process into the ready queue under this algorithm's
    /// ordering discipline.
    pub(crate) fn admit(self, queue: &mut ReadyQueue, process: &Process) {
        match self {
            Algorithm::Fcfs | Algorithm::RoundRobin => queue.insert_fifo(process),
            Algorithm::Sjf => queue.insert_by_burst(process),
            Algorithm::Stcf => queue.insert_by_remaining(process),
            Algorithm::Priority => queue.insert_by_priority(process),
        }
    }

    /// Whether the running process must yield the CPU to the queue head
    /// this tick.
    pub(crate) fn preempts(
        self,
        active: &Process,
        head: &Process,
        now: Tick,
        quantum: Tick,
    ) -> bool {
        match self {
            Algorithm::Stcf => head.remaining < active.remaining,
            Algorithm::RoundRobin => {
                let last = active
                    .last_start
                    .expect("running process was never dispatched");
                now - last >= quantum
            }
            _ => false,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
