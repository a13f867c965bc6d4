//! Newtype wrappers and type aliases for domain concepts.
//!
//! A newtype for process identifiers prevents silent confusion with the
//! plain integer quantities (ticks, burst lengths) that flow through the
//! engine. Plain quantities use type aliases for self-documenting code
//! without the boilerplate of arithmetic trait impls.

use std::fmt;

use serde::Serialize;

/// Process identifier: index into the fixed process arena, assigned
/// 0..n-1 in workload input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Pid(pub u32);

impl Pid {
    /// The arena slot this PID refers to.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Simulated time, in discrete ticks.
pub type Tick = u64;

/// Round-robin time quantum, in ticks.
pub const DEFAULT_QUANTUM: Tick = 2;

/// Aging period for priority scheduling: a waiting process gains one
/// priority level at every boundary that is a positive multiple of this
/// many ticks past its last dispatch.
pub const AGING_INTERVAL: Tick = 25;
