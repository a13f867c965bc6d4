//! A deterministic, discrete-tick simulator of classic single-CPU
//! scheduling algorithms.
//!
//! The simulator runs a fixed workload of processes through five
//! algorithms — FCFS, SJF, STCF, round robin and non-preemptive
//! priority with aging — and reports per-process wait and turnaround
//! times, dispatch sequences, context-switch counts, and a ranking of
//! the algorithms against each other. Runs are fully deterministic:
//! the same workload always produces the same traces and metrics.
//!
//! The main pieces:
//!
//! - [`Workload`]: parses and validates process descriptions
//!   (`burst priority arrival`, one per line).
//! - [`ReadyQueue`]: the ordered ready container; one of four insertion
//!   disciplines per run, one removal contract.
//! - [`Algorithm`]: pairs an insertion discipline with a preemption
//!   predicate.
//! - [`Simulator`]: the shared per-tick engine loop.
//! - [`Summary`] / [`Comparison`]: per-run aggregates and the
//!   cross-algorithm ranking.
//! - [`report`]: plain-text rendering of tick logs, summary tables and
//!   the overall comparison.
//!
//! ```
//! use schedsim::{Algorithm, ProcessSpec, Simulator, Workload};
//!
//! let workload = Workload::from_specs(vec![
//!     ProcessSpec { burst: 5, priority: 1, arrival: 0 },
//!     ProcessSpec { burst: 3, priority: 2, arrival: 1 },
//! ]);
//! let results = Simulator::default().run_all(&workload);
//!
//! assert_eq!(results.len(), 5);
//! assert_eq!(results[0].algorithm, Algorithm::Fcfs);
//! assert_eq!(results[0].summary.context_switches, 2);
//! ```

mod engine;
mod policy;
mod process;
mod queue;
pub mod report;
mod stats;
mod trace;
mod types;
mod workload;

pub use engine::{RunResult, SimConfig, Simulator};
pub use policy::Algorithm;
pub use process::{ProcState, Process};
pub use queue::ReadyQueue;
pub use stats::{Comparison, ProcessMetrics, Summary};
pub use trace::{CpuState, TickEvent, Trace};
pub use types::{Pid, Tick, AGING_INTERVAL, DEFAULT_QUANTUM};
pub use workload::{ProcessSpec, Workload};
