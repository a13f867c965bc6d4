//! Per-run summaries and the cross-algorithm comparison.

use serde::Serialize;

use crate::policy::Algorithm;
use crate::trace::Trace;
use crate::types::Pid;

/// Final wait and turnaround times for one process in one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessMetrics {
    pub pid: Pid,
    pub wait: u64,
    pub turnaround: u64,
}

/// Aggregate results for one algorithm run.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub algorithm: Algorithm,
    pub avg_wait: f64,
    pub avg_turnaround: f64,
    /// Equal to the execution trace length.
    pub context_switches: usize,
    /// The execution trace: dispatched PIDs in order.
    pub sequence: Vec<Pid>,
}

impl Summary {
    /// Aggregate a completed run. A zero-process run reports 0.0
    /// averages rather than dividing by zero.
    pub fn new(algorithm: Algorithm, metrics: &[ProcessMetrics], trace: &Trace) -> Self {
        let (avg_wait, avg_turnaround) = if metrics.is_empty() {
            (0.0, 0.0)
        } else {
            let n = metrics.len() as f64;
            let wait: u64 = metrics.iter().map(|m| m.wait).sum();
            let turnaround: u64 = metrics.iter().map(|m| m.turnaround).sum();
            (wait as f64 / n, turnaround as f64 / n)
        };
        Summary {
            algorithm,
            avg_wait,
            avg_turnaround,
            context_switches: trace.len(),
            sequence: trace.dispatches().to_vec(),
        }
    }
}

/// Cross-algorithm rankings: the algorithms sorted ascending by each
/// metric independently, ties broken by enumeration order.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub by_wait: Vec<Algorithm>,
    pub by_turnaround: Vec<Algorithm>,
    pub by_context_switches: Vec<Algorithm>,
}

impl Comparison {
    /// Rank summaries. The input is expected in enumeration order, so
    /// the stable sorts fall back to it on ties.
    pub fn rank(summaries: &[Summary]) -> Self {
        let mut by_wait: Vec<&Summary> = summaries.iter().collect();
        by_wait.sort_by(|a, b| a.avg_wait.total_cmp(&b.avg_wait));

        let mut by_turnaround: Vec<&Summary> = summaries.iter().collect();
        by_turnaround.sort_by(|a, b| a.avg_turnaround.total_cmp(&b.avg_turnaround));

        let mut by_context_switches: Vec<&Summary> = summaries.iter().collect();
        by_context_switches.sort_by(|a, b| a.context_switches.cmp(&b.context_switches));

        Comparison {
            by_wait: by_wait.iter().map(|s| s.algorithm).collect(),
            by_turnaround: by_turnaround.iter().map(|s| s.algorithm).collect(),
            by_context_switches: by_context_switches.iter().map(|s| s.algorithm).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(algorithm: Algorithm, avg_wait: f64, avg_turnaround: f64, cs: usize) -> Summary {
        Summary {
            algorithm,
            avg_wait,
            avg_turnaround,
            context_switches: cs,
            sequence: Vec::new(),
        }
    }

    #[test]
    fn test_summary_averages() {
        let metrics = [
            ProcessMetrics { pid: Pid(0), wait: 0, turnaround: 5 },
            ProcessMetrics { pid: Pid(1), wait: 4, turnaround: 7 },
            ProcessMetrics { pid: Pid(2), wait: 6, turnaround: 7 },
        ];
        let mut trace = Trace::default();
        for pid in [Pid(0), Pid(1), Pid(2)] {
            trace.record_dispatch(pid);
        }

        let s = Summary::new(Algorithm::Fcfs, &metrics, &trace);
        assert!((s.avg_wait - 10.0 / 3.0).abs() < 1e-9);
        assert!((s.avg_turnaround - 19.0 / 3.0).abs() < 1e-9);
        assert_eq!(s.context_switches, 3);
        assert_eq!(s.sequence, vec![Pid(0), Pid(1), Pid(2)]);
    }

    #[test]
    fn test_summary_zero_processes() {
        let s = Summary::new(Algorithm::Sjf, &[], &Trace::default());
        assert_eq!(s.avg_wait, 0.0);
        assert_eq!(s.avg_turnaround, 0.0);
        assert_eq!(s.context_switches, 0);
    }

    #[test]
    fn test_ranking_orders_ascending() {
        let summaries = vec![
            summary(Algorithm::Fcfs, 5.0, 9.0, 3),
            summary(Algorithm::Sjf, 2.0, 6.0, 3),
            summary(Algorithm::Stcf, 1.5, 5.5, 5),
            summary(Algorithm::RoundRobin, 6.0, 10.0, 8),
            summary(Algorithm::Priority, 4.0, 8.0, 3),
        ];

        let c = Comparison::rank(&summaries);
        assert_eq!(
            c.by_wait,
            vec![
                Algorithm::Stcf,
                Algorithm::Sjf,
                Algorithm::Priority,
                Algorithm::Fcfs,
                Algorithm::RoundRobin,
            ]
        );
        assert_eq!(c.by_context_switches[4], Algorithm::RoundRobin);
    }

    #[test]
    fn test_ranking_ties_keep_enumeration_order() {
        let summaries = vec![
            summary(Algorithm::Fcfs, 3.0, 7.0, 4),
            summary(Algorithm::Sjf, 3.0, 7.0, 4),
            summary(Algorithm::Stcf, 3.0, 7.0, 4),
            summary(Algorithm::RoundRobin, 3.0, 7.0, 4),
            summary(Algorithm::Priority, 3.0, 7.0, 4),
        ];

        let c = Comparison::rank(&summaries);
        assert_eq!(c.by_wait, Algorithm::ALL.to_vec());
        assert_eq!(c.by_turnaround, Algorithm::ALL.to_vec());
        assert_eq!(c.by_context_switches, Algorithm::ALL.to_vec());
    }
}
