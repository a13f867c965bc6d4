//! Plain-text report rendering.
//!
//! All rendering goes through `io::Write` sinks so the binary can point
//! it at stdout or an output file, and tests at a `Vec<u8>`.

use std::io::{self, Write};

use crate::engine::RunResult;
use crate::policy::Algorithm;
use crate::stats::Comparison;
use crate::trace::{CpuState, TickEvent};
use crate::types::Pid;

/// Render a PID sequence as `0-1-2`, or `Empty` when there is none.
pub fn sequence_string(pids: &[Pid]) -> String {
    if pids.is_empty() {
        return "Empty".to_string();
    }
    pids.iter()
        .map(|p| p.0.to_string())
        .collect::<Vec<_>>()
        .join("-")
}

/// Comparison rows align on tab stops; short names need an extra tab.
fn padded_name(algo: Algorithm) -> &'static str {
    match algo {
        Algorithm::Fcfs => "FCFS\t\t",
        Algorithm::Sjf => "SJF\t\t",
        Algorithm::Stcf => "STCF\t\t",
        Algorithm::RoundRobin => "Round Robin\t",
        Algorithm::Priority => "Priority\t",
    }
}

fn write_tick_event<W: Write>(out: &mut W, event: &TickEvent) -> io::Result<()> {
    writeln!(out, "t = {}", event.tick)?;
    match event.state {
        CpuState::Idle => {
            writeln!(out, "CPU: Idle, Waiting for a Process")?;
        }
        CpuState::Running { pid, remaining } => {
            writeln!(out, "CPU: Running Process {pid} (Remaining CPU Burst = {remaining})")?;
        }
        CpuState::Loading { pid, burst } => {
            writeln!(out, "CPU: Loading Process {pid} (CPU Burst = {burst})")?;
        }
        CpuState::Finishing { pid, next: Some((next, next_remaining)) } => {
            writeln!(
                out,
                "CPU: Finishing Process {pid}; Loading Process {next} (CPU Burst = {next_remaining})"
            )?;
        }
        CpuState::Finishing { pid, next: None } => {
            writeln!(out, "CPU: Finishing Process {pid}")?;
        }
        CpuState::Preempting { pid, remaining, next, next_remaining } => {
            writeln!(
                out,
                "CPU: Preempting Process {pid} (Remaining CPU Burst = {remaining}); \
                 Loading Process {next} (CPU Burst = {next_remaining})"
            )?;
        }
    }
    writeln!(out, "Ready Queue: {}", sequence_string(&event.ready))?;
    writeln!(out)
}

/// The interval tick log for one run: a section title followed by one
/// block per sampled tick.
pub fn write_tick_log<W: Write>(out: &mut W, result: &RunResult) -> io::Result<()> {
    writeln!(out, "***** {} Scheduling *****", result.algorithm.title())?;
    for event in &result.tick_log {
        write_tick_event(out, event)?;
    }
    Ok(())
}

/// The per-algorithm summary block: wait/turnaround table, averages,
/// dispatch sequence, context-switch count.
pub fn write_run_report<W: Write>(out: &mut W, result: &RunResult) -> io::Result<()> {
    writeln!(out, "\n***************************************************")?;
    writeln!(
        out,
        "{} Summary (WT = Wait Time, TT = Turnaround Time)\n",
        result.algorithm.title()
    )?;

    writeln!(out, "PID\tWT\tTT")?;
    for m in &result.metrics {
        writeln!(out, "{}\t{}\t{}", m.pid, m.wait, m.turnaround)?;
    }
    writeln!(
        out,
        "AVG\t{:4.2}\t{:4.2}\n",
        result.summary.avg_wait, result.summary.avg_turnaround
    )?;

    writeln!(
        out,
        "Process Sequence: {}",
        sequence_string(result.trace.dispatches())
    )?;
    writeln!(out, "Context Switches: {}\n\n", result.summary.context_switches)
}

/// The overall summary: each ranking lists all five algorithms in
/// ascending metric order.
pub fn write_comparison<W: Write>(
    out: &mut W,
    results: &[RunResult],
    comparison: &Comparison,
) -> io::Result<()> {
    let summary_of = |algo: Algorithm| {
        &results
            .iter()
            .find(|r| r.algorithm == algo)
            .expect("comparison references an algorithm with no run")
            .summary
    };

    writeln!(out, "***** OVERALL SUMMARY *****\n")?;

    writeln!(out, "Wait Time Comparison")?;
    for &algo in &comparison.by_wait {
        writeln!(out, "{}{:4.2}", padded_name(algo), summary_of(algo).avg_wait)?;
    }

    writeln!(out, "\nTurnaround Time Comparison")?;
    for &algo in &comparison.by_turnaround {
        writeln!(out, "{}{:4.2}", padded_name(algo), summary_of(algo).avg_turnaround)?;
    }

    writeln!(out, "\nContext Switch Comparison")?;
    for &algo in &comparison.by_context_switches {
        writeln!(out, "{}{}", padded_name(algo), summary_of(algo).context_switches)?;
    }
    Ok(())
}

/// The complete report: interleaved tick logs and summaries for every
/// run, then the overall comparison.
pub fn write_full_report<W: Write>(out: &mut W, results: &[RunResult]) -> io::Result<()> {
    for result in results {
        if !result.tick_log.is_empty() {
            write_tick_log(out, result)?;
        }
        write_run_report(out, result)?;
    }

    let summaries: Vec<_> = results.iter().map(|r| r.summary.clone()).collect();
    write_comparison(out, results, &Comparison::rank(&summaries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{SimConfig, Simulator};
    use crate::workload::{ProcessSpec, Workload};

    fn sample_results(interval: Option<u64>) -> Vec<RunResult> {
        let workload = Workload::from_specs(vec![
            ProcessSpec { burst: 5, priority: 1, arrival: 0 },
            ProcessSpec { burst: 3, priority: 2, arrival: 1 },
            ProcessSpec { burst: 1, priority: 1, arrival: 2 },
        ]);
        let config = SimConfig {
            tick_log_interval: interval,
            ..Default::default()
        };
        Simulator::new(config).run_all(&workload)
    }

    fn render<F: Fn(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_sequence_string() {
        assert_eq!(sequence_string(&[Pid(0), Pid(1), Pid(2)]), "0-1-2");
        assert_eq!(sequence_string(&[Pid(4)]), "4");
        assert_eq!(sequence_string(&[]), "Empty");
    }

    #[test]
    fn test_run_report_table() {
        let results = sample_results(None);
        let text = render(|buf| write_run_report(buf, &results[0]));

        assert!(text.contains("FCFS Summary (WT = Wait Time, TT = Turnaround Time)"));
        assert!(text.contains("PID\tWT\tTT"));
        assert!(text.contains("0\t0\t5"));
        assert!(text.contains("1\t4\t7"));
        assert!(text.contains("2\t6\t7"));
        assert!(text.contains("AVG\t3.33\t6.33"));
        assert!(text.contains("Process Sequence: 0-1-2"));
        assert!(text.contains("Context Switches: 3"));
    }

    #[test]
    fn test_tick_log_lines() {
        let results = sample_results(Some(1));
        let text = render(|buf| write_tick_log(buf, &results[0]));

        assert!(text.starts_with("***** FCFS Scheduling *****\n"));
        // The queue snapshot is taken before the head is popped, so the
        // loading process still shows in the ready line.
        assert!(text.contains("t = 0\nCPU: Loading Process 0 (CPU Burst = 5)\nReady Queue: 0\n"));
        // A blank line separates consecutive tick blocks.
        assert!(text.contains("Ready Queue: 0\n\nt = 1\nCPU: Running Process 0 (Remaining CPU Burst = 4)\nReady Queue: 1\n"));
        // P0 finishes at t=5 with P1 at the queue head.
        assert!(text.contains("CPU: Finishing Process 0; Loading Process 1 (CPU Burst = 3)"));
    }

    #[test]
    fn test_full_report_shape() {
        let results = sample_results(Some(1));
        let text = render(|buf| write_full_report(buf, &results));

        for title in ["FCFS", "SJF", "STCF", "Round Robin", "Priority"] {
            assert!(text.contains(&format!("***** {title} Scheduling *****")), "{title}");
            assert!(text.contains(&format!("{title} Summary")), "{title}");
        }
        assert!(text.contains("***** OVERALL SUMMARY *****"));
        assert!(text.contains("Wait Time Comparison"));
        assert!(text.contains("Turnaround Time Comparison"));
        assert!(text.contains("Context Switch Comparison"));
        // Round robin preempts here, so a preemption line shows up.
        assert!(text.contains("CPU: Preempting Process"));
    }

    #[test]
    fn test_report_without_tick_log() {
        let results = sample_results(None);
        let text = render(|buf| write_full_report(buf, &results));

        assert!(!text.contains("t = "));
        assert!(text.contains("***** OVERALL SUMMARY *****"));
    }
}
