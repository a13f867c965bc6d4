//! The scheduling engine: a per-tick simulation loop.
//!
//! Each algorithm run advances a discrete clock from tick 0 until every
//! process has terminated. Within a tick, admission strictly precedes
//! the dispatch decision; ticks are strictly sequential. The loop is
//! parameterized by [`Algorithm`], which supplies the ready-queue
//! insertion discipline and the preemption predicate — the loop itself
//! is shared by all five algorithms.

use log::debug;

use crate::policy::Algorithm;
use crate::process::{ProcState, Process};
use crate::queue::ReadyQueue;
use crate::stats::{ProcessMetrics, Summary};
use crate::trace::{CpuState, TickEvent, Trace};
use crate::types::{Pid, Tick, AGING_INTERVAL, DEFAULT_QUANTUM};
use crate::workload::Workload;

/// Engine configuration shared by all runs of one simulation.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// Round-robin time quantum, in ticks.
    pub quantum: Tick,
    /// Aging period for priority scheduling, in ticks.
    pub aging_interval: Tick,
    /// Capture a [`TickEvent`] at every tick divisible by this value.
    /// `None` disables the tick log.
    pub tick_log_interval: Option<Tick>,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            quantum: DEFAULT_QUANTUM,
            aging_interval: AGING_INTERVAL,
            tick_log_interval: None,
        }
    }
}

/// Everything one algorithm run produces.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub algorithm: Algorithm,
    pub summary: Summary,
    pub metrics: Vec<ProcessMetrics>,
    pub trace: Trace,
    /// Interval-sampled simulation snapshots, empty unless
    /// [`SimConfig::tick_log_interval`] is set.
    pub tick_log: Vec<TickEvent>,
}

/// The main simulator.
pub struct Simulator {
    config: SimConfig,
}

impl Simulator {
    pub fn new(config: SimConfig) -> Self {
        Simulator { config }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Simulate every algorithm over the workload, in enumeration
    /// order, fully resetting process state before each run.
    pub fn run_all(&self, workload: &Workload) -> Vec<RunResult> {
        let mut processes = workload.processes();
        Algorithm::ALL
            .iter()
            .map(|&algo| {
                for p in &mut processes {
                    p.reset();
                }
                self.run(algo, &mut processes)
            })
            .collect()
    }

    /// Simulate one algorithm over a reset process arena.
    ///
    /// A zero-process arena is a degenerate success: the loop never
    /// runs and the summary reports zero averages.
    pub fn run(&self, algo: Algorithm, processes: &mut [Process]) -> RunResult {
        let mut now: Tick = 0;
        let mut completed: usize = 0;
        let mut active: Option<Pid> = None;
        let mut queue = ReadyQueue::new();
        let mut trace = Trace::new();
        let mut tick_log = Vec::new();

        debug!("{algo}: simulating {} processes", processes.len());

        while completed < processes.len() {
            self.admit_arrivals(algo, now, processes, &mut queue);

            let sample = self
                .config
                .tick_log_interval
                .is_some_and(|k| now % k == 0);

            match active {
                None if !queue.is_empty() => {
                    if sample {
                        let head = queue.front().expect("non-empty queue has no head");
                        tick_log.push(TickEvent {
                            tick: now,
                            state: CpuState::Loading {
                                pid: head,
                                burst: processes[head.index()].burst,
                            },
                            ready: queue.ordered_pids(),
                        });
                    }
                    active = Some(dispatch(&mut queue, processes, now, &mut trace));
                }
                None => {
                    // CPU idle: nothing ready this tick.
                    if sample {
                        tick_log.push(TickEvent {
                            tick: now,
                            state: CpuState::Idle,
                            ready: Vec::new(),
                        });
                    }
                }
                Some(pid) => {
                    let done = processes[pid.index()].is_done();
                    let head = queue.front();

                    if done {
                        if sample {
                            tick_log.push(TickEvent {
                                tick: now,
                                state: CpuState::Finishing {
                                    pid,
                                    next: head.map(|h| (h, processes[h.index()].remaining)),
                                },
                                ready: queue.ordered_pids(),
                            });
                        }
                        terminate(&mut processes[pid.index()], now);
                        completed += 1;
                        active = if head.is_some() {
                            Some(dispatch(&mut queue, processes, now, &mut trace))
                        } else {
                            None
                        };
                    } else if head.is_some_and(|h| {
                        algo.preempts(
                            &processes[pid.index()],
                            &processes[h.index()],
                            now,
                            self.config.quantum,
                        )
                    }) {
                        let next = head.expect("preemption check passed on empty queue");
                        if sample {
                            tick_log.push(TickEvent {
                                tick: now,
                                state: CpuState::Preempting {
                                    pid,
                                    remaining: processes[pid.index()].remaining,
                                    next,
                                    next_remaining: processes[next.index()].remaining,
                                },
                                ready: queue.ordered_pids(),
                            });
                        }
                        debug!("{algo}: t={now} preempting {pid} for {next}");
                        processes[pid.index()].state = ProcState::Waiting;
                        active = Some(dispatch(&mut queue, processes, now, &mut trace));
                    } else {
                        if sample {
                            tick_log.push(TickEvent {
                                tick: now,
                                state: CpuState::Running {
                                    pid,
                                    remaining: processes[pid.index()].remaining,
                                },
                                ready: queue.ordered_pids(),
                            });
                        }
                        processes[pid.index()].remaining -= 1;
                    }
                }
            }

            now += 1;
        }

        let metrics: Vec<ProcessMetrics> = processes.iter().map(Process::metrics).collect();
        let summary = Summary::new(algo, &metrics, &trace);
        debug!(
            "{algo}: done at t={now}, avg_wait={:.2} avg_turnaround={:.2} switches={}",
            summary.avg_wait, summary.avg_turnaround, summary.context_switches
        );

        RunResult {
            algorithm: algo,
            summary,
            metrics,
            trace,
            tick_log,
        }
    }

    /// Admission scan, in PID order: every arrived process in New or
    /// Waiting state enters the ready queue under the algorithm's
    /// discipline. For priority scheduling, a Waiting process whose
    /// time since last dispatch is a positive multiple of the aging
    /// interval gains one priority level first.
    fn admit_arrivals(
        &self,
        algo: Algorithm,
        now: Tick,
        processes: &mut [Process],
        queue: &mut ReadyQueue,
    ) {
        for p in processes.iter_mut() {
            if p.arrival > now {
                continue;
            }
            if algo == Algorithm::Priority && p.state == ProcState::Waiting {
                if let Some(last) = p.last_start {
                    if now > last && (now - last) % self.config.aging_interval == 0 {
                        p.priority -= 1;
                        debug!("{algo}: t={now} aged {} to priority {}", p.pid, p.priority);
                    }
                }
            }
            if matches!(p.state, ProcState::New | ProcState::Waiting) {
                algo.admit(queue, p);
                p.state = ProcState::Ready;
            }
        }
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

/// Move the queue head onto the CPU: mark it running, stamp its start
/// times, charge its first tick, and record the dispatch (every
/// dispatch counts as a context switch, including the first load of a
/// run).
fn dispatch(
    queue: &mut ReadyQueue,
    processes: &mut [Process],
    now: Tick,
    trace: &mut Trace,
) -> Pid {
    let pid = queue
        .pop_front()
        .expect("dispatch from an empty ready queue");
    let p = &mut processes[pid.index()];
    p.state = ProcState::Running;
    if p.start_time.is_none() {
        p.start_time = Some(now);
    }
    p.last_start = Some(now);
    p.remaining -= 1;
    trace.record_dispatch(pid);
    pid
}

fn terminate(p: &mut Process, now: Tick) {
    p.state = ProcState::Terminated;
    p.end_time = Some(now);
}
