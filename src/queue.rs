//! The ready queue: an ordered container of process references.
//!
//! Four insertion disciplines (FIFO, by burst time, by time remaining,
//! by priority) share one removal/peek contract. The queue stores PIDs
//! into the fixed process arena, never copies; keys are read from the
//! record at insertion time and are stable while the entry is queued.
//!
//! A queue instance is used with exactly one discipline per simulation
//! run; every algorithm admits through a single insertion function.
//! Mixing FIFO and keyed insertion would make the head ill-defined, so
//! it is enforced as an internal error.

use std::collections::{BTreeMap, VecDeque};

use crate::process::Process;
use crate::types::Pid;

/// The ordering mode of a ready queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QueueMode {
    /// No entries have been inserted yet — mode is undetermined.
    Empty,
    /// Entries are ordered FIFO.
    Fifo,
    /// Entries are ordered by an integer key (burst, remaining, or
    /// priority), ascending.
    Keyed,
}

/// An admission-ordered or key-ordered collection of ready processes.
#[derive(Debug)]
pub struct ReadyQueue {
    /// Key-ordered entries: (key, insertion_order) -> pid. The
    /// insertion counter breaks ties, placing a new entry after every
    /// existing entry with key less than or equal to its own.
    keyed_entries: BTreeMap<(i64, u64), Pid>,
    /// FIFO entries.
    fifo_entries: VecDeque<Pid>,
    /// Monotonic counter for insertion ordering.
    insertion_counter: u64,
    mode: QueueMode,
}

impl ReadyQueue {
    pub fn new() -> Self {
        ReadyQueue {
            keyed_entries: BTreeMap::new(),
            fifo_entries: VecDeque::new(),
            insertion_counter: 0,
            mode: QueueMode::Empty,
        }
    }

    /// Append to the tail. Used by FCFS and round robin.
    ///
    /// # Panics
    /// Panics if the queue already contains key-ordered entries.
    pub fn insert_fifo(&mut self, process: &Process) {
        assert!(
            self.mode != QueueMode::Keyed,
            "cannot insert FIFO entry into a key-ordered queue"
        );
        self.mode = QueueMode::Fifo;
        self.fifo_entries.push_back(process.pid);
    }

    /// Insert keeping ascending burst-time order. Used by SJF.
    pub fn insert_by_burst(&mut self, process: &Process) {
        self.insert_keyed(process.burst as i64, process.pid);
    }

    /// Insert keeping ascending time-remaining order. Used by STCF.
    pub fn insert_by_remaining(&mut self, process: &Process) {
        self.insert_keyed(process.remaining, process.pid);
    }

    /// Insert keeping ascending priority order (lower value first).
    /// Used by priority scheduling; the key is i64 because aging may
    /// drive a priority negative.
    pub fn insert_by_priority(&mut self, process: &Process) {
        self.insert_keyed(process.priority as i64, process.pid);
    }

    /// # Panics
    /// Panics if the queue already contains FIFO entries.
    fn insert_keyed(&mut self, key: i64, pid: Pid) {
        assert!(
            self.mode != QueueMode::Fifo,
            "cannot insert key-ordered entry into a FIFO queue"
        );
        self.mode = QueueMode::Keyed;
        let order = self.insertion_counter;
        self.insertion_counter += 1;
        self.keyed_entries.insert((key, order), pid);
    }

    /// Remove and return the head entry.
    ///
    /// For keyed queues, the lowest-key entry (ties in insertion order).
    /// For FIFO queues, the oldest entry.
    /// Resets the mode when the last entry is removed.
    pub fn pop_front(&mut self) -> Option<Pid> {
        let result = match self.mode {
            QueueMode::Keyed => {
                let (&key, &pid) = self.keyed_entries.iter().next()?;
                self.keyed_entries.remove(&key);
                Some(pid)
            }
            QueueMode::Fifo => self.fifo_entries.pop_front(),
            QueueMode::Empty => None,
        };
        if self.is_empty() {
            self.mode = QueueMode::Empty;
        }
        result
    }

    /// The head entry without removing it.
    pub fn front(&self) -> Option<Pid> {
        match self.mode {
            QueueMode::Keyed => self.keyed_entries.values().next().copied(),
            QueueMode::Fifo => self.fifo_entries.front().copied(),
            QueueMode::Empty => None,
        }
    }

    pub fn len(&self) -> usize {
        self.keyed_entries.len() + self.fifo_entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyed_entries.is_empty() && self.fifo_entries.is_empty()
    }

    /// All queued PIDs in queue order, without consuming.
    pub fn ordered_pids(&self) -> Vec<Pid> {
        match self.mode {
            QueueMode::Keyed => self.keyed_entries.values().copied().collect(),
            QueueMode::Fifo => self.fifo_entries.iter().copied().collect(),
            QueueMode::Empty => Vec::new(),
        }
    }
}

impl Default for ReadyQueue {
    fn default() -> Self {
        Self::new()
    }
}
