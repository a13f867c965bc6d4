//! Workload loading and validation.
//!
//! The input text format carries one process per line as three
//! whitespace-separated integers: `burst priority arrival`. Blank lines
//! are skipped. Process IDs are assigned in input order, starting at
//! zero. The whole file is validated before any simulation starts.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::process::Process;
use crate::types::{Pid, Tick};

/// One process description as loaded from a workload file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub burst: u32,
    pub priority: i32,
    pub arrival: Tick,
}

/// A validated, immutable set of process descriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workload {
    specs: Vec<ProcessSpec>,
}

impl Workload {
    /// Parse the text workload format. Fails on the first malformed
    /// line, identified by its 1-based line number.
    pub fn parse(input: &str) -> Result<Self> {
        let mut specs = Vec::new();

        for (idx, line) in input.lines().enumerate() {
            let lineno = idx + 1;
            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 3 {
                bail!(
                    "line {}: expected 3 fields (burst priority arrival), found {}",
                    lineno,
                    fields.len()
                );
            }

            let burst: u32 = fields[0]
                .parse()
                .with_context(|| format!("line {}: invalid burst time {:?}", lineno, fields[0]))?;
            let priority: i32 = fields[1]
                .parse()
                .with_context(|| format!("line {}: invalid priority {:?}", lineno, fields[1]))?;
            let arrival: Tick = fields[2]
                .parse()
                .with_context(|| format!("line {}: invalid arrival time {:?}", lineno, fields[2]))?;

            specs.push(ProcessSpec {
                burst,
                priority,
                arrival,
            });
        }

        Ok(Workload { specs })
    }

    /// Read and parse a workload file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let input = fs::read_to_string(path)
            .with_context(|| format!("failed to read workload file {}", path.display()))?;
        Self::parse(&input)
            .with_context(|| format!("failed to parse workload file {}", path.display()))
    }

    /// Build a workload programmatically.
    pub fn from_specs(specs: Vec<ProcessSpec>) -> Self {
        Workload { specs }
    }

    pub fn specs(&self) -> &[ProcessSpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Materialize the process arena, PIDs in input order.
    pub fn processes(&self) -> Vec<Process> {
        self.specs
            .iter()
            .enumerate()
            .map(|(i, s)| Process::new(Pid(i as u32), s.burst, s.priority, s.arrival))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_basic() {
        let w = Workload::parse("5 1 0\n3 2 1\n1 1 2\n").unwrap();
        assert_eq!(w.len(), 3);
        assert_eq!(
            w.specs()[1],
            ProcessSpec { burst: 3, priority: 2, arrival: 1 }
        );

        let procs = w.processes();
        assert_eq!(procs[2].pid, Pid(2));
        assert_eq!(procs[2].arrival, 2);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let w = Workload::parse("\n5 1 0\n\n  \n3 2 1\n").unwrap();
        assert_eq!(w.len(), 2);
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        let err = Workload::parse("5 1 0\n3 2\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");

        assert!(Workload::parse("5 1 0 7\n").is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let err = Workload::parse("5 one 0\n").unwrap_err();
        assert!(format!("{err:#}").contains("invalid priority"), "{err:#}");
    }

    #[test]
    fn test_parse_rejects_negative_burst() {
        assert!(Workload::parse("-5 1 0\n").is_err());
    }

    #[test]
    fn test_empty_input_is_empty_workload() {
        let w = Workload::parse("").unwrap();
        assert!(w.is_empty());
        assert!(w.processes().is_empty());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "2 0 0\n4 1 1\n").unwrap();

        let w = Workload::from_file(file.path()).unwrap();
        assert_eq!(w.len(), 2);

        assert!(Workload::from_file("/nonexistent/workload.txt").is_err());
    }
}
