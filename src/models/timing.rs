//! Timing log models

use std::fmt;

/// Operation class a timing row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Put,
    Get,
}

impl OpKind {
    /// Render order: PUT first, then GET
    pub const ALL: [OpKind; 2] = [OpKind::Put, OpKind::Get];

    /// Classify a row label. Only an exact `PUT` is a put, everything else counts as a get.
    pub fn from_label(label: &str) -> Self {
        if label == "PUT" {
            OpKind::Put
        } else {
            OpKind::Get
        }
    }

    /// True for the two labels the log format actually defines
    pub fn is_known_label(label: &str) -> bool {
        matches!(label, "PUT" | "GET")
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OpKind::Put => "PUT",
            OpKind::Get => "GET",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single parsed row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingRecord {
    pub kind: OpKind,
    pub duration_ns: u64,
}

/// Durations grouped by operation, in file order until sorted
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TimingDataset {
    put: Vec<u64>,
    get: Vec<u64>,
}

impl TimingDataset {
    pub fn push(&mut self, record: TimingRecord) {
        match record.kind {
            OpKind::Put => self.put.push(record.duration_ns),
            OpKind::Get => self.get.push(record.duration_ns),
        }
    }

    pub fn durations(&self, kind: OpKind) -> &[u64] {
        match kind {
            OpKind::Put => &self.put,
            OpKind::Get => &self.get,
        }
    }

    pub fn len(&self, kind: OpKind) -> usize {
        self.durations(kind).len()
    }

    /// First operation kind with no samples, checking PUT before GET
    pub fn first_empty(&self) -> Option<OpKind> {
        OpKind::ALL.into_iter().find(|&kind| self.len(kind) == 0)
    }

    /// Sort both sequences ascending
    pub fn sort(&mut self) {
        self.put.sort_unstable();
        self.get.sort_unstable();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_classification() {
        assert_eq!(OpKind::from_label("PUT"), OpKind::Put);
        assert_eq!(OpKind::from_label("GET"), OpKind::Get);
        assert_eq!(OpKind::from_label("put"), OpKind::Get);
        assert_eq!(OpKind::from_label("DELETE"), OpKind::Get);
        assert!(OpKind::is_known_label("GET"));
        assert!(!OpKind::is_known_label("bad"));
    }

    #[test]
    fn test_dataset_partition_and_sort() {
        let mut dataset = TimingDataset::default();
        for (kind, ns) in [(OpKind::Get, 30), (OpKind::Put, 20), (OpKind::Put, 10), (OpKind::Get, 5)] {
            dataset.push(TimingRecord { kind, duration_ns: ns });
        }

        assert_eq!(dataset.durations(OpKind::Put), &[20, 10]);
        assert_eq!(dataset.durations(OpKind::Get), &[30, 5]);

        dataset.sort();
        assert_eq!(dataset.durations(OpKind::Put), &[10, 20]);
        assert_eq!(dataset.durations(OpKind::Get), &[5, 30]);
    }

    #[test]
    fn test_first_empty_checks_put_first() {
        let mut dataset = TimingDataset::default();
        assert_eq!(dataset.first_empty(), Some(OpKind::Put));

        dataset.push(TimingRecord { kind: OpKind::Put, duration_ns: 1 });
        assert_eq!(dataset.first_empty(), Some(OpKind::Get));

        dataset.push(TimingRecord { kind: OpKind::Get, duration_ns: 1 });
        assert_eq!(dataset.first_empty(), None);
    }
}
