use sift_fs::FileRecord;

/// Append-only, ordered collection of records for one traversal run.
///
/// A single writer populates the store while the walk runs; once the walk
/// finishes the store is read-only until the process exits. Scan order is
/// exactly insertion order, which is what makes query output deterministic.
#[derive(Debug, Default)]
pub struct Store {
    records: Vec<FileRecord>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append one record. Never rejects a well-formed record.
    pub fn insert(&mut self, record: FileRecord) {
        self.records.push(record);
    }

    /// Lazy, restartable scan over all records in insertion order.
    pub fn scan(&self) -> impl Iterator<Item = &FileRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
