use crate::{
    core::record::{EnergyRecord, Submission},
    prelude::*,
    statistics::Aggregator,
};

/// Session-owned, append-only collection of the daily records.
#[must_use]
#[derive(Default)]
pub struct RecordStore {
    records: Vec<EnergyRecord>,
}

impl RecordStore {
    pub fn append(&mut self, record: EnergyRecord) {
        self.records.push(record);
    }

    /// Calculate the record from the submission and store it.
    #[instrument(skip_all, fields(n_records = self.records.len()))]
    pub fn submit(&mut self, submission: Submission) -> &EnergyRecord {
        self.append(EnergyRecord::from(submission));
        let record = &self.records[self.records.len() - 1];
        info!(date = %record.date(), day = %record.day_of_week(), "saved the record");
        record
    }

    /// All the records in the insertion order.
    #[must_use]
    pub fn all(&self) -> &[EnergyRecord] {
        &self.records
    }

    pub fn clear(&mut self) {
        info!(n_records = self.records.len(), "clearing all records…");
        self.records.clear();
    }

    #[must_use]
    pub fn latest(&self) -> Option<&EnergyRecord> {
        self.records.last()
    }

    /// Last `n` records, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &EnergyRecord> {
        self.records.iter().rev().take(n)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn aggregate(&self) -> Aggregator<'_> {
        Aggregator::new(&self.records)
    }
}
