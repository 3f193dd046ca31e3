mod accumulator;
mod projection;
mod summary;
mod weekly;

use average::Mean;
use chrono::NaiveDate;
use enumset::EnumSet;
use itertools::Itertools;

pub use self::{
    accumulator::Accumulator,
    projection::Projections,
    summary::Summary,
    weekly::{DayAverage, WeeklyAverages},
};
use crate::{
    core::{facility::Facility, record::EnergyRecord, weekday::DayOfWeek},
    quantity::energy::KilowattHours,
};

/// Refused statistic over too few records.
#[derive(Copy, Clone, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StatisticsError {
    #[display("there are no records")]
    EmptyStore,

    #[display("at least {required} records are required, but there are only {actual}")]
    InsufficientRecords { required: usize, actual: usize },
}

/// Read-only queries over the records.
#[must_use]
#[derive(Copy, Clone)]
pub struct Aggregator<'a> {
    records: &'a [EnergyRecord],
}

impl<'a> Aggregator<'a> {
    /// Minimal number of records for the summary statistics.
    pub const MIN_SUMMARY_RECORDS: usize = 2;

    pub const fn new(records: &'a [EnergyRecord]) -> Self {
        Self { records }
    }

    /// Average energy for each day of the week, Monday to Sunday.
    pub fn weekly_averages(self) -> WeeklyAverages {
        self.records
            .iter()
            .map(|record| (record.day_of_week(), record.total_energy()))
            .collect()
    }

    /// Average energy for the days which occur in the records, ordered by the day name.
    pub fn day_of_week_averages(self) -> Vec<(DayOfWeek, KilowattHours)> {
        self.records
            .iter()
            .into_grouping_map_by(|record| record.day_of_week())
            .fold(Accumulator::default(), |accumulator, _, record| {
                accumulator + Accumulator::from(record.total_energy())
            })
            .into_iter()
            .filter_map(|(day, accumulator)| Some((day, accumulator.average()?)))
            .sorted_unstable_by_key(|(day, _)| day.name())
            .collect()
    }

    /// Average energy per facility, in the facility order.
    pub fn facility_averages(self) -> Vec<(Facility, KilowattHours)> {
        self.records
            .iter()
            .into_grouping_map_by(|record| record.facility())
            .fold(Accumulator::default(), |accumulator, _, record| {
                accumulator + Accumulator::from(record.total_energy())
            })
            .into_iter()
            .filter_map(|(facility, accumulator)| Some((facility, accumulator.average()?)))
            .sorted_unstable_by_key(|(facility, _)| *facility)
            .collect()
    }

    pub fn distinct_facilities(self) -> EnumSet<Facility> {
        self.records.iter().map(EnergyRecord::facility).collect()
    }

    /// Facility averages, only when there is more than one facility to compare.
    pub fn facility_comparison(self) -> Option<Vec<(Facility, KilowattHours)>> {
        (self.distinct_facilities().len() > 1).then(|| self.facility_averages())
    }

    /// Daily average extrapolated to a month and a year.
    pub fn projections(self) -> Result<Projections, StatisticsError> {
        Ok(Projections::from_daily_average(self.mean()?))
    }

    pub fn summary(self) -> Result<Summary, StatisticsError> {
        if self.records.len() < Self::MIN_SUMMARY_RECORDS {
            return Err(StatisticsError::InsufficientRecords {
                required: Self::MIN_SUMMARY_RECORDS,
                actual: self.records.len(),
            });
        }
        let (min, max) = self
            .records
            .iter()
            .map(EnergyRecord::total_energy)
            .minmax()
            .into_option()
            .ok_or(StatisticsError::EmptyStore)?;
        Ok(Summary { count: self.records.len(), mean: self.mean()?, max, min })
    }

    /// Energy by date, in the insertion order.
    pub fn timeline(self) -> Vec<(NaiveDate, KilowattHours)> {
        self.records.iter().map(|record| (record.date(), record.total_energy())).collect()
    }

    fn mean(self) -> Result<KilowattHours, StatisticsError> {
        let estimate: Mean = self.records.iter().map(|record| record.total_energy().0).collect();
        if estimate.is_empty() {
            Err(StatisticsError::EmptyStore)
        } else {
            Ok(KilowattHours(estimate.mean()))
        }
    }
}
