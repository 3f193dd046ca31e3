use crate::{
    core::weekday::DayOfWeek,
    quantity::{cost::Cost, energy::KilowattHours, rate::RATE},
    statistics::Accumulator,
};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DayAverage {
    pub average: KilowattHours,
    pub count: usize,
}

impl DayAverage {
    pub fn average_cost(self) -> Cost {
        self.average * RATE
    }
}

impl From<Accumulator> for DayAverage {
    fn from(accumulator: Accumulator) -> Self {
        Self {
            average: accumulator.average().unwrap_or(KilowattHours::ZERO),
            count: accumulator.count,
        }
    }
}

/// Average energy for every day of the week, zero-filled for the days without records.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WeeklyAverages([DayAverage; 7]);

impl WeeklyAverages {
    /// Days in the canonical order, Monday to Sunday.
    pub fn iter(&self) -> impl Iterator<Item = (DayOfWeek, DayAverage)> + '_ {
        DayOfWeek::WEEK.into_iter().zip(self.0.iter().copied())
    }

    pub fn has_records(&self) -> bool {
        self.0.iter().any(|day| day.count != 0)
    }
}

impl FromIterator<(DayOfWeek, KilowattHours)> for WeeklyAverages {
    fn from_iter<T: IntoIterator<Item = (DayOfWeek, KilowattHours)>>(iterator: T) -> Self {
        let mut accumulators = [Accumulator::default(); 7];
        for (day, total) in iterator {
            accumulators[day.index()] += Accumulator::from(total);
        }
        Self(accumulators.map(DayAverage::from))
    }
}
