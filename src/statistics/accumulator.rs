use derive_more::{Add, AddAssign};

use crate::quantity::energy::KilowattHours;

/// Running sum and count of daily totals.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Add, AddAssign)]
pub struct Accumulator {
    pub count: usize,
    pub total: KilowattHours,
}

impl From<KilowattHours> for Accumulator {
    fn from(total: KilowattHours) -> Self {
        Self { count: 1, total }
    }
}

impl Accumulator {
    /// Arithmetic mean, `None` when nothing has been accumulated.
    pub fn average(self) -> Option<KilowattHours> {
        #[expect(clippy::cast_precision_loss)]
        let count = self.count as f64;
        if self.count == 0 { None } else { Some(self.total / count) }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_average() {
        let mut accumulator = Accumulator::default();
        assert_eq!(accumulator.average(), None);
        accumulator += Accumulator::from(KilowattHours(2.0));
        accumulator += Accumulator::from(KilowattHours(3.0));
        assert_eq!(accumulator.count, 2);
        assert_abs_diff_eq!(accumulator.average().unwrap().0, 2.5);
    }
}
