use crate::quantity::energy::KilowattHours;

/// Summary statistics of the daily totals.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub count: usize,
    pub mean: KilowattHours,
    pub max: KilowattHours,
    pub min: KilowattHours,
}
