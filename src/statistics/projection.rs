use crate::quantity::{cost::Cost, energy::KilowattHours, rate::RATE};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Projection {
    pub energy: KilowattHours,
    pub cost: Cost,
}

impl From<KilowattHours> for Projection {
    fn from(energy: KilowattHours) -> Self {
        Self { energy, cost: energy * RATE }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Projections {
    pub daily: Projection,
    pub monthly: Projection,
    pub yearly: Projection,
}

impl Projections {
    pub const DAYS_IN_MONTH: f64 = 30.0;
    pub const DAYS_IN_YEAR: f64 = 365.0;

    pub fn from_daily_average(daily_average: KilowattHours) -> Self {
        Self {
            daily: daily_average.into(),
            monthly: (daily_average * Self::DAYS_IN_MONTH).into(),
            yearly: (daily_average * Self::DAYS_IN_YEAR).into(),
        }
    }
}
