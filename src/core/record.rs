use bon::Builder;
use chrono::NaiveDate;

use crate::{
    core::{
        appliance::Appliances,
        breakdown::Breakdown,
        calculator::{Calculation, compute},
        facility::Facility,
        housing::HousingType,
        weekday::DayOfWeek,
    },
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours, rate::RATE},
};

/// Validated daily entry, ready to be turned into a record.
#[must_use]
#[derive(Clone, Debug, Builder)]
pub struct Submission {
    pub date: NaiveDate,

    #[builder(into)]
    pub name: String,

    pub age: u8,

    #[builder(into, default)]
    pub city: String,

    #[builder(into, default)]
    pub area: String,

    pub housing: HousingType,

    pub facility: Facility,

    #[builder(default)]
    pub appliances: Appliances,
}

/// Immutable daily record, created once from a submission.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnergyRecord {
    date: NaiveDate,
    day_of_week: DayOfWeek,
    name: String,
    age: u8,
    city: String,
    area: String,
    housing: HousingType,
    facility: Facility,
    appliances: Appliances,
    total_energy: KilowattHours,
    breakdown: Breakdown,
    cost: Cost,
}

impl From<Submission> for EnergyRecord {
    #[instrument(skip_all, fields(date = %submission.date, facility = %submission.facility))]
    fn from(submission: Submission) -> Self {
        let Calculation { total, breakdown } = compute(submission.facility, &submission.appliances);
        let cost = total * RATE;
        info!(?total, ?cost, "calculated");
        Self {
            date: submission.date,
            day_of_week: DayOfWeek::of(submission.date),
            name: submission.name,
            age: submission.age,
            city: submission.city,
            area: submission.area,
            housing: submission.housing,
            facility: submission.facility,
            appliances: submission.appliances,
            total_energy: total,
            breakdown,
            cost,
        }
    }
}

impl EnergyRecord {
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    pub const fn day_of_week(&self) -> DayOfWeek {
        self.day_of_week
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn age(&self) -> u8 {
        self.age
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn area(&self) -> &str {
        &self.area
    }

    pub const fn housing(&self) -> HousingType {
        self.housing
    }

    pub const fn facility(&self) -> Facility {
        self.facility
    }

    pub const fn appliances(&self) -> &Appliances {
        &self.appliances
    }

    pub const fn total_energy(&self) -> KilowattHours {
        self.total_energy
    }

    pub const fn breakdown(&self) -> &Breakdown {
        &self.breakdown
    }

    pub const fn cost(&self) -> Cost {
        self.cost
    }
}

#[cfg(test)]
pub mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{core::appliance::ApplianceUsage, quantity::time::Hours};

    /// Record of the specified facility and date without any appliances.
    pub fn record_on(facility: Facility, year: i32, month: u32, day: u32) -> EnergyRecord {
        Submission::builder()
            .date(NaiveDate::from_ymd_opt(year, month, day).unwrap())
            .name("Asha")
            .age(34)
            .city("Mumbai")
            .area("Bandra")
            .housing(HousingType::Flat)
            .facility(facility)
            .build()
            .into()
    }

    #[test]
    fn test_from_submission() {
        let record: EnergyRecord = Submission::builder()
            .date(NaiveDate::from_ymd_opt(2025, 6, 4).unwrap())
            .name("Ravi")
            .age(41)
            .housing(HousingType::Tenement)
            .facility(Facility::TwoBhk)
            .appliances(Appliances {
                air_conditioner: ApplianceUsage::used(Hours(8.0)),
                refrigerator: ApplianceUsage::used(Hours(24.0)),
                washing_machine: ApplianceUsage::NotUsed,
            })
            .build()
            .into();
        assert_eq!(record.day_of_week().to_string(), "Wednesday");
        assert_eq!(record.name(), "Ravi");
        assert_eq!(record.city(), "");
        assert_abs_diff_eq!(record.total_energy().0, 7.6, epsilon = 1e-9);
        assert_eq!(record.breakdown().len(), 4);
    }

    #[test]
    fn test_cost_is_total_times_rate() {
        for facility in enumset::EnumSet::<Facility>::all() {
            let record = record_on(facility, 2025, 6, 1);
            assert_eq!(record.cost().0, record.total_energy().0 * 5.0);
        }
    }

    #[test]
    fn test_total_matches_breakdown() {
        let record = record_on(Facility::ThreeBhk, 2025, 6, 3);
        assert_abs_diff_eq!(record.total_energy().0, record.breakdown().total().0, epsilon = 1e-9);
    }
}
