use chrono::NaiveDate;
use clap::Parser;
use serde::Deserialize;

use crate::{
    core::{
        appliance::{Appliance, Appliances},
        facility::Facility,
        housing::HousingType,
        record::Submission,
        validation::ValidationError,
    },
    prelude::*,
    quantity::time::Hours,
};

/// Placeholder of a drop-down without a selection.
pub const UNSELECTED: &str = "Select...";

/// Raw daily entry as typed in by the user.
#[derive(Clone, Debug, Parser, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct EntryArgs {
    /// Entry date, today when omitted.
    #[clap(long)]
    pub date: Option<NaiveDate>,

    #[clap(long)]
    pub name: Option<String>,

    #[clap(long, default_value_t = EntryArgs::DEFAULT_AGE)]
    #[serde(default = "EntryArgs::default_age")]
    pub age: u16,

    #[clap(long)]
    pub city: Option<String>,

    #[clap(long)]
    pub area: Option<String>,

    /// Flat or tenement.
    #[clap(long)]
    pub housing: Option<String>,

    /// Accommodation type: 1BHK, 2BHK or 3BHK.
    #[clap(long)]
    pub facility: Option<String>,

    /// Air conditioner usage hours. Omit when the appliance was not used.
    #[clap(long = "air-conditioner-hours")]
    pub air_conditioner_hours: Option<f64>,

    /// Refrigerator usage hours. Omit when the appliance was not used.
    #[clap(long = "refrigerator-hours")]
    pub refrigerator_hours: Option<f64>,

    /// Washing machine usage hours. Omit when the appliance was not used.
    #[clap(long = "washing-machine-hours")]
    pub washing_machine_hours: Option<f64>,
}

impl EntryArgs {
    pub const DEFAULT_AGE: u16 = 25;

    const fn default_age() -> u16 {
        Self::DEFAULT_AGE
    }

    /// Check the required fields and the selections, all or nothing.
    pub fn validate(self, today: NaiveDate) -> Result<Submission, ValidationError> {
        let name = selected(self.name.as_deref()).ok_or(ValidationError::MissingName)?;
        let facility: Facility =
            selected(self.facility.as_deref()).ok_or(ValidationError::UnselectedFacility)?.parse()?;
        let housing: HousingType =
            selected(self.housing.as_deref()).ok_or(ValidationError::UnselectedHousing)?.parse()?;
        let age = u8::try_from(self.age)
            .ok()
            .filter(|age| (1..=120).contains(age))
            .ok_or(ValidationError::InvalidAge { age: self.age })?;
        let appliances = Appliances::from_hours(
            usage_hours(Appliance::AirConditioner, self.air_conditioner_hours)?,
            usage_hours(Appliance::Refrigerator, self.refrigerator_hours)?,
            usage_hours(Appliance::WashingMachine, self.washing_machine_hours)?,
        );
        Ok(Submission::builder()
            .date(self.date.unwrap_or(today))
            .name(name)
            .age(age)
            .maybe_city(self.city)
            .maybe_area(self.area)
            .housing(housing)
            .facility(facility)
            .appliances(appliances)
            .build())
    }
}

/// Trimmed value, `None` when it is blank or still the placeholder.
fn selected(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty() && *value != UNSELECTED)
}

fn usage_hours(appliance: Appliance, hours: Option<f64>) -> Result<Option<Hours>, ValidationError> {
    match hours {
        None => Ok(None),
        Some(hours) if !hours.is_finite() => Err(ValidationError::InvalidHours { appliance }),
        Some(hours) => {
            let hours = Hours(hours);
            if hours != hours.clamp_to_day() {
                warn!(%appliance, ?hours, "usage hours are out of a single day, clamping");
            }
            Ok(Some(hours))
        }
    }
}
