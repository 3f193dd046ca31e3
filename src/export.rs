use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use serde::Serialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::{
    core::{
        appliance::{Appliance, ApplianceUsage},
        facility::Facility,
        housing::HousingType,
        record::EnergyRecord,
        weekday::DayOfWeek,
    },
    prelude::*,
};

#[serde_as]
#[derive(Serialize)]
struct CsvRow<'a> {
    date: NaiveDate,

    #[serde_as(as = "DisplayFromStr")]
    day: DayOfWeek,

    name: &'a str,
    age: u8,
    city: &'a str,
    area: &'a str,

    #[serde_as(as = "DisplayFromStr")]
    housing: HousingType,

    #[serde_as(as = "DisplayFromStr")]
    facility: Facility,

    ac_hours: Option<f64>,
    fridge_hours: Option<f64>,
    wm_hours: Option<f64>,
    total_energy: f64,

    /// JSON object of the breakdown labels to kilowatt-hours.
    breakdown: String,

    cost: f64,
}

impl<'a> CsvRow<'a> {
    fn try_from_record(record: &'a EnergyRecord) -> Result<Self> {
        let hours = |appliance| match record.appliances().get(appliance) {
            ApplianceUsage::NotUsed => None,
            ApplianceUsage::Used { hours } => Some(hours.0),
        };
        Ok(Self {
            date: record.date(),
            day: record.day_of_week(),
            name: record.name(),
            age: record.age(),
            city: record.city(),
            area: record.area(),
            housing: record.housing(),
            facility: record.facility(),
            ac_hours: hours(Appliance::AirConditioner),
            fridge_hours: hours(Appliance::Refrigerator),
            wm_hours: hours(Appliance::WashingMachine),
            total_energy: record.total_energy().0,
            breakdown: serde_json::to_string(record.breakdown())
                .context("failed to serialize the breakdown")?,
            cost: record.cost().0,
        })
    }
}

/// Serialize the records in the store order, with the header row.
pub fn to_csv(records: &[EnergyRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(vec![]);
    for record in records {
        writer.serialize(CsvRow::try_from_record(record)?).context("failed to serialize a row")?;
    }
    writer.into_inner().context("failed to flush the CSV")
}

#[must_use]
pub fn file_name(date: NaiveDate) -> String {
    format!("energy_records_{}.csv", date.format("%Y%m%d"))
}

#[instrument(skip_all, fields(dir = %dir.display(), n_records = records.len()))]
pub fn write_to_dir(dir: &Path, today: NaiveDate, records: &[EnergyRecord]) -> Result<PathBuf> {
    let path = dir.join(file_name(today));
    let csv = to_csv(records)?;
    debug!(n_bytes = csv.len(), "writing…");
    fs::write(&path, csv).with_context(|| format!("failed to write `{}`", path.display()))?;
    Ok(path)
}
