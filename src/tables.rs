use chrono::NaiveDate;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::{
    core::{
        breakdown::Breakdown,
        facility::Facility,
        record::EnergyRecord,
        weekday::DayOfWeek,
    },
    quantity::{energy::KilowattHours, rate::RATE},
    statistics::{Projections, Summary, WeeklyAverages},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

#[must_use]
pub fn build_result_table(record: &EnergyRecord) -> Table {
    let mut table = new_table();
    table
        .set_header(vec![
            Cell::new("Date"),
            Cell::new("Day"),
            Cell::new("Total energy").set_alignment(CellAlignment::Right),
            Cell::new("Cost").set_alignment(CellAlignment::Right),
        ])
        .add_row(vec![
            Cell::new(record.date().format("%B %d, %Y")),
            Cell::new(record.day_of_week()),
            Cell::new(record.total_energy())
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Bold),
            Cell::new(record.cost()).set_alignment(CellAlignment::Right),
        ]);
    table
}

#[must_use]
pub fn build_breakdown_table(breakdown: &Breakdown) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Energy breakdown"),
        Cell::new("Energy").set_alignment(CellAlignment::Right),
    ]);
    for (item, energy) in breakdown.iter() {
        table.add_row(vec![Cell::new(item), Cell::new(energy).set_alignment(CellAlignment::Right)]);
    }
    table
}

#[must_use]
pub fn build_weekly_table(weekly_averages: &WeeklyAverages) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Day"),
        Cell::new("Avg energy").set_alignment(CellAlignment::Right),
        Cell::new("Records").set_alignment(CellAlignment::Right),
        Cell::new("Avg cost").set_alignment(CellAlignment::Right),
    ]);
    for (day, average) in weekly_averages.iter() {
        let color = if average.count == 0 { Color::DarkGrey } else { Color::Green };
        table.add_row(vec![
            Cell::new(day).fg(color),
            Cell::new(average.average).set_alignment(CellAlignment::Right),
            Cell::new(average.count).set_alignment(CellAlignment::Right),
            Cell::new(average.average_cost()).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[must_use]
pub fn build_timeline_table(timeline: &[(NaiveDate, KilowattHours)]) -> Table {
    let mean = {
        let estimate: average::Mean = timeline.iter().map(|(_, energy)| energy.0).collect();
        if estimate.is_empty() { KilowattHours::ZERO } else { KilowattHours(estimate.mean()) }
    };
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Date"),
        Cell::new("Energy").set_alignment(CellAlignment::Right),
    ]);
    for (date, energy) in timeline {
        table.add_row(vec![
            Cell::new(date.format("%Y-%m-%d")),
            Cell::new(energy)
                .set_alignment(CellAlignment::Right)
                .fg(if *energy > mean { Color::Red } else { Color::Green }),
        ]);
    }
    table
}

#[must_use]
pub fn build_day_of_week_table(averages: &[(DayOfWeek, KilowattHours)]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Day"),
        Cell::new("Avg energy").set_alignment(CellAlignment::Right),
    ]);
    for (day, average) in averages {
        table.add_row(vec![Cell::new(day), Cell::new(average).set_alignment(CellAlignment::Right)]);
    }
    table
}

#[must_use]
pub fn build_facility_table(averages: &[(Facility, KilowattHours)]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Housing type"),
        Cell::new("Avg energy").set_alignment(CellAlignment::Right),
    ]);
    for (facility, average) in averages {
        table.add_row(vec![
            Cell::new(facility),
            Cell::new(average).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[must_use]
pub fn build_projections_table(projections: &Projections) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Cost projections"),
        Cell::new("Energy").set_alignment(CellAlignment::Right),
        Cell::new(format!("Cost at {RATE}")).set_alignment(CellAlignment::Right),
    ]);
    for (label, projection) in [
        ("Daily average", projections.daily),
        ("Monthly projection", projections.monthly),
        ("Yearly projection", projections.yearly),
    ] {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(projection.energy).set_alignment(CellAlignment::Right),
            Cell::new(projection.cost).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Record list, one row per record with its breakdown folded into a multi-line cell.
#[must_use]
pub fn build_records_table<'a>(records: impl IntoIterator<Item = &'a EnergyRecord>) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Day"),
        Cell::new("Date"),
        Cell::new("Name"),
        Cell::new("Location"),
        Cell::new("Housing"),
        Cell::new("Total").set_alignment(CellAlignment::Right),
        Cell::new("Cost").set_alignment(CellAlignment::Right),
        Cell::new("Appliances"),
        Cell::new("Breakdown"),
    ]);
    for record in records {
        let appliances = record
            .appliances()
            .used()
            .map(|(appliance, hours)| format!("{} ({:.1}h)", appliance.short_code(), hours.0))
            .join(", ");
        let breakdown =
            record.breakdown().iter().map(|(item, energy)| format!("{item}: {energy}")).join("\n");
        table.add_row(vec![
            Cell::new(record.day_of_week()).add_attribute(Attribute::Bold),
            Cell::new(record.date().format("%Y-%m-%d")),
            Cell::new(record.name()),
            Cell::new(format!("{}, {}", record.city(), record.area())),
            Cell::new(format!("{} - {}", record.housing(), record.facility())),
            Cell::new(record.total_energy()).set_alignment(CellAlignment::Right),
            Cell::new(record.cost()).set_alignment(CellAlignment::Right),
            Cell::new(if appliances.is_empty() { "None".to_string() } else { appliances }),
            Cell::new(breakdown).add_attribute(Attribute::Dim),
        ]);
    }
    table
}

#[must_use]
pub fn build_summary_table(summary: &Summary) -> Table {
    let mut table = new_table();
    table
        .set_header(vec![
            Cell::new("Total records").set_alignment(CellAlignment::Right),
            Cell::new("Average daily").set_alignment(CellAlignment::Right),
            Cell::new("Highest day").set_alignment(CellAlignment::Right),
            Cell::new("Lowest day").set_alignment(CellAlignment::Right),
        ])
        .add_row(vec![
            Cell::new(summary.count).set_alignment(CellAlignment::Right),
            Cell::new(summary.mean).set_alignment(CellAlignment::Right),
            Cell::new(summary.max).set_alignment(CellAlignment::Right).fg(Color::Red),
            Cell::new(summary.min).set_alignment(CellAlignment::Right).fg(Color::Green),
        ]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{
            appliance::Appliances,
            housing::HousingType,
            record::{Submission, tests::record_on},
            store::RecordStore,
        },
        quantity::time::Hours,
    };

    #[test]
    fn test_records_table() {
        let mut store = RecordStore::default();
        store.append(record_on(Facility::OneBhk, 2025, 6, 2));
        let rendered = build_records_table(store.recent(10)).to_string();
        assert!(rendered.contains("Monday"));
        assert!(rendered.contains("Mumbai, Bandra"));
        assert!(rendered.contains("Flat - 1BHK"));
        assert!(rendered.contains("None"));
        assert!(rendered.contains("Lights (2 units): 0.80 kWh"));
    }

    #[test]
    fn test_records_table_appliances() {
        let record: EnergyRecord = Submission::builder()
            .date(NaiveDate::from_ymd_opt(2025, 6, 4).unwrap())
            .name("Ravi")
            .age(41)
            .housing(HousingType::Tenement)
            .facility(Facility::TwoBhk)
            .appliances(Appliances::from_hours(Some(Hours(8.0)), None, Some(Hours(1.5))))
            .build()
            .into();
        let rendered = build_records_table([&record]).to_string();
        assert!(rendered.contains("AC (8.0h), WM (1.5h)"), "{rendered}");
    }

    #[test]
    fn test_weekly_table_has_every_day() {
        let store = RecordStore::default();
        let rendered = build_weekly_table(&store.aggregate().weekly_averages()).to_string();
        for day in DayOfWeek::WEEK {
            assert!(rendered.contains(day.name()));
        }
    }
}
