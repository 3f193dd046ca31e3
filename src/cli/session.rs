use std::{fs, io, path::PathBuf};

use chrono::{Local, NaiveDate};
use clap::Parser;
use serde::Deserialize;

use crate::{
    cli::entry::EntryArgs,
    core::{store::RecordStore, validation::ValidationError},
    export,
    prelude::*,
    statistics::Aggregator,
    tables,
};

#[derive(Parser)]
pub struct SessionArgs {
    /// TOML session script. Read from the standard input when omitted.
    #[clap(long, env = "SESSION_SCRIPT")]
    script: Option<PathBuf>,

    #[clap(
        long = "views",
        env = "VIEWS",
        value_delimiter = ',',
        num_args = 1..,
        default_value = "latest,weekly,analytics,records",
    )]
    views: Vec<View>,

    /// Number of the most recent records to list.
    #[clap(long, env = "RECENT_RECORDS", default_value = "10")]
    recent_records: usize,

    /// Export all the records as CSV into this directory.
    #[clap(long, env = "EXPORT_DIR")]
    export_dir: Option<PathBuf>,
}

impl SessionArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let script = match &self.script {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("failed to read `{}`", path.display()))?,
            None => {
                io::read_to_string(io::stdin()).context("failed to read the standard input")?
            }
        };
        let script: Script =
            toml::from_str(&script).context("failed to parse the session script")?;
        info!(n_events = script.events.len(), "replaying the session…");

        let today = Local::now().date_naive();
        let mut session = Session::default();
        for (index, event) in script.events.into_iter().enumerate() {
            if let Err(error) = session.replay(event, today) {
                warn!(index, "rejected the event: {error:#}");
            }
        }
        info!(n_records = session.store.len(), n_rejected = session.n_rejected, "replayed");

        for view in &self.views {
            for block in view.render(&session.store, self.recent_records)? {
                println!("{block}");
            }
        }

        if let Some(export_dir) = &self.export_dir {
            if session.store.is_empty() {
                warn!("no records to export");
            } else {
                let path = export::write_to_dir(export_dir, today, session.store.all())?;
                info!(path = %path.display(), "exported");
            }
        }

        Ok(())
    }
}

/// Sequence of user actions within a single session.
///
/// Events are kept raw, so that a malformed one rejects only itself.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    #[serde(default)]
    pub events: Vec<toml::Table>,
}

#[derive(Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Event {
    /// Submit a daily entry.
    Submit(EntryArgs),

    /// Remove all the records.
    Clear,
}

/// Session state: the records are owned here and live until the session ends.
#[must_use]
#[derive(Default)]
pub struct Session {
    pub store: RecordStore,
    pub n_rejected: usize,
}

impl Session {
    /// Parse and apply the raw event. A rejected event does not change the records.
    pub fn replay(&mut self, event: toml::Table, today: NaiveDate) -> Result {
        let outcome = toml::Value::Table(event)
            .try_into::<Event>()
            .context("malformed event")
            .and_then(|event| Ok(self.apply(event, today)?));
        if outcome.is_err() {
            self.n_rejected += 1;
        }
        outcome
    }

    /// Apply the event. A rejected submission does not change the records.
    pub fn apply(&mut self, event: Event, today: NaiveDate) -> Result<(), ValidationError> {
        match event {
            Event::Submit(entry) => {
                self.store.submit(entry.validate(today)?);
            }
            Event::Clear => {
                self.store.clear();
            }
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum View {
    /// Latest record with its breakdown.
    Latest,

    /// Average consumption for each day of the week.
    Weekly,

    /// Timeline, day and facility averages, and cost projections.
    Analytics,

    /// Recent records and summary statistics.
    Records,
}

impl View {
    /// Rendered tables and messages, in the display order.
    fn render(self, store: &RecordStore, recent_records: usize) -> Result<Vec<String>> {
        let mut blocks = Vec::new();
        match self {
            Self::Latest => {
                if let Some(record) = store.latest() {
                    blocks.push(tables::build_result_table(record).to_string());
                    blocks.push(tables::build_breakdown_table(record.breakdown()).to_string());
                } else {
                    blocks.push("No records yet. Submit a daily entry first!".to_string());
                }
            }

            Self::Weekly => {
                let weekly_averages = store.aggregate().weekly_averages();
                if weekly_averages.has_records() {
                    blocks.push(tables::build_weekly_table(&weekly_averages).to_string());
                } else {
                    let message = "No records yet. Add some daily entries to see weekly patterns!";
                    blocks.push(message.to_string());
                }
            }

            Self::Analytics => {
                if store.is_empty() {
                    blocks.push(
                        "No data available for analytics. Add some records first!".to_string(),
                    );
                } else {
                    let aggregator = store.aggregate();
                    blocks.push(tables::build_timeline_table(&aggregator.timeline()).to_string());
                    blocks.push(
                        tables::build_day_of_week_table(&aggregator.day_of_week_averages())
                            .to_string(),
                    );
                    if let Some(comparison) = aggregator.facility_comparison() {
                        blocks.push(tables::build_facility_table(&comparison).to_string());
                    }
                    blocks.push(
                        tables::build_projections_table(&aggregator.projections()?).to_string(),
                    );
                }
            }

            Self::Records => {
                if store.is_empty() {
                    blocks.push(
                        "No records available. Start by adding your first daily entry!".to_string(),
                    );
                } else {
                    blocks.push(format!("Total records: {}", store.len()));
                    blocks.push(
                        tables::build_records_table(store.recent(recent_records)).to_string(),
                    );
                    if store.len() >= Aggregator::MIN_SUMMARY_RECORDS {
                        let summary = store.aggregate().summary()?;
                        blocks.push(tables::build_summary_table(&summary).to_string());
                    }
                }
            }
        }
        Ok(blocks)
    }
}
