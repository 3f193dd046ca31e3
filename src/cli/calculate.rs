use chrono::Local;
use clap::Parser;

use crate::{
    cli::entry::EntryArgs,
    core::record::EnergyRecord,
    prelude::*,
    tables::{build_breakdown_table, build_result_table},
};

#[derive(Parser)]
pub struct CalculateArgs {
    #[clap(flatten)]
    entry: EntryArgs,
}

impl CalculateArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let submission = self.entry.validate(Local::now().date_naive())?;
        let record = EnergyRecord::from(submission);
        println!("{}", build_result_table(&record));
        println!("{}", build_breakdown_table(record.breakdown()));
        Ok(())
    }
}
