use std::path::PathBuf;

use clap::{Parser, Subcommand, builder::RangedU64ValueParser};

use crate::{
    core::schedule::{DEFAULT_RECENT_LIMIT, ScheduleLog},
    prelude::*,
};

pub const INVALID_INPUT_HINT: &str = "Fill all fields";

#[derive(Parser)]
pub struct TrackerArgs {
    #[clap(flatten)]
    log: ScheduleLogArgs,

    #[command(subcommand)]
    command: TrackerCommand,
}

impl TrackerArgs {
    pub fn run(self) -> Result {
        let log = ScheduleLog::open(&self.log.path)?;
        debug!(path = %log.path().display(), "using the power cut log");
        match self.command {
            TrackerCommand::Add(args) => args.run(&log),
            TrackerCommand::List(args) => args.run(&log),
        }
    }
}

#[derive(Parser)]
pub struct ScheduleLogArgs {
    /// Power cut log file, created when missing.
    #[clap(long = "log-path", env = "BIJLI_LOG_PATH", default_value = "powercuts.txt")]
    path: PathBuf,
}

#[derive(Subcommand)]
pub enum TrackerCommand {
    /// Save a power cut schedule.
    Add(TrackerAddArgs),

    /// Show the most recently saved schedules.
    List(TrackerListArgs),
}

#[derive(Parser)]
pub struct TrackerAddArgs {
    /// Area or city, for example: `Mumbai`.
    #[clap(long)]
    area: Option<String>,

    /// Start time, for example: `15:00`.
    #[clap(long)]
    start: Option<String>,

    /// End time, for example: `17:00`.
    #[clap(long)]
    end: Option<String>,

    /// Optional reason, for example: `Maintenance`.
    #[clap(long)]
    reason: Option<String>,
}

impl TrackerAddArgs {
    fn run(self, log: &ScheduleLog) -> Result {
        log.submit(
            self.area.as_deref().unwrap_or_default(),
            self.start.as_deref().unwrap_or_default(),
            self.end.as_deref().unwrap_or_default(),
            self.reason.as_deref(),
        )?;
        println!("Saved schedule");
        Ok(())
    }
}

#[derive(Parser)]
pub struct TrackerListArgs {
    /// Maximum number of schedules to show.
    #[clap(
        long,
        default_value_t = DEFAULT_RECENT_LIMIT,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..),
    )]
    limit: usize,
}

impl TrackerListArgs {
    fn run(self, log: &ScheduleLog) -> Result {
        let entries = log.recent_entries(self.limit)?;
        if entries.is_empty() {
            println!("No saved schedules");
        } else {
            println!("Saved schedules:");
            for entry in entries {
                println!("{entry}");
            }
        }
        Ok(())
    }
}
