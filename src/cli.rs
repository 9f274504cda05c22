mod bill;
mod load;
mod solar;
mod suggest;
mod tips;
mod tracker;

use clap::{Parser, Subcommand};

use crate::{
    cli::{
        bill::BillArgs,
        load::LoadArgs,
        solar::SolarArgs,
        suggest::{SuggestArgs, TariffsArgs},
        tips::TipsArgs,
        tracker::TrackerArgs,
    },
    core::error::InputError,
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn run(self) -> Result {
        match self.command {
            Command::Bill(args) => recover(args.run(), bill::INVALID_INPUT_HINT),
            Command::Tips(args) => {
                args.run();
                Ok(())
            }
            Command::Solar(args) => recover(args.run(), solar::INVALID_INPUT_HINT),
            Command::Load(args) => recover(args.run(), load::INVALID_INPUT_HINT),
            Command::Suggest(args) => recover(args.run(), suggest::INVALID_INPUT_HINT),
            Command::Tariffs(args) => args.run(),
            Command::Tracker(args) => recover(args.run(), tracker::INVALID_INPUT_HINT),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate the monthly bill from the consumed units.
    #[clap(name = "bill")]
    Bill(BillArgs),

    /// Show power saving tips.
    #[clap(name = "tips")]
    Tips(TipsArgs),

    /// Suggest a rooftop solar installation size.
    #[clap(name = "solar")]
    Solar(SolarArgs),

    /// Classify the total connected load.
    #[clap(name = "load")]
    Load(LoadArgs),

    /// Suggest the cheapest hours to start an appliance.
    #[clap(name = "suggest")]
    Suggest(Box<SuggestArgs>),

    /// Show the hourly tariffs.
    #[clap(name = "tariffs")]
    Tariffs(TariffsArgs),

    /// Track power cut schedules.
    #[clap(name = "tracker")]
    Tracker(Box<TrackerArgs>),
}

/// Render a user input failure as the command hint, propagate anything else.
fn recover(result: Result, hint: &str) -> Result {
    match result {
        Err(error) if error.downcast_ref::<InputError>().is_some() => {
            warn!("{error:#}");
            println!("{hint}");
            Ok(())
        }
        result => result,
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use crate::core::error::Expected;

    #[test]
    fn test_command() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_recover_input_error() {
        let error = InputError::invalid("abc", Expected::NonNegativeInteger);
        assert!(recover(Err(error.into()), "Enter a valid number").is_ok());
    }

    #[test]
    fn test_propagate_other_errors() {
        assert!(recover(Err(anyhow::anyhow!("disk is on fire")), "Enter a valid number").is_err());
    }

    #[test]
    fn test_negative_positional_value() {
        let args = Args::try_parse_from(["bijli", "bill", "-5"]);
        assert!(args.is_ok());
    }
}
