use std::path::PathBuf;

use clap::{Parser, builder::RangedU64ValueParser};

use crate::{
    core::{
        input::{parse_duration_hours, parse_positive_number},
        tariff::TariffTable,
        window::{DEFAULT_TOP_N, WindowFinder},
    },
    prelude::*,
    quantity::power::Kilowatts,
    tables::{build_tariffs_table, build_windows_table},
};

pub const INVALID_INPUT_HINT: &str = "Enter valid numbers";

#[derive(Parser)]
pub struct TariffArgs {
    /// TOML file with `hourly_rates`: 24 rates per kWh, starting from midnight.
    ///
    /// The built-in tariffs are used when omitted.
    #[clap(long = "tariffs", env = "BIJLI_TARIFFS_PATH")]
    pub path: Option<PathBuf>,
}

impl TariffArgs {
    pub fn load(&self) -> Result<TariffTable> {
        self.path.as_deref().map_or_else(|| Ok(TariffTable::default()), TariffTable::read_from)
    }
}

#[derive(Parser)]
pub struct SuggestArgs {
    /// Appliance power in kilowatts, for example: `1.5`.
    #[clap(allow_hyphen_values = true)]
    power: String,

    /// Run time in hours, for example: `2`.
    #[clap(allow_hyphen_values = true)]
    hours: String,

    /// Number of start hours to suggest.
    #[clap(
        long = "top",
        default_value_t = DEFAULT_TOP_N,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..),
    )]
    top_n: usize,

    #[clap(flatten)]
    tariffs: TariffArgs,
}

impl SuggestArgs {
    pub fn run(self) -> Result {
        let power = Kilowatts::new(parse_positive_number(&self.power)?);
        let duration_hours = parse_duration_hours(&self.hours)?;
        let tariffs = self.tariffs.load()?;

        let windows = WindowFinder::builder()
            .tariffs(&tariffs)
            .power(power)
            .duration_hours(duration_hours)
            .top_n(self.top_n)
            .build()
            .find();
        info!(?power, duration_hours, n_windows = windows.len(), "suggested");

        println!("Top {} cheapest start hours:", windows.len());
        println!("{}", build_windows_table(&windows));
        Ok(())
    }
}

#[derive(Parser)]
pub struct TariffsArgs {
    #[clap(flatten)]
    tariffs: TariffArgs,
}

impl TariffsArgs {
    pub fn run(self) -> Result {
        println!("{}", build_tariffs_table(&self.tariffs.load()?));
        Ok(())
    }
}
