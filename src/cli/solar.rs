use clap::Parser;

use crate::{
    core::{input::parse_non_negative_number, solar::recommend_solar_capacity},
    prelude::*,
    quantity::energy::KilowattHours,
};

pub const INVALID_INPUT_HINT: &str = "Enter valid units";

#[derive(Parser)]
pub struct SolarArgs {
    /// Average monthly consumption in units (kWh), for example: `300`.
    #[clap(allow_hyphen_values = true)]
    units: String,
}

impl SolarArgs {
    pub fn run(self) -> Result {
        let consumption = KilowattHours::new(parse_non_negative_number(&self.units)?);
        let recommendation = recommend_solar_capacity(consumption);
        info!(%consumption, ?recommendation.capacity, ?recommendation.cost, "recommended");
        println!(
            "Recommend: {} (approx. ₹{:.0})",
            recommendation.capacity,
            recommendation.cost.get(),
        );
        Ok(())
    }
}
