use clap::Parser;

use crate::{
    core::{billing::estimate_bill, input::parse_non_negative_integer},
    prelude::*,
    quantity::cost::Cost,
};

pub const INVALID_INPUT_HINT: &str = "Enter a valid number";

#[derive(Parser)]
pub struct BillArgs {
    /// Monthly consumption in units (kWh), for example: `250`.
    #[clap(allow_hyphen_values = true)]
    units: String,
}

impl BillArgs {
    pub fn run(self) -> Result {
        let units = parse_non_negative_integer(&self.units)?;
        let amount = estimate_bill(units);
        info!(units, %amount, "estimated");
        println!("{}", render(amount));
        Ok(())
    }
}

fn render(amount: Cost) -> String {
    format!("Estimated Bill: {amount}")
}
