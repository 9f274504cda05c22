use clap::Parser;

use crate::{
    core::{input::parse_non_negative_integer, load::LoadClass},
    prelude::*,
};

pub const INVALID_INPUT_HINT: &str = "Enter valid load";

#[derive(Parser)]
pub struct LoadArgs {
    /// Total connected load in watts, for example: `2500`.
    #[clap(allow_hyphen_values = true)]
    watts: String,
}

impl LoadArgs {
    pub fn run(self) -> Result {
        let watts = parse_non_negative_integer(&self.watts)?;
        let class = LoadClass::classify(watts);
        info!(watts, %class, "classified");
        println!("{}", class.advice());
        Ok(())
    }
}
