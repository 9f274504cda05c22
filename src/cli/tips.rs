use clap::Parser;

use crate::core::tips::TIPS;

#[derive(Parser)]
pub struct TipsArgs {}

impl TipsArgs {
    pub fn run(self) {
        for tip in TIPS {
            println!("• {tip}");
        }
    }
}
