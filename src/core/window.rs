use bon::Builder;
use itertools::Itertools;

use crate::{
    core::tariff::{N_HOURS, TariffTable},
    prelude::*,
    quantity::{cost::Cost, power::Kilowatts, time::Hours},
};

pub const DEFAULT_TOP_N: usize = 3;

const HOURS_PER_DAY: u64 = N_HOURS as u64;

/// Candidate start hour of an appliance run, together with the run cost.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StartWindow {
    /// Hour of day, `0..24`.
    pub start_hour: usize,

    /// Hour of day at which the run ends.
    pub end_hour: usize,

    /// Total run cost, rounded to paise.
    pub cost: Cost,
}

/// Search for the cheapest hours to start an appliance.
#[derive(Builder)]
pub struct WindowFinder<'a> {
    tariffs: &'a TariffTable,

    /// Appliance power draw.
    power: Kilowatts,

    /// Run duration in whole hours, at least one.
    duration_hours: u64,

    /// Number of the cheapest windows to return.
    #[builder(default = DEFAULT_TOP_N)]
    top_n: usize,
}

impl WindowFinder<'_> {
    /// Evaluate every start hour and return the cheapest ones, cheapest first.
    ///
    /// Costs are rounded before sorting, and the sort is stable, so equally priced windows
    /// keep their chronological order.
    #[instrument(skip_all, fields(power = ?self.power, duration_hours = self.duration_hours))]
    pub fn find(self) -> Vec<StartWindow> {
        let windows = (0..N_HOURS)
            .map(|start_hour| self.evaluate(start_hour))
            .sorted_by_key(|window| window.cost)
            .take(self.top_n)
            .collect_vec();
        debug!(n_windows = windows.len(), "found");
        windows
    }

    /// Cost a run starting at the specified hour.
    ///
    /// Runs longer than a day are costed as whole days plus the remainder.
    fn evaluate(&self, start_hour: usize) -> StartWindow {
        let hourly_cost = |hour: usize| (self.power * Hours::ONE) * self.tariffs[hour];
        let n_days = self.duration_hours / HOURS_PER_DAY;
        #[expect(clippy::cast_possible_truncation)]
        let n_remaining_hours = (self.duration_hours % HOURS_PER_DAY) as usize;

        let remainder: Cost = (start_hour..start_hour + n_remaining_hours).map(hourly_cost).sum();
        let cost = if n_days == 0 {
            remainder
        } else {
            let day_cost: Cost = (start_hour..start_hour + N_HOURS).map(hourly_cost).sum();
            #[expect(clippy::cast_precision_loss)]
            let n_days = n_days as f64;
            day_cost * n_days + remainder
        };

        StartWindow {
            start_hour,
            end_hour: (start_hour + n_remaining_hours) % N_HOURS,
            cost: cost.round_to_cents(),
        }
    }
}
