use std::{fs, ops::Index, path::Path};

use itertools::Itertools;
use serde::Deserialize;

use crate::{prelude::*, quantity::rate::KilowattHourRate};

pub const N_HOURS: usize = 24;

/// Per-hour electricity rates, indexed by the hour of day.
///
/// Indexing is cyclic: hour 24 is hour 0 of the next day.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<f64>")]
pub struct TariffTable([KilowattHourRate; N_HOURS]);

impl TariffTable {
    pub fn rates(&self) -> impl Iterator<Item = KilowattHourRate> + '_ {
        self.0.iter().copied()
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read the tariffs from `{}`", path.display()))?;
        let file: TariffFile = toml::from_str(&contents)
            .with_context(|| format!("failed to parse the tariffs in `{}`", path.display()))?;
        info!("loaded the tariffs");
        Ok(file.hourly_rates)
    }
}

impl Default for TariffTable {
    /// Flat 5 ₹/kWh with a 0.5 ₹ step every hour, repeating every 6 hours.
    fn default() -> Self {
        Self(std::array::from_fn(|hour| {
            #[expect(clippy::cast_precision_loss)]
            let step = (hour % 6) as f64;
            KilowattHourRate::new(5.0 + step * 0.5)
        }))
    }
}

impl TryFrom<Vec<f64>> for TariffTable {
    type Error = Error;

    fn try_from(rates: Vec<f64>) -> Result<Self> {
        ensure!(rates.len() == N_HOURS, "expected {N_HOURS} hourly rates, got {}", rates.len());
        if let Some((hour, rate)) =
            rates.iter().find_position(|rate| !rate.is_finite() || **rate < 0.0)
        {
            bail!("invalid rate at hour {hour}: {rate}");
        }
        let mut table = [KilowattHourRate::ZERO; N_HOURS];
        for (slot, rate) in table.iter_mut().zip(rates) {
            *slot = KilowattHourRate::from(rate);
        }
        Ok(Self(table))
    }
}

impl Index<usize> for TariffTable {
    type Output = KilowattHourRate;

    /// Rate at the specified hour, wrapping around midnight.
    fn index(&self, hour: usize) -> &Self::Output {
        &self.0[hour % N_HOURS]
    }
}

#[derive(Deserialize)]
struct TariffFile {
    hourly_rates: TariffTable,
}
