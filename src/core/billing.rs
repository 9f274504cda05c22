use crate::quantity::{Quantity, cost::Cost, energy::KilowattHours, rate::KilowattHourRate};

/// Contiguous usage range billed at a fixed per-unit rate.
#[derive(Copy, Clone, Debug)]
pub struct Band {
    /// Cumulative units up to which the band applies, [`None`] for the open-ended last band.
    pub up_to: Option<u64>,

    pub rate: KilowattHourRate,
}

/// Progressive-rate schedule with a flat surcharge.
#[derive(Copy, Clone, Debug)]
pub struct BillTier {
    pub bands: [Band; 3],
    pub surcharge: Cost,
}

impl BillTier {
    pub const DOMESTIC: Self = Self {
        bands: [
            Band { up_to: Some(100), rate: Quantity::new(5.0) },
            Band { up_to: Some(300), rate: Quantity::new(7.0) },
            Band { up_to: None, rate: Quantity::new(10.0) },
        ],
        surcharge: Quantity::new(50.0),
    };

    /// Estimate the monthly bill for the consumed units.
    pub fn estimate(&self, units: u64) -> Cost {
        let mut billed = 0;
        let mut amount = self.surcharge;
        for band in &self.bands {
            let upper = band.up_to.map_or(units, |up_to| up_to.min(units));
            if upper > billed {
                amount += KilowattHours::from_units(upper - billed) * band.rate;
                billed = upper;
            }
        }
        amount
    }
}

pub fn estimate_bill(units: u64) -> Cost {
    BillTier::DOMESTIC.estimate(units)
}
