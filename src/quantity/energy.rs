use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, cost::Cost, rate::KilowattHourRate};

/// Also known as «units» on an electricity bill.
pub type KilowattHours = Quantity<1, 1, 0>;

impl KilowattHours {
    /// Exact up to 2⁵³ units.
    #[expect(clippy::cast_precision_loss)]
    pub const fn from_units(units: u64) -> Self {
        Self::new(units as f64)
    }
}

impl Display for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} kWh", self.0)
    }
}

impl Debug for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}kWh", self.0)
    }
}

impl Mul<KilowattHourRate> for KilowattHours {
    type Output = Cost;

    fn mul(self, rhs: KilowattHourRate) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::{power::Kilowatts, time::Hours};

    #[test]
    fn test_energy_cost() {
        let energy = Kilowatts::from(1.5) * Hours::ONE;
        let cost = energy * KilowattHourRate::from(5.5);
        assert_abs_diff_eq!(cost.get(), 8.25);
    }
}
