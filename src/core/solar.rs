use crate::quantity::{cost::Cost, energy::KilowattHours, power::Kilowatts};

/// Average monthly generation of one installed kilowatt.
const MONTHLY_YIELD_PER_KILOWATT: KilowattHours = KilowattHours::new(120.0);

/// Installation price of one kilowatt.
const COST_PER_KILOWATT: Cost = Cost::new(70_000.0);

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SolarRecommendation {
    pub capacity: Kilowatts,

    /// Approximate installation cost, in whole rupees.
    pub cost: Cost,
}

pub fn recommend_solar_capacity(monthly_consumption: KilowattHours) -> SolarRecommendation {
    let n_kilowatts = monthly_consumption / MONTHLY_YIELD_PER_KILOWATT;
    SolarRecommendation {
        capacity: Kilowatts::from(n_kilowatts),
        cost: (COST_PER_KILOWATT * n_kilowatts.0).floor(),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_recommend() {
        let recommendation = recommend_solar_capacity(KilowattHours::new(300.0));
        assert_abs_diff_eq!(recommendation.capacity.get(), 2.5);
        assert_eq!(recommendation.cost, Cost::new(175_000.0));
    }

    #[test]
    fn test_cost_is_floored() {
        // 100 / 120 × 70 000 = 58 333.33…
        let recommendation = recommend_solar_capacity(KilowattHours::new(100.0));
        assert_eq!(recommendation.cost, Cost::new(58_333.0));
    }

    #[test]
    fn test_fractional_units() {
        let recommendation = recommend_solar_capacity(KilowattHours::new(60.0));
        assert_abs_diff_eq!(recommendation.capacity.get(), 0.5);
        assert_eq!(recommendation.cost, Cost::new(35_000.0));
    }

    #[test]
    fn test_zero() {
        let recommendation = recommend_solar_capacity(KilowattHours::ZERO);
        assert_eq!(recommendation.capacity, Kilowatts::ZERO);
        assert_eq!(recommendation.cost, Cost::ZERO);
    }
}
