use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// Indian rupees.
pub type Cost = Quantity<0, 0, 1>;

impl Cost {
    /// Round the cost to paise.
    ///
    /// Rounding works on the exact binary value, and exact halves go to the even paisa.
    pub fn round_to_cents(self) -> Self {
        format!("{:.2}", self.0.0).parse::<f64>().map_or(self, Self::new)
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{:.2}", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}₹", self.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_round_to_cents() {
        assert_abs_diff_eq!(Cost::from(10.456).round_to_cents().get(), 10.46);
        assert_abs_diff_eq!(Cost::from(10.454).round_to_cents().get(), 10.45);
    }

    #[test]
    fn test_round_to_cents_ties_to_even() {
        assert_eq!(Cost::from(2.625).round_to_cents(), Cost::from(2.62));
        assert_eq!(Cost::from(0.375).round_to_cents(), Cost::from(0.38));
        assert_eq!(Cost::from(0.125).round_to_cents(), Cost::from(0.12));
    }

    #[test]
    fn test_round_to_cents_uses_binary_value() {
        // 0.05 + 0.055 is slightly above 0.105, while 1.005 is slightly below:
        assert_eq!(Cost::from(0.05 + 0.055).round_to_cents(), Cost::from(0.11));
        assert_eq!(Cost::from(1.005).round_to_cents(), Cost::from(1.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Cost::from(1950.0).to_string(), "₹1950.00");
    }
}
