use std::fmt::{Display, Formatter};

const MODERATE_THRESHOLD_WATTS: u64 = 1000;
const HIGH_THRESHOLD_WATTS: u64 = 3000;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoadClass {
    /// Below 1 kW.
    Light,

    /// From 1 kW up to, but not including, 3 kW.
    Moderate,

    /// 3 kW and above.
    High,
}

impl LoadClass {
    pub const fn classify(connected_watts: u64) -> Self {
        if connected_watts < MODERATE_THRESHOLD_WATTS {
            Self::Light
        } else if connected_watts < HIGH_THRESHOLD_WATTS {
            Self::Moderate
        } else {
            Self::High
        }
    }

    pub const fn advice(self) -> &'static str {
        match self {
            Self::Light => "Light load — good!",
            Self::Moderate => "Moderate load — avoid simultaneous heavy devices.",
            Self::High => "High load — split appliances across time.",
        }
    }
}

impl Display for LoadClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "Light"),
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(LoadClass::classify(0), LoadClass::Light);
        assert_eq!(LoadClass::classify(999), LoadClass::Light);
        assert_eq!(LoadClass::classify(1000), LoadClass::Moderate);
        assert_eq!(LoadClass::classify(2999), LoadClass::Moderate);
        assert_eq!(LoadClass::classify(3000), LoadClass::High);
        assert_eq!(LoadClass::classify(5_000_000_000), LoadClass::High);
        assert_eq!(LoadClass::classify(u64::MAX), LoadClass::High);
    }
}
