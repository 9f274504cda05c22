pub mod billing;
pub mod error;
pub mod input;
pub mod load;
pub mod schedule;
pub mod solar;
pub mod tariff;
pub mod tips;
pub mod window;
