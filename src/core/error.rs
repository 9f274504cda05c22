use std::fmt::{Display, Formatter};

/// Recoverable user-input failure.
///
/// These never abort the program: the front-end renders them as a hint and carries on.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// Malformed or missing numeric text.
    #[error("`{input}` is not a valid {expected}")]
    InvalidInput { input: String, expected: Expected },

    /// A required text field is blank.
    #[error("{field} is required")]
    Validation { field: Field },
}

impl InputError {
    pub fn invalid(input: &str, expected: Expected) -> Self {
        Self::InvalidInput { input: input.to_owned(), expected }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Expected {
    NonNegativeInteger,
    NonNegativeNumber,
    PositiveNumber,
}

impl Display for Expected {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonNegativeInteger => write!(f, "non-negative integer"),
            Self::NonNegativeNumber => write!(f, "non-negative number"),
            Self::PositiveNumber => write!(f, "positive number"),
        }
    }
}

/// Required field of a power-cut schedule.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Field {
    Area,
    Start,
    End,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Area => write!(f, "area"),
            Self::Start => write!(f, "start time"),
            Self::End => write!(f, "end time"),
        }
    }
}
