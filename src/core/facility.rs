use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::core::validation::ValidationError;

/// Accommodation size, which determines the base load.
#[derive(Debug, Hash, PartialOrd, Ord, enumset::EnumSetType)]
pub enum Facility {
    OneBhk,
    TwoBhk,
    ThreeBhk,
}

impl Facility {
    /// Number of lighting and basic appliance units.
    pub const fn unit_count(self) -> u8 {
        match self {
            Self::OneBhk => 2,
            Self::TwoBhk => 3,
            Self::ThreeBhk => 4,
        }
    }
}

impl Display for Facility {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OneBhk => write!(f, "1BHK"),
            Self::TwoBhk => write!(f, "2BHK"),
            Self::ThreeBhk => write!(f, "3BHK"),
        }
    }
}

impl FromStr for Facility {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "1BHK" => Ok(Self::OneBhk),
            "2BHK" => Ok(Self::TwoBhk),
            "3BHK" => Ok(Self::ThreeBhk),
            _ => Err(ValidationError::UnknownFacility { value: value.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_count() {
        assert_eq!(Facility::OneBhk.unit_count(), 2);
        assert_eq!(Facility::TwoBhk.unit_count(), 3);
        assert_eq!(Facility::ThreeBhk.unit_count(), 4);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("2bhk".parse::<Facility>().unwrap(), Facility::TwoBhk);
        assert_eq!(" 3BHK".parse::<Facility>().unwrap(), Facility::ThreeBhk);
        assert!("4BHK".parse::<Facility>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for facility in enumset::EnumSet::<Facility>::all() {
            assert_eq!(facility.to_string().parse::<Facility>().unwrap(), facility);
        }
    }
}
