use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::core::validation::ValidationError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HousingType {
    Flat,
    Tenement,
}

impl Display for HousingType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flat => write!(f, "Flat"),
            Self::Tenement => write!(f, "Tenement"),
        }
    }
}

impl FromStr for HousingType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "tenement" => Ok(Self::Tenement),
            _ => Err(ValidationError::UnknownHousing { value: value.to_string() }),
        }
    }
}
