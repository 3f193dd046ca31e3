use crate::core::appliance::Appliance;

/// Rejected entry. The store stays untouched.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ValidationError {
    #[display("name is required")]
    MissingName,

    #[display("accommodation type is not selected")]
    UnselectedFacility,

    #[display("unknown accommodation type `{value}`, expected 1BHK, 2BHK or 3BHK")]
    UnknownFacility { value: String },

    #[display("housing type is not selected")]
    UnselectedHousing,

    #[display("unknown housing type `{value}`, expected Flat or Tenement")]
    UnknownHousing { value: String },

    #[display("age {age} is out of range 1..=120")]
    InvalidAge { age: u16 },

    #[display("{appliance} usage hours must be a finite number")]
    InvalidHours { appliance: Appliance },
}
