use std::fmt::{Display, Formatter};

use enumset::EnumSet;

use crate::quantity::{energy::KilowattHours, time::Hours};

/// Tracked appliance, iterated in the calculation order.
#[derive(Debug, Hash, enumset::EnumSetType)]
pub enum Appliance {
    AirConditioner,
    Refrigerator,
    WashingMachine,
}

impl Appliance {
    /// Nominal consumption of a device running for the whole day.
    pub const NOMINAL_DAILY_ENERGY: KilowattHours = KilowattHours(3.0);

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::AirConditioner => "Air Conditioner",
            Self::Refrigerator => "Refrigerator",
            Self::WashingMachine => "Washing Machine",
        }
    }

    pub const fn short_code(self) -> &'static str {
        match self {
            Self::AirConditioner => "AC",
            Self::Refrigerator => "FRIDGE",
            Self::WashingMachine => "WM",
        }
    }

    /// Energy consumed when the appliance runs for the specified number of hours.
    pub fn consumption(hours: Hours) -> KilowattHours {
        Self::NOMINAL_DAILY_ENERGY * hours.day_fraction()
    }
}

impl Display for Appliance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Daily usage of a single appliance.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ApplianceUsage {
    #[default]
    NotUsed,

    Used { hours: Hours },
}

impl ApplianceUsage {
    /// Usage with the hours clamped to a single day.
    pub fn used(hours: Hours) -> Self {
        Self::Used { hours: hours.clamp_to_day() }
    }

    pub const fn is_used(self) -> bool {
        matches!(self, Self::Used { .. })
    }

    /// Usage hours, zero when the appliance is not used.
    pub const fn hours(self) -> Hours {
        match self {
            Self::NotUsed => Hours::ZERO,
            Self::Used { hours } => hours,
        }
    }
}

impl From<Option<Hours>> for ApplianceUsage {
    fn from(hours: Option<Hours>) -> Self {
        hours.map_or(Self::NotUsed, Self::used)
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Appliances {
    pub air_conditioner: ApplianceUsage,
    pub refrigerator: ApplianceUsage,
    pub washing_machine: ApplianceUsage,
}

impl Appliances {
    /// Build from optional usage hours, where `None` stands for an unused appliance.
    pub fn from_hours(
        air_conditioner: Option<Hours>,
        refrigerator: Option<Hours>,
        washing_machine: Option<Hours>,
    ) -> Self {
        Self {
            air_conditioner: air_conditioner.into(),
            refrigerator: refrigerator.into(),
            washing_machine: washing_machine.into(),
        }
    }

    pub const fn get(&self, appliance: Appliance) -> ApplianceUsage {
        match appliance {
            Appliance::AirConditioner => self.air_conditioner,
            Appliance::Refrigerator => self.refrigerator,
            Appliance::WashingMachine => self.washing_machine,
        }
    }

    /// All appliances with their usage, in the calculation order.
    pub fn iter(&self) -> impl Iterator<Item = (Appliance, ApplianceUsage)> + '_ {
        EnumSet::<Appliance>::all()
            .into_iter()
            .map(move |appliance| (appliance, self.get(appliance)))
    }

    /// Used appliances with their usage hours.
    pub fn used(&self) -> impl Iterator<Item = (Appliance, Hours)> + '_ {
        self.iter()
            .filter(|(_, usage)| usage.is_used())
            .map(|(appliance, usage)| (appliance, usage.hours()))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use itertools::Itertools;

    use super::*;

    #[test]
    fn test_consumption() {
        assert_abs_diff_eq!(Appliance::consumption(Hours(8.0)).0, 1.0);
        assert_abs_diff_eq!(Appliance::consumption(Hours(24.0)).0, 3.0);
        assert_abs_diff_eq!(Appliance::consumption(Hours::ZERO).0, 0.0);
    }

    #[test]
    fn test_not_used_has_zero_hours() {
        assert_eq!(ApplianceUsage::NotUsed.hours(), Hours::ZERO);
        assert_eq!(ApplianceUsage::from(None), ApplianceUsage::NotUsed);
    }

    #[test]
    fn test_used_clamps_hours() {
        assert_eq!(ApplianceUsage::used(Hours(30.0)).hours(), Hours::DAY);
        assert_eq!(ApplianceUsage::from(Some(Hours(-2.0))).hours(), Hours::ZERO);
    }

    #[test]
    fn test_iteration_order() {
        let appliances = Appliances {
            washing_machine: ApplianceUsage::used(Hours(2.0)),
            air_conditioner: ApplianceUsage::used(Hours(8.0)),
            ..Appliances::default()
        };
        assert_eq!(
            appliances.iter().map(|(appliance, _)| appliance).collect_vec(),
            [Appliance::AirConditioner, Appliance::Refrigerator, Appliance::WashingMachine],
        );
        assert_eq!(
            appliances.used().collect_vec(),
            [(Appliance::AirConditioner, Hours(8.0)), (Appliance::WashingMachine, Hours(2.0))],
        );
    }
}
