use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{core::appliance::Appliance, quantity::energy::KilowattHours};

/// Line item of the energy breakdown.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BreakdownItem {
    Lights { units: u8 },
    BasicAppliances,
    Appliance(Appliance),
}

impl Display for BreakdownItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lights { units } => write!(f, "Lights ({units} units)"),
            Self::BasicAppliances => write!(f, "Basic appliances"),
            Self::Appliance(appliance) => write!(f, "{appliance}"),
        }
    }
}

/// Energy breakdown which preserves the computation order.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Breakdown(Vec<(BreakdownItem, KilowattHours)>);

impl Breakdown {
    pub fn push(&mut self, item: BreakdownItem, energy: KilowattHours) {
        self.0.push((item, energy));
    }

    pub fn iter(&self) -> impl Iterator<Item = (BreakdownItem, KilowattHours)> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Sum of the line items, in order.
    pub fn total(&self) -> KilowattHours {
        self.iter().map(|(_, energy)| energy).sum()
    }
}

/// Serialized as a label-to-kWh map in the breakdown order.
impl Serialize for Breakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (item, energy) in self.iter() {
            map.serialize_entry(&item.to_string(), &energy.0)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(BreakdownItem::Lights { units: 3 }.to_string(), "Lights (3 units)");
        assert_eq!(BreakdownItem::BasicAppliances.to_string(), "Basic appliances");
        assert_eq!(
            BreakdownItem::Appliance(Appliance::WashingMachine).to_string(),
            "Washing Machine",
        );
    }

    #[test]
    fn test_serialize_preserves_order() {
        let mut breakdown = Breakdown::default();
        breakdown.push(BreakdownItem::Lights { units: 2 }, KilowattHours(0.8));
        breakdown.push(BreakdownItem::BasicAppliances, KilowattHours(1.6));
        breakdown.push(BreakdownItem::Appliance(Appliance::AirConditioner), KilowattHours(1.0));
        assert_eq!(
            serde_json::to_string(&breakdown).unwrap(),
            r#"{"Lights (2 units)":0.8,"Basic appliances":1.6,"Air Conditioner":1.0}"#,
        );
    }
}
