use crate::{
    core::{
        appliance::{Appliance, Appliances},
        breakdown::{Breakdown, BreakdownItem},
        facility::Facility,
    },
    prelude::*,
    quantity::energy::KilowattHours,
};

/// Lighting load per unit.
const LIGHTS_PER_UNIT: KilowattHours = KilowattHours(0.4);

/// Basic appliance load per unit.
const BASIC_APPLIANCES_PER_UNIT: KilowattHours = KilowattHours(0.8);

#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Calculation {
    pub total: KilowattHours,
    pub breakdown: Breakdown,
}

/// Estimate the daily consumption: base load of the facility followed by the used appliances.
#[instrument(skip_all, fields(facility = %facility))]
pub fn compute(facility: Facility, appliances: &Appliances) -> Calculation {
    let units = facility.unit_count();
    let mut breakdown = Breakdown::default();
    breakdown.push(BreakdownItem::Lights { units }, LIGHTS_PER_UNIT * f64::from(units));
    breakdown.push(BreakdownItem::BasicAppliances, BASIC_APPLIANCES_PER_UNIT * f64::from(units));
    for (appliance, hours) in appliances.used() {
        breakdown.push(BreakdownItem::Appliance(appliance), Appliance::consumption(hours));
    }
    let total = breakdown.total();
    debug!(?total, n_items = breakdown.len(), "computed");
    Calculation { total, breakdown }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use enumset::EnumSet;
    use itertools::Itertools;

    use super::*;
    use crate::{core::appliance::ApplianceUsage, quantity::time::Hours};

    #[test]
    fn test_one_bhk_without_appliances() {
        let calculation = compute(Facility::OneBhk, &Appliances::default());
        assert_abs_diff_eq!(calculation.total.0, 2.4, epsilon = 1e-9);
        assert_eq!(
            calculation.breakdown.iter().map(|(item, _)| item.to_string()).collect_vec(),
            ["Lights (2 units)", "Basic appliances"],
        );
        let energies = calculation.breakdown.iter().map(|(_, energy)| energy.0).collect_vec();
        assert_abs_diff_eq!(energies[0], 0.8, epsilon = 1e-9);
        assert_abs_diff_eq!(energies[1], 1.6, epsilon = 1e-9);
    }

    #[test]
    fn test_two_bhk_with_air_conditioner_and_refrigerator() {
        let appliances = Appliances {
            air_conditioner: ApplianceUsage::used(Hours(8.0)),
            refrigerator: ApplianceUsage::used(Hours(24.0)),
            washing_machine: ApplianceUsage::NotUsed,
        };
        let calculation = compute(Facility::TwoBhk, &appliances);
        assert_abs_diff_eq!(calculation.total.0, 7.6, epsilon = 1e-9);
        assert_eq!(
            calculation.breakdown.iter().map(|(item, _)| item.to_string()).collect_vec(),
            ["Lights (3 units)", "Basic appliances", "Air Conditioner", "Refrigerator"],
        );
    }

    #[test]
    fn test_breakdown_order_is_fixed() {
        let appliances = Appliances {
            washing_machine: ApplianceUsage::used(Hours(2.0)),
            air_conditioner: ApplianceUsage::used(Hours(1.0)),
            refrigerator: ApplianceUsage::NotUsed,
        };
        let calculation = compute(Facility::ThreeBhk, &appliances);
        assert_eq!(
            calculation.breakdown.iter().map(|(item, _)| item).collect_vec(),
            [
                BreakdownItem::Lights { units: 4 },
                BreakdownItem::BasicAppliances,
                BreakdownItem::Appliance(Appliance::AirConditioner),
                BreakdownItem::Appliance(Appliance::WashingMachine),
            ],
        );
    }

    #[test]
    fn test_total_equals_breakdown_sum() {
        let hours = [0.0, 0.5, 2.0, 7.25, 13.0, 24.0];
        for facility in EnumSet::<Facility>::all() {
            for (ac, fridge, wm) in itertools::iproduct!(hours, hours, hours) {
                let appliances = Appliances {
                    air_conditioner: ApplianceUsage::used(Hours(ac)),
                    refrigerator: ApplianceUsage::used(Hours(fridge)),
                    washing_machine: ApplianceUsage::used(Hours(wm)),
                };
                let calculation = compute(facility, &appliances);
                let sum: f64 = calculation.breakdown.iter().map(|(_, energy)| energy.0).sum();
                assert_abs_diff_eq!(calculation.total.0, sum, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_unused_appliance_ignores_hours() {
        let calculation = compute(Facility::OneBhk, &Appliances::from_hours(None, None, None));
        assert_eq!(calculation.breakdown.len(), 2);
    }
}
