use std::ops::Mul;

use crate::quantity::{cost::Cost, rate::KilowattHourRate};

quantity!(KilowattHours, suffix: "kWh", precision: 2);

impl Mul<KilowattHourRate> for KilowattHours {
    type Output = Cost;

    fn mul(self, rhs: KilowattHourRate) -> Self::Output {
        Cost(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(KilowattHours(2.4).to_string(), "2.40 kWh");
    }

    #[test]
    fn test_cost() {
        assert_eq!(KilowattHours(7.6) * KilowattHourRate(5.0), Cost(7.6 * 5.0));
    }

    #[test]
    fn test_ordering() {
        assert!(KilowattHours(1.0) < KilowattHours(2.0));
        assert_eq!(
            [KilowattHours(3.0), KilowattHours(1.0)].into_iter().max(),
            Some(KilowattHours(3.0)),
        );
    }
}
