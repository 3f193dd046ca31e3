quantity!(KilowattHourRate, suffix: "₹/kWh", precision: 2);

/// Fixed tariff applied to every record.
pub const RATE: KilowattHourRate = KilowattHourRate(5.0);
