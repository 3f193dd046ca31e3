pub mod appliance;
pub mod breakdown;
pub mod calculator;
pub mod facility;
pub mod housing;
pub mod record;
pub mod store;
pub mod validation;
pub mod weekday;
