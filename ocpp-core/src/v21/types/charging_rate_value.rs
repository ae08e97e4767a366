use core::fmt;

use rust_decimal::Decimal;

use super::ChargingRateUnit;

/// A charging limit together with the unit it is expressed in.
///
/// OCPP transmits limits as bare numbers and states the unit once per
/// schedule, so this type has no JSON form of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChargingRateValue {
    value: Decimal,
    unit: ChargingRateUnit,
}

impl ChargingRateValue {
    pub fn new(value: Decimal, unit: ChargingRateUnit) -> Self {
        Self { value, unit }
    }

    pub fn watts(value: Decimal) -> Self {
        Self::new(value, ChargingRateUnit::W)
    }

    pub fn amperes(value: Decimal) -> Self {
        Self::new(value, ChargingRateUnit::A)
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn unit(&self) -> ChargingRateUnit {
        self.unit
    }
}

impl fmt::Display for ChargingRateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
