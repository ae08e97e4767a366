#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChargingRateUnit {
    W,
    A,
}

impl core::fmt::Display for ChargingRateUnit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            ChargingRateUnit::W => "W",
            ChargingRateUnit::A => "A",
        };
        write!(f, "{s}")
    }
}
