use core::fmt;

use rust_decimal::Decimal;

use crate::format::bounds;
use crate::format::codec::{impl_serde_via_codec, JsonCodec};
use crate::format::{FieldReader, FieldWriter, ParseError, ValidationError};

use super::{ChargingRateUnit, ChargingRateValue, CustomData};

const SOC: &str = "soc";
const LIMIT: &str = "limit";

/// A charging limit tied to a state of charge.
///
/// ```json
/// { "soc": integer(0..100), "limit": number, "customData": CustomData? }
/// ```
///
/// Used both as the limit that applies once the SoC is reached
/// ([`LimitAtSoC`]) and the limit that applies above it ([`LimitBeyondSoC`]).
/// The limit carries no unit, it is interpreted in the `chargingRateUnit` of
/// the surrounding schedule, see [`SocLimit::limit_in`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SocLimit {
    soc: i32,
    limit: Decimal,
    custom_data: Option<CustomData>,
}

pub type LimitAtSoC = SocLimit;
pub type LimitBeyondSoC = SocLimit;

impl SocLimit {
    pub fn new(soc: i32, limit: Decimal) -> Self {
        Self {
            soc,
            limit,
            custom_data: None,
        }
    }

    pub fn from_rate(soc: i32, limit: ChargingRateValue) -> Self {
        Self::new(soc, limit.value())
    }

    pub fn with_custom_data(mut self, custom_data: CustomData) -> Self {
        self.custom_data = Some(custom_data);
        self
    }

    pub fn soc(&self) -> i32 {
        self.soc
    }

    pub fn limit(&self) -> Decimal {
        self.limit
    }

    pub fn limit_in(&self, unit: ChargingRateUnit) -> ChargingRateValue {
        ChargingRateValue::new(self.limit, unit)
    }

    pub fn custom_data(&self) -> Option<&CustomData> {
        self.custom_data.as_ref()
    }
}

impl JsonCodec for SocLimit {
    const TYPE_NAME: &'static str = "LimitAtSoC";

    fn read_fields(fields: &FieldReader<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            soc: fields.mandatory(SOC)?,
            limit: fields.mandatory_decimal(LIMIT)?,
            custom_data: fields.custom_data()?,
        })
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.put(SOC, self.soc);
        out.put_decimal(LIMIT, &self.limit);
        out.put_custom_data(self.custom_data.as_ref());
    }

    fn check_bounds(&self) -> Result<(), ValidationError> {
        bounds::within(SOC, &self.soc, Some(0), Some(100), "a percentage 0..=100")?;
        bounds::non_negative(LIMIT, &self.limit)?;
        bounds::nested(self.custom_data.as_ref())
    }
}

impl fmt::Display for SocLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}% SoC", self.limit, self.soc)
    }
}

impl_serde_via_codec!(SocLimit);
