use core::fmt;

use rust_decimal::Decimal;

use crate::format::codec::{impl_serde_via_codec, JsonCodec};
use crate::format::{bounds, FieldReader, FieldWriter, ParseError, ValidationError};

use super::CustomData;

const ENERGY_FEE: &str = "energyFee";
const POWER_RANGE_START: &str = "powerRangeStart";

/// Energy price that applies from a power level on.
///
/// ```json
/// { "energyFee": number, "powerRangeStart": number, "customData": CustomData? }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EVPriceRule {
    energy_fee: Decimal,
    power_range_start: Decimal,
    custom_data: Option<CustomData>,
}

impl EVPriceRule {
    pub fn new(energy_fee: Decimal, power_range_start: Decimal) -> Self {
        Self {
            energy_fee,
            power_range_start,
            custom_data: None,
        }
    }

    pub fn with_custom_data(mut self, custom_data: CustomData) -> Self {
        self.custom_data = Some(custom_data);
        self
    }

    pub fn energy_fee(&self) -> Decimal {
        self.energy_fee
    }

    pub fn power_range_start(&self) -> Decimal {
        self.power_range_start
    }

    pub fn custom_data(&self) -> Option<&CustomData> {
        self.custom_data.as_ref()
    }
}

impl JsonCodec for EVPriceRule {
    const TYPE_NAME: &'static str = "EVPriceRule";

    fn read_fields(fields: &FieldReader<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            energy_fee: fields.mandatory_decimal(ENERGY_FEE)?,
            power_range_start: fields.mandatory_decimal(POWER_RANGE_START)?,
            custom_data: fields.custom_data()?,
        })
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.put_decimal(ENERGY_FEE, &self.energy_fee);
        out.put_decimal(POWER_RANGE_START, &self.power_range_start);
        out.put_custom_data(self.custom_data.as_ref());
    }

    fn check_bounds(&self) -> Result<(), ValidationError> {
        bounds::nested(self.custom_data.as_ref())
    }
}

impl fmt::Display for EVPriceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from {} W", self.energy_fee, self.power_range_start)
    }
}

impl_serde_via_codec!(EVPriceRule);
