use core::fmt;

use chrono::TimeDelta;
use rust_decimal::Decimal;

use crate::format::bounds;
use crate::format::codec::{impl_serde_via_codec, JsonCodec};
use crate::format::{FieldReader, FieldWriter, ParseError, ValidationError};

use super::CustomData;

const DURATION: &str = "duration";
const POWER: &str = "power";

/// Power the EV plans to draw (positive) or feed back (negative) for a while.
///
/// ```json
/// { "duration": integer(s), "power": number, "customData": CustomData? }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EVPowerScheduleEntry {
    duration: TimeDelta,
    power: Decimal,
    custom_data: Option<CustomData>,
}

impl EVPowerScheduleEntry {
    pub fn new(duration: TimeDelta, power: Decimal) -> Self {
        Self {
            duration,
            power,
            custom_data: None,
        }
    }

    pub fn with_custom_data(mut self, custom_data: CustomData) -> Self {
        self.custom_data = Some(custom_data);
        self
    }

    pub fn duration(&self) -> TimeDelta {
        self.duration
    }

    pub fn power(&self) -> Decimal {
        self.power
    }

    pub fn custom_data(&self) -> Option<&CustomData> {
        self.custom_data.as_ref()
    }
}

impl JsonCodec for EVPowerScheduleEntry {
    const TYPE_NAME: &'static str = "EVPowerScheduleEntry";

    fn read_fields(fields: &FieldReader<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            duration: fields.mandatory_seconds(DURATION)?,
            power: fields.mandatory_decimal(POWER)?,
            custom_data: fields.custom_data()?,
        })
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.put_seconds(DURATION, &self.duration);
        out.put_decimal(POWER, &self.power);
        out.put_custom_data(self.custom_data.as_ref());
    }

    fn check_bounds(&self) -> Result<(), ValidationError> {
        bounds::within(
            DURATION,
            &self.duration,
            Some(TimeDelta::zero()),
            None,
            "a duration >= 0s",
        )?;
        bounds::nested(self.custom_data.as_ref())
    }
}

impl fmt::Display for EVPowerScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} W for {} s", self.power, self.duration.num_seconds())
    }
}

impl_serde_via_codec!(EVPowerScheduleEntry);
