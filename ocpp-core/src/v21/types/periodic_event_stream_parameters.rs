use core::fmt;

use chrono::TimeDelta;

use crate::format::bounds;
use crate::format::codec::{impl_serde_via_codec, JsonCodec};
use crate::format::{FieldReader, FieldWriter, ParseError, ValidationError};

use super::CustomData;

const INTERVAL: &str = "interval";
const VALUES: &str = "values";

/// How often a periodic event stream sends its collected values.
///
/// ```json
/// { "interval": integer(s, >=0)?, "values": integer(>=0)?, "customData": CustomData? }
/// ```
///
/// With neither field set every value is sent immediately.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PeriodicEventStreamParameters {
    interval: Option<TimeDelta>,
    values: Option<i32>,
    custom_data: Option<CustomData>,
}

impl PeriodicEventStreamParameters {
    pub fn new(interval: Option<TimeDelta>, values: Option<i32>) -> Self {
        Self {
            interval,
            values,
            custom_data: None,
        }
    }

    pub fn with_custom_data(mut self, custom_data: CustomData) -> Self {
        self.custom_data = Some(custom_data);
        self
    }

    pub fn interval(&self) -> Option<TimeDelta> {
        self.interval
    }

    pub fn values(&self) -> Option<i32> {
        self.values
    }

    pub fn custom_data(&self) -> Option<&CustomData> {
        self.custom_data.as_ref()
    }
}

impl JsonCodec for PeriodicEventStreamParameters {
    const TYPE_NAME: &'static str = "PeriodicEventStreamParameters";

    fn read_fields(fields: &FieldReader<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            interval: fields.optional_seconds(INTERVAL)?,
            values: fields.optional(VALUES)?,
            custom_data: fields.custom_data()?,
        })
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.put_opt_seconds(INTERVAL, self.interval.as_ref());
        out.put_opt(VALUES, self.values);
        out.put_custom_data(self.custom_data.as_ref());
    }

    fn check_bounds(&self) -> Result<(), ValidationError> {
        if let Some(interval) = &self.interval {
            let zero = Some(TimeDelta::zero());
            bounds::within(INTERVAL, interval, zero, None, "a duration >= 0s")?;
        }
        if let Some(values) = self.values {
            bounds::non_negative(VALUES, &values)?;
        }
        bounds::nested(self.custom_data.as_ref())
    }
}

impl fmt::Display for PeriodicEventStreamParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.interval, self.values) {
            (Some(interval), Some(values)) => {
                write!(f, "every {} s or {} values", interval.num_seconds(), values)
            }
            (Some(interval), None) => write!(f, "every {} s", interval.num_seconds()),
            (None, Some(values)) => write!(f, "every {values} values"),
            (None, None) => write!(f, "immediately"),
        }
    }
}

impl_serde_via_codec!(PeriodicEventStreamParameters);
