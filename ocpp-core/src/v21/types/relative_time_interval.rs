use core::fmt;

use chrono::TimeDelta;

use crate::format::bounds;
use crate::format::codec::{impl_serde_via_codec, JsonCodec};
use crate::format::{FieldReader, FieldWriter, ParseError, ValidationError};

use super::CustomData;

const START: &str = "start";
const DURATION: &str = "duration";

/// A time span relative to the start of a schedule.
///
/// ```json
/// { "start": integer(s), "duration": integer(s)?, "customData": CustomData? }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RelativeTimeInterval {
    start: TimeDelta,
    duration: Option<TimeDelta>,
    custom_data: Option<CustomData>,
}

impl RelativeTimeInterval {
    pub fn new(start: TimeDelta, duration: Option<TimeDelta>) -> Self {
        Self {
            start,
            duration,
            custom_data: None,
        }
    }

    pub fn with_custom_data(mut self, custom_data: CustomData) -> Self {
        self.custom_data = Some(custom_data);
        self
    }

    pub fn start(&self) -> TimeDelta {
        self.start
    }

    pub fn duration(&self) -> Option<TimeDelta> {
        self.duration
    }

    /// End of the interval, when it has a duration.
    pub fn end(&self) -> Option<TimeDelta> {
        self.duration
            .and_then(|duration| self.start.checked_add(&duration))
    }

    pub fn custom_data(&self) -> Option<&CustomData> {
        self.custom_data.as_ref()
    }
}

impl JsonCodec for RelativeTimeInterval {
    const TYPE_NAME: &'static str = "RelativeTimeInterval";

    fn read_fields(fields: &FieldReader<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            start: fields.mandatory_seconds(START)?,
            duration: fields.optional_seconds(DURATION)?,
            custom_data: fields.custom_data()?,
        })
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.put_seconds(START, &self.start);
        out.put_opt_seconds(DURATION, self.duration.as_ref());
        out.put_custom_data(self.custom_data.as_ref());
    }

    fn check_bounds(&self) -> Result<(), ValidationError> {
        let zero = Some(TimeDelta::zero());
        bounds::within(START, &self.start, zero, None, "a duration >= 0s")?;
        if let Some(duration) = &self.duration {
            bounds::within(DURATION, duration, zero, None, "a duration >= 0s")?;
        }
        bounds::nested(self.custom_data.as_ref())
    }
}

impl fmt::Display for RelativeTimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.duration {
            Some(duration) => write!(
                f,
                "+{} s for {} s",
                self.start.num_seconds(),
                duration.num_seconds()
            ),
            None => write!(f, "+{} s", self.start.num_seconds()),
        }
    }
}

impl_serde_via_codec!(RelativeTimeInterval);
