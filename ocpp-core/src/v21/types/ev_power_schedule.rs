use core::fmt;

use chrono::{DateTime, TimeDelta, Utc};

use crate::format::bounds;
use crate::format::codec::{impl_serde_via_codec, JsonCodec};
use crate::format::{FieldReader, FieldWriter, ParseError, ValidationError};

use super::{CustomData, EVPowerScheduleEntry};

const ENTRIES: &str = "evPowerScheduleEntries";
const TIME_ANCHOR: &str = "timeAnchor";

/// The power profile an EV intends to follow, starting at `timeAnchor`.
///
/// ```json
/// {
///   "evPowerScheduleEntries": [EVPowerScheduleEntry, 1..1024],
///   "timeAnchor": date-time,
///   "customData": CustomData?
/// }
/// ```
///
/// Entries follow each other in time, so their order is significant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EVPowerSchedule {
    entries: Vec<EVPowerScheduleEntry>,
    time_anchor: DateTime<Utc>,
    custom_data: Option<CustomData>,
}

impl EVPowerSchedule {
    pub fn new(
        entries: Vec<EVPowerScheduleEntry>,
        time_anchor: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if entries.is_empty() {
            return Err(ValidationError::EmptyCollection { field: ENTRIES });
        }
        Ok(Self {
            entries,
            time_anchor,
            custom_data: None,
        })
    }

    pub fn with_custom_data(mut self, custom_data: CustomData) -> Self {
        self.custom_data = Some(custom_data);
        self
    }

    pub fn entries(&self) -> &[EVPowerScheduleEntry] {
        &self.entries
    }

    pub fn time_anchor(&self) -> DateTime<Utc> {
        self.time_anchor
    }

    pub fn custom_data(&self) -> Option<&CustomData> {
        self.custom_data.as_ref()
    }

    /// The entry in effect at `at`, if the schedule covers it.
    ///
    /// An entry with a negative duration covers no time at all.
    pub fn entry_at(&self, at: DateTime<Utc>) -> Option<&EVPowerScheduleEntry> {
        let mut offset = at.signed_duration_since(self.time_anchor);
        if offset < TimeDelta::zero() {
            return None;
        }
        for entry in &self.entries {
            let duration = entry.duration().max(TimeDelta::zero());
            if offset < duration {
                return Some(entry);
            }
            offset = offset.checked_sub(&duration)?;
        }
        None
    }
}

impl JsonCodec for EVPowerSchedule {
    const TYPE_NAME: &'static str = "EVPowerSchedule";

    fn read_fields(fields: &FieldReader<'_>) -> Result<Self, ParseError> {
        let entries = fields.mandatory_array(ENTRIES)?;
        let time_anchor = fields.mandatory(TIME_ANCHOR)?;
        let custom_data = fields.custom_data()?;
        Ok(Self {
            custom_data,
            ..Self::new(entries, time_anchor)?
        })
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.put_array(ENTRIES, &self.entries);
        out.put_timestamp(TIME_ANCHOR, &self.time_anchor);
        out.put_custom_data(self.custom_data.as_ref());
    }

    fn check_bounds(&self) -> Result<(), ValidationError> {
        let count = self.entries.len();
        bounds::within(ENTRIES, &count, Some(1), Some(1024), "1..=1024 elements")?;
        self.entries
            .iter()
            .try_for_each(EVPowerScheduleEntry::check_bounds)?;
        bounds::nested(self.custom_data.as_ref())
    }
}

impl fmt::Display for EVPowerSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} entries from {}", self.entries.len(), self.time_anchor)
    }
}

impl_serde_via_codec!(EVPowerSchedule);
