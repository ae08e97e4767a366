use core::fmt;

use chrono::TimeDelta;
use rust_decimal::Decimal;

use crate::format::bounds;
use crate::format::codec::{impl_serde_via_codec, JsonCodec};
use crate::format::{FieldReader, FieldWriter, ParseError, ValidationError};

use super::{CustomData, EVPriceRule};

const DURATION: &str = "duration";
const EV_PRICE_RULE: &str = "evPriceRule";

/// Price rules that hold for a period of an absolute price schedule.
///
/// ```json
/// {
///   "duration": integer(s),
///   "evPriceRule": [EVPriceRule, 1..8],
///   "customData": CustomData?
/// }
/// ```
///
/// Rules are ordered by ascending `powerRangeStart`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EVAbsolutePriceScheduleEntry {
    duration: TimeDelta,
    ev_price_rules: Vec<EVPriceRule>,
    custom_data: Option<CustomData>,
}

impl EVAbsolutePriceScheduleEntry {
    pub fn new(
        duration: TimeDelta,
        mut ev_price_rules: Vec<EVPriceRule>,
    ) -> Result<Self, ValidationError> {
        if ev_price_rules.is_empty() {
            return Err(ValidationError::EmptyCollection {
                field: EV_PRICE_RULE,
            });
        }
        ev_price_rules.sort_by_key(EVPriceRule::power_range_start);
        Ok(Self {
            duration,
            ev_price_rules,
            custom_data: None,
        })
    }

    pub fn with_custom_data(mut self, custom_data: CustomData) -> Self {
        self.custom_data = Some(custom_data);
        self
    }

    pub fn duration(&self) -> TimeDelta {
        self.duration
    }

    pub fn ev_price_rules(&self) -> &[EVPriceRule] {
        &self.ev_price_rules
    }

    pub fn custom_data(&self) -> Option<&CustomData> {
        self.custom_data.as_ref()
    }

    /// Energy fee that applies when charging at `power`.
    pub fn energy_fee_at(&self, power: Decimal) -> Option<Decimal> {
        self.ev_price_rules
            .iter()
            .take_while(|rule| rule.power_range_start() <= power)
            .last()
            .map(EVPriceRule::energy_fee)
    }
}

impl JsonCodec for EVAbsolutePriceScheduleEntry {
    const TYPE_NAME: &'static str = "EVAbsolutePriceScheduleEntry";

    fn read_fields(fields: &FieldReader<'_>) -> Result<Self, ParseError> {
        let duration = fields.mandatory_seconds(DURATION)?;
        let ev_price_rules = fields.mandatory_array(EV_PRICE_RULE)?;
        let custom_data = fields.custom_data()?;
        Ok(Self {
            custom_data,
            ..Self::new(duration, ev_price_rules)?
        })
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.put_seconds(DURATION, &self.duration);
        out.put_array(EV_PRICE_RULE, &self.ev_price_rules);
        out.put_custom_data(self.custom_data.as_ref());
    }

    fn check_bounds(&self) -> Result<(), ValidationError> {
        let zero = Some(TimeDelta::zero());
        bounds::within(DURATION, &self.duration, zero, None, "a duration >= 0s")?;
        let count = self.ev_price_rules.len();
        bounds::within(EV_PRICE_RULE, &count, Some(1), Some(8), "1..=8 elements")?;
        self.ev_price_rules
            .iter()
            .try_for_each(EVPriceRule::check_bounds)?;
        bounds::nested(self.custom_data.as_ref())
    }
}

impl fmt::Display for EVAbsolutePriceScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} s with {} price rule(s)",
            self.duration.num_seconds(),
            self.ev_price_rules.len()
        )
    }
}

impl_serde_via_codec!(EVAbsolutePriceScheduleEntry);
