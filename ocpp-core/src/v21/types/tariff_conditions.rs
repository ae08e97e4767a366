use core::fmt;

use chrono::TimeDelta;
use rust_decimal::Decimal;

use crate::format::bounds;
use crate::format::codec::{impl_serde_via_codec, JsonCodec};
use crate::format::{FieldReader, FieldWriter, ParseError, ValidationError};

use super::{CustomData, TariffWindow};

const MIN_ENERGY: &str = "minEnergy";
const MAX_ENERGY: &str = "maxEnergy";
const MIN_CURRENT: &str = "minCurrent";
const MAX_CURRENT: &str = "maxCurrent";
const MIN_POWER: &str = "minPower";
const MAX_POWER: &str = "maxPower";
const MIN_TIME: &str = "minTime";
const MAX_TIME: &str = "maxTime";
const MIN_CHARGING_TIME: &str = "minChargingTime";
const MAX_CHARGING_TIME: &str = "maxChargingTime";
const MIN_IDLE_TIME: &str = "minIdleTime";
const MAX_IDLE_TIME: &str = "maxIdleTime";

/// Restrictions under which an energy or time price applies.
///
/// ```json
/// {
///   "startTimeOfDay": "HH:MM"?, "endTimeOfDay": "HH:MM"?,
///   "dayOfWeek": [DayOfWeek, 1..7]?,
///   "validFromDate": "YYYY-MM-DD"?, "validToDate": "YYYY-MM-DD"?,
///   "evseKind": EvseKind?,
///   "minEnergy": number(Wh)?, "maxEnergy": number(Wh)?,
///   "minCurrent": number(A)?, "maxCurrent": number(A)?,
///   "minPower": number(W)?, "maxPower": number(W)?,
///   "minTime": integer(s)?, "maxTime": integer(s)?,
///   "minChargingTime": integer(s)?, "maxChargingTime": integer(s)?,
///   "minIdleTime": integer(s)?, "maxIdleTime": integer(s)?,
///   "customData": CustomData?
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TariffConditions {
    window: TariffWindow,
    min_energy: Option<Decimal>,
    max_energy: Option<Decimal>,
    min_current: Option<Decimal>,
    max_current: Option<Decimal>,
    min_power: Option<Decimal>,
    max_power: Option<Decimal>,
    min_time: Option<TimeDelta>,
    max_time: Option<TimeDelta>,
    min_charging_time: Option<TimeDelta>,
    max_charging_time: Option<TimeDelta>,
    min_idle_time: Option<TimeDelta>,
    max_idle_time: Option<TimeDelta>,
    custom_data: Option<CustomData>,
}

impl TariffConditions {
    pub fn new(window: TariffWindow) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    pub fn with_energy(mut self, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        self.min_energy = min;
        self.max_energy = max;
        self
    }

    pub fn with_current(mut self, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        self.min_current = min;
        self.max_current = max;
        self
    }

    pub fn with_power(mut self, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        self.min_power = min;
        self.max_power = max;
        self
    }

    pub fn with_time(mut self, min: Option<TimeDelta>, max: Option<TimeDelta>) -> Self {
        self.min_time = min;
        self.max_time = max;
        self
    }

    pub fn with_charging_time(mut self, min: Option<TimeDelta>, max: Option<TimeDelta>) -> Self {
        self.min_charging_time = min;
        self.max_charging_time = max;
        self
    }

    pub fn with_idle_time(mut self, min: Option<TimeDelta>, max: Option<TimeDelta>) -> Self {
        self.min_idle_time = min;
        self.max_idle_time = max;
        self
    }

    pub fn with_custom_data(mut self, custom_data: CustomData) -> Self {
        self.custom_data = Some(custom_data);
        self
    }

    pub fn window(&self) -> &TariffWindow {
        &self.window
    }

    pub fn energy(&self) -> (Option<Decimal>, Option<Decimal>) {
        (self.min_energy, self.max_energy)
    }

    pub fn current(&self) -> (Option<Decimal>, Option<Decimal>) {
        (self.min_current, self.max_current)
    }

    pub fn power(&self) -> (Option<Decimal>, Option<Decimal>) {
        (self.min_power, self.max_power)
    }

    pub fn time(&self) -> (Option<TimeDelta>, Option<TimeDelta>) {
        (self.min_time, self.max_time)
    }

    pub fn charging_time(&self) -> (Option<TimeDelta>, Option<TimeDelta>) {
        (self.min_charging_time, self.max_charging_time)
    }

    pub fn idle_time(&self) -> (Option<TimeDelta>, Option<TimeDelta>) {
        (self.min_idle_time, self.max_idle_time)
    }

    pub fn custom_data(&self) -> Option<&CustomData> {
        self.custom_data.as_ref()
    }
}

impl JsonCodec for TariffConditions {
    const TYPE_NAME: &'static str = "TariffConditions";

    fn read_fields(fields: &FieldReader<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            window: TariffWindow::read(fields)?,
            min_energy: fields.optional_decimal(MIN_ENERGY)?,
            max_energy: fields.optional_decimal(MAX_ENERGY)?,
            min_current: fields.optional_decimal(MIN_CURRENT)?,
            max_current: fields.optional_decimal(MAX_CURRENT)?,
            min_power: fields.optional_decimal(MIN_POWER)?,
            max_power: fields.optional_decimal(MAX_POWER)?,
            min_time: fields.optional_seconds(MIN_TIME)?,
            max_time: fields.optional_seconds(MAX_TIME)?,
            min_charging_time: fields.optional_seconds(MIN_CHARGING_TIME)?,
            max_charging_time: fields.optional_seconds(MAX_CHARGING_TIME)?,
            min_idle_time: fields.optional_seconds(MIN_IDLE_TIME)?,
            max_idle_time: fields.optional_seconds(MAX_IDLE_TIME)?,
            custom_data: fields.custom_data()?,
        })
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        self.window.write(out);
        out.put_opt_decimal(MIN_ENERGY, self.min_energy.as_ref());
        out.put_opt_decimal(MAX_ENERGY, self.max_energy.as_ref());
        out.put_opt_decimal(MIN_CURRENT, self.min_current.as_ref());
        out.put_opt_decimal(MAX_CURRENT, self.max_current.as_ref());
        out.put_opt_decimal(MIN_POWER, self.min_power.as_ref());
        out.put_opt_decimal(MAX_POWER, self.max_power.as_ref());
        out.put_opt_seconds(MIN_TIME, self.min_time.as_ref());
        out.put_opt_seconds(MAX_TIME, self.max_time.as_ref());
        out.put_opt_seconds(MIN_CHARGING_TIME, self.min_charging_time.as_ref());
        out.put_opt_seconds(MAX_CHARGING_TIME, self.max_charging_time.as_ref());
        out.put_opt_seconds(MIN_IDLE_TIME, self.min_idle_time.as_ref());
        out.put_opt_seconds(MAX_IDLE_TIME, self.max_idle_time.as_ref());
        out.put_custom_data(self.custom_data.as_ref());
    }

    fn check_bounds(&self) -> Result<(), ValidationError> {
        let zero = TimeDelta::zero();
        [
            (MIN_TIME, self.min_time),
            (MAX_TIME, self.max_time),
            (MIN_CHARGING_TIME, self.min_charging_time),
            (MAX_CHARGING_TIME, self.max_charging_time),
            (MIN_IDLE_TIME, self.min_idle_time),
            (MAX_IDLE_TIME, self.max_idle_time),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| (field, value)))
        .try_for_each(|(field, value)| {
            bounds::within(field, &value, Some(zero), None, "a duration >= 0s")
        })?;
        bounds::nested(self.custom_data.as_ref())
    }
}

impl fmt::Display for TariffConditions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::default() {
            return write!(f, "always");
        }
        let window = &self.window;
        let mut parts: Vec<String> = Vec::new();
        if let (Some(start), Some(end)) = (window.start_time_of_day(), window.end_time_of_day()) {
            parts.push(format!("{}-{}", start.format("%H:%M"), end.format("%H:%M")));
        }
        if !window.days_of_week().is_empty() {
            let days: Vec<String> = window.days_of_week().iter().map(|d| d.to_string()).collect();
            parts.push(days.join("/"));
        }
        if let Some(kind) = window.evse_kind() {
            parts.push(kind.to_string());
        }
        if self.min_energy.is_some() || self.max_energy.is_some() {
            parts.push(String::from("energy limited"));
        }
        if self.min_power.is_some() || self.max_power.is_some() {
            parts.push(String::from("power limited"));
        }
        if parts.is_empty() {
            parts.push(String::from("conditional"));
        }
        write!(f, "{}", parts.join(", "))
    }
}

impl_serde_via_codec!(TariffConditions);
