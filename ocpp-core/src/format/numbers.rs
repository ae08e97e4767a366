use core::str::FromStr;

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use rust_decimal::Decimal;
use serde_json::{Number, Value};

pub(crate) const TIME_OF_DAY_FORMAT: &str = "%H:%M";
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn decimal_from_json(value: &Value) -> Result<Decimal, String> {
    let Value::Number(number) = value else {
        return Err(format!("expected a number, found {value}"));
    };
    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|e| format!("{text} is not a decimal number: {e}"))
}

/// Writes the normalized decimal text as is, so every digit survives.
/// Integral values come out without a fraction.
pub(crate) fn decimal_to_json(value: &Decimal) -> Value {
    Number::from_str(&value.normalize().to_string()).map_or(Value::Null, Value::Number)
}

pub(crate) fn seconds_from_json(value: &Value) -> Result<TimeDelta, String> {
    let seconds = value
        .as_i64()
        .ok_or_else(|| format!("expected a whole number of seconds, found {value}"))?;
    TimeDelta::try_seconds(seconds).ok_or_else(|| format!("{seconds} seconds is out of range"))
}

pub(crate) fn seconds_to_json(value: &TimeDelta) -> Value {
    Value::from(value.num_seconds())
}

pub(crate) fn time_of_day_from_json(value: &Value) -> Result<NaiveTime, String> {
    let text = value
        .as_str()
        .ok_or_else(|| format!("expected a time of day, found {value}"))?;
    NaiveTime::parse_from_str(text, TIME_OF_DAY_FORMAT)
        .map_err(|e| format!("'{text}' is not a HH:MM time of day: {e}"))
}

pub(crate) fn date_from_json(value: &Value) -> Result<NaiveDate, String> {
    let text = value
        .as_str()
        .ok_or_else(|| format!("expected a date, found {value}"))?;
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|e| format!("'{text}' is not a YYYY-MM-DD date: {e}"))
}
