use core::fmt::Display;

use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, TimeDelta, Utc};
use rust_decimal::Decimal;
use serde_json::{Map, Value};

use super::codec::JsonCodec;
use super::context::CodecContext;
use super::fields::CUSTOM_DATA;
use super::numbers;
use crate::v21::types::CustomData;

/// Builds the JSON object of one value object.
///
/// Fields come out in the order they are written. The `put_opt*` family
/// leaves absent values out instead of writing `null`.
pub struct FieldWriter<'a> {
    object: Map<String, Value>,
    context: &'a CodecContext,
}

impl<'a> FieldWriter<'a> {
    pub fn new(context: &'a CodecContext) -> Self {
        Self {
            object: Map::new(),
            context,
        }
    }

    pub fn put(&mut self, field: &str, value: impl Into<Value>) {
        self.object.insert(field.to_owned(), value.into());
    }

    pub fn put_opt(&mut self, field: &str, value: Option<impl Into<Value>>) {
        if let Some(value) = value {
            self.put(field, value);
        }
    }

    /// Enumerations are written through their wire name.
    pub fn put_display(&mut self, field: &str, value: &impl Display) {
        self.put(field, value.to_string());
    }

    pub fn put_opt_display(&mut self, field: &str, value: Option<&impl Display>) {
        if let Some(value) = value {
            self.put_display(field, value);
        }
    }

    pub fn put_decimal(&mut self, field: &str, value: &Decimal) {
        self.put(field, numbers::decimal_to_json(value));
    }

    pub fn put_opt_decimal(&mut self, field: &str, value: Option<&Decimal>) {
        if let Some(value) = value {
            self.put_decimal(field, value);
        }
    }

    pub fn put_seconds(&mut self, field: &str, value: &TimeDelta) {
        self.put(field, numbers::seconds_to_json(value));
    }

    pub fn put_opt_seconds(&mut self, field: &str, value: Option<&TimeDelta>) {
        if let Some(value) = value {
            self.put_seconds(field, value);
        }
    }

    pub fn put_timestamp(&mut self, field: &str, value: &DateTime<Utc>) {
        self.put(field, value.to_rfc3339_opts(SecondsFormat::AutoSi, true));
    }

    pub fn put_opt_time_of_day(&mut self, field: &str, value: Option<&NaiveTime>) {
        if let Some(value) = value {
            self.put(field, value.format(numbers::TIME_OF_DAY_FORMAT).to_string());
        }
    }

    pub fn put_opt_date(&mut self, field: &str, value: Option<&NaiveDate>) {
        if let Some(value) = value {
            self.put(field, value.format(numbers::DATE_FORMAT).to_string());
        }
    }

    pub fn put_object<T: JsonCodec>(&mut self, field: &str, value: &T) {
        let json = value.to_json_with(self.context);
        self.put(field, json);
    }

    pub fn put_opt_object<T: JsonCodec>(&mut self, field: &str, value: Option<&T>) {
        if let Some(value) = value {
            self.put_object(field, value);
        }
    }

    /// Always written, even when empty.
    pub fn put_array<T: JsonCodec>(&mut self, field: &str, values: &[T]) {
        let json: Vec<Value> = values
            .iter()
            .map(|value| value.to_json_with(self.context))
            .collect();
        self.put(field, json);
    }

    /// Left out when empty.
    pub fn put_nonempty_array<T: JsonCodec>(&mut self, field: &str, values: &[T]) {
        if !values.is_empty() {
            self.put_array(field, values);
        }
    }

    pub fn put_nonempty_display_list<T: Display>(&mut self, field: &str, values: &[T]) {
        if !values.is_empty() {
            let json: Vec<Value> = values.iter().map(|v| Value::from(v.to_string())).collect();
            self.put(field, json);
        }
    }

    pub fn put_custom_data(&mut self, value: Option<&CustomData>) {
        self.put_opt_object(CUSTOM_DATA, value);
    }

    pub fn finish(self) -> Value {
        Value::Object(self.object)
    }
}
