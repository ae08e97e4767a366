use chrono::{NaiveDate, NaiveTime, TimeDelta};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::codec::JsonCodec;
use super::context::CodecContext;
use super::error::ParseError;
use super::numbers;
use crate::v21::types::CustomData;

pub(crate) const CUSTOM_DATA: &str = "customData";

/// Reads the declared fields of one JSON object.
///
/// A field holding JSON `null` is treated like an absent field. Conversion
/// failures are reported against the field name together with the message of
/// the underlying converter.
pub struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    context: &'a CodecContext,
}

impl<'a> FieldReader<'a> {
    pub fn new(object: &'a Map<String, Value>, context: &'a CodecContext) -> Self {
        Self { object, context }
    }

    pub fn context(&self) -> &'a CodecContext {
        self.context
    }

    pub fn object(&self) -> &'a Map<String, Value> {
        self.object
    }

    fn raw(&self, field: &'static str) -> Option<&'a Value> {
        self.object.get(field).filter(|value| !value.is_null())
    }

    fn require(&self, field: &'static str) -> Result<&'a Value, ParseError> {
        self.raw(field).ok_or(ParseError::MissingField { field })
    }

    fn mandatory_with<T>(
        &self,
        field: &'static str,
        convert: impl FnOnce(&'a Value) -> Result<T, String>,
    ) -> Result<T, ParseError> {
        convert(self.require(field)?).map_err(|reason| ParseError::invalid(field, reason))
    }

    fn optional_with<T>(
        &self,
        field: &'static str,
        convert: impl FnOnce(&'a Value) -> Result<T, String>,
    ) -> Result<Option<T>, ParseError> {
        self.raw(field)
            .map(convert)
            .transpose()
            .map_err(|reason| ParseError::invalid(field, reason))
    }

    /// Any serde-deserializable scalar: integers, enums, date-times.
    pub fn mandatory<T: DeserializeOwned>(&self, field: &'static str) -> Result<T, ParseError> {
        self.mandatory_with(field, deserialize)
    }

    pub fn optional<T: DeserializeOwned>(
        &self,
        field: &'static str,
    ) -> Result<Option<T>, ParseError> {
        self.optional_with(field, deserialize)
    }

    pub fn mandatory_text(&self, field: &'static str) -> Result<String, ParseError> {
        self.mandatory_with(field, text)
    }

    pub fn optional_text(&self, field: &'static str) -> Result<Option<String>, ParseError> {
        self.optional_with(field, text)
    }

    pub fn mandatory_decimal(&self, field: &'static str) -> Result<Decimal, ParseError> {
        self.mandatory_with(field, numbers::decimal_from_json)
    }

    pub fn optional_decimal(&self, field: &'static str) -> Result<Option<Decimal>, ParseError> {
        self.optional_with(field, numbers::decimal_from_json)
    }

    pub fn mandatory_seconds(&self, field: &'static str) -> Result<TimeDelta, ParseError> {
        self.mandatory_with(field, numbers::seconds_from_json)
    }

    pub fn optional_seconds(&self, field: &'static str) -> Result<Option<TimeDelta>, ParseError> {
        self.optional_with(field, numbers::seconds_from_json)
    }

    pub fn optional_time_of_day(
        &self,
        field: &'static str,
    ) -> Result<Option<NaiveTime>, ParseError> {
        self.optional_with(field, numbers::time_of_day_from_json)
    }

    pub fn optional_date(&self, field: &'static str) -> Result<Option<NaiveDate>, ParseError> {
        self.optional_with(field, numbers::date_from_json)
    }

    /// A nested value object, parsed with the same context.
    pub fn mandatory_object<T: JsonCodec>(&self, field: &'static str) -> Result<T, ParseError> {
        T::try_parse_with(self.require(field)?, self.context)
    }

    pub fn optional_object<T: JsonCodec>(
        &self,
        field: &'static str,
    ) -> Result<Option<T>, ParseError> {
        self.raw(field)
            .map(|json| T::try_parse_with(json, self.context))
            .transpose()
    }

    /// An array of nested value objects. The first element that fails to
    /// parse aborts the whole array.
    pub fn mandatory_array<T: JsonCodec>(&self, field: &'static str) -> Result<Vec<T>, ParseError> {
        self.array(field, self.require(field)?)
    }

    /// Like `mandatory_array`, but an absent field yields an empty vector.
    pub fn optional_array<T: JsonCodec>(&self, field: &'static str) -> Result<Vec<T>, ParseError> {
        match self.raw(field) {
            Some(json) => self.array(field, json),
            None => Ok(Vec::new()),
        }
    }

    /// An array of scalars, absent yields an empty vector.
    pub fn optional_list<T: DeserializeOwned>(
        &self,
        field: &'static str,
    ) -> Result<Vec<T>, ParseError> {
        Ok(self.optional_with(field, deserialize)?.unwrap_or_default())
    }

    fn array<T: JsonCodec>(&self, field: &'static str, json: &Value) -> Result<Vec<T>, ParseError> {
        json.as_array()
            .ok_or_else(|| ParseError::invalid(field, format!("expected an array, found {json}")))?
            .iter()
            .map(|item| T::try_parse_with(item, self.context))
            .collect()
    }

    pub fn custom_data(&self) -> Result<Option<CustomData>, ParseError> {
        self.optional_object(CUSTOM_DATA)
    }
}

fn deserialize<T: DeserializeOwned>(json: &Value) -> Result<T, String> {
    T::deserialize(json).map_err(|e| e.to_string())
}

fn text(json: &Value) -> Result<String, String> {
    json.as_str()
        .map(str::to_owned)
        .ok_or_else(|| format!("expected a string, found {json}"))
}
