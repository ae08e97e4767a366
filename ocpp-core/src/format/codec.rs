use serde_json::Value;

use super::context::CodecContext;
use super::error::{ParseError, ValidationError};
use super::fields::FieldReader;
use super::writer::FieldWriter;

/// JSON representation shared by every OCPP value object.
///
/// Implementors provide `read_fields` / `write_fields`; parsing, hook
/// handling and bound checking are provided on top of those.
pub trait JsonCodec: Sized + 'static {
    const TYPE_NAME: &'static str;

    fn read_fields(fields: &FieldReader<'_>) -> Result<Self, ParseError>;

    fn write_fields(&self, out: &mut FieldWriter<'_>);

    /// Bounds documented by the OCPP schema that construction does not
    /// enforce, for this value and everything nested in it. Only consulted
    /// while parsing when `CodecOptions::strict_bounds` is set.
    fn check_bounds(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    fn try_parse(json: &Value) -> Result<Self, ParseError> {
        Self::try_parse_with(json, &CodecContext::default())
    }

    fn try_parse_with(json: &Value, context: &CodecContext) -> Result<Self, ParseError> {
        let object = json.as_object().ok_or(ParseError::NotAnObject {
            type_name: Self::TYPE_NAME,
        })?;
        let value = match Self::read_fields(&FieldReader::new(object, context)) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("rejected {}: {}", Self::TYPE_NAME, e);
                return Err(e);
            }
        };
        if context.options().strict_bounds {
            if let Err(e) = value.check_bounds() {
                log::warn!("{} is outside of its schema bounds: {}", Self::TYPE_NAME, e);
                return Err(e.into());
            }
        }
        Ok(context.hooks().after_parse(json, value))
    }

    /// Parses JSON text.
    fn parse(text: &str) -> Result<Self, ParseError> {
        let json: Value =
            serde_json::from_str(text).map_err(|e| ParseError::Syntax(e.to_string()))?;
        Self::try_parse(&json)
    }

    fn to_json(&self) -> Value {
        self.to_json_with(&CodecContext::default())
    }

    fn to_json_with(&self, context: &CodecContext) -> Value {
        let mut out = FieldWriter::new(context);
        self.write_fields(&mut out);
        context.hooks().after_serialize(self, out.finish())
    }
}

/// Implements `Serialize`, `Deserialize` and `FromStr` through `JsonCodec`,
/// so value objects can sit inside plain serde structs.
macro_rules! impl_serde_via_codec {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl serde::Serialize for $ty {
                fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serde::Serialize::serialize(&$crate::format::codec::JsonCodec::to_json(self), serializer)
                }
            }

            impl<'de> serde::Deserialize<'de> for $ty {
                fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let json = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                    <$ty as $crate::format::codec::JsonCodec>::try_parse(&json)
                        .map_err(serde::de::Error::custom)
                }
            }

            impl core::str::FromStr for $ty {
                type Err = $crate::format::error::ParseError;

                fn from_str(text: &str) -> Result<Self, Self::Err> {
                    <$ty as $crate::format::codec::JsonCodec>::parse(text)
                }
            }
        )+
    };
}

pub(crate) use impl_serde_via_codec;
