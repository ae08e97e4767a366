use core::fmt;

use rust_decimal::Decimal;

use crate::format::bounds;
use crate::format::codec::{impl_serde_via_codec, JsonCodec};
use crate::format::{FieldReader, FieldWriter, ParseError, ValidationError};

use super::CustomData;

const EXPONENT: &str = "exponent";
const VALUE: &str = "value";

/// A number written as `value * 10^exponent`, as used by ISO 15118-20.
///
/// ```json
/// { "exponent": integer(-3..3), "value": integer, "customData": CustomData? }
/// ```
///
/// Equality is structural: `12345e-3` and `123450e-4` are different values
/// even though they denote the same number.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RationalNumber {
    exponent: i32,
    value: i32,
    custom_data: Option<CustomData>,
}

impl RationalNumber {
    pub fn new(value: i32, exponent: i32) -> Self {
        Self {
            exponent,
            value,
            custom_data: None,
        }
    }

    /// Trailing fractional zeros are dropped before the mantissa becomes
    /// `value`. Trailing integer zeros move into a positive exponent, but only
    /// as far as needed to fit `value` in an `i32`.
    pub fn from_decimal(number: Decimal) -> Result<Self, ValidationError> {
        let not_representable = || ValidationError::NotRepresentable(number.to_string());
        let normalized = number.normalize();
        let mut mantissa = normalized.mantissa();
        let mut exponent = -i32::try_from(normalized.scale()).map_err(|_| not_representable())?;
        while i32::try_from(mantissa).is_err() && mantissa % 10 == 0 {
            mantissa /= 10;
            exponent += 1;
        }
        let value = i32::try_from(mantissa).map_err(|_| not_representable())?;
        Ok(Self::new(value, exponent))
    }

    pub fn to_decimal(&self) -> Result<Decimal, ValidationError> {
        let overflow = || ValidationError::NotRepresentable(self.to_string());
        if self.exponent <= 0 {
            let scale = self.exponent.unsigned_abs();
            return Decimal::try_from_i128_with_scale(i128::from(self.value), scale)
                .map_err(|_| overflow());
        }
        if self.value == 0 {
            return Ok(Decimal::ZERO);
        }
        (0..self.exponent).try_fold(Decimal::from(self.value), |acc, _| {
            acc.checked_mul(Decimal::TEN).ok_or_else(overflow)
        })
    }

    pub fn with_custom_data(mut self, custom_data: CustomData) -> Self {
        self.custom_data = Some(custom_data);
        self
    }

    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn custom_data(&self) -> Option<&CustomData> {
        self.custom_data.as_ref()
    }
}

impl JsonCodec for RationalNumber {
    const TYPE_NAME: &'static str = "RationalNumber";

    fn read_fields(fields: &FieldReader<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            exponent: fields.mandatory(EXPONENT)?,
            value: fields.mandatory(VALUE)?,
            custom_data: fields.custom_data()?,
        })
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.put(EXPONENT, self.exponent);
        out.put(VALUE, self.value);
        out.put_custom_data(self.custom_data.as_ref());
    }

    fn check_bounds(&self) -> Result<(), ValidationError> {
        bounds::within(EXPONENT, &self.exponent, Some(-3), Some(3), "-3..=3")?;
        bounds::nested(self.custom_data.as_ref())
    }
}

impl fmt::Display for RationalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}e{}", self.value, self.exponent)
    }
}

impl_serde_via_codec!(RationalNumber);
