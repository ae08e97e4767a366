use core::fmt;

use rust_decimal::Decimal;

use crate::format::codec::{impl_serde_via_codec, JsonCodec};
use crate::format::{bounds, FieldReader, FieldWriter, ParseError, ValidationError};

use super::CustomData;

const X: &str = "x";
const Y: &str = "y";

/// One point of a DER control curve.
///
/// ```json
/// { "x": number, "y": number, "customData": CustomData? }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DERCurvePoint {
    x: Decimal,
    y: Decimal,
    custom_data: Option<CustomData>,
}

impl DERCurvePoint {
    pub fn new(x: Decimal, y: Decimal) -> Self {
        Self {
            x,
            y,
            custom_data: None,
        }
    }

    pub fn with_custom_data(mut self, custom_data: CustomData) -> Self {
        self.custom_data = Some(custom_data);
        self
    }

    pub fn x(&self) -> Decimal {
        self.x
    }

    pub fn y(&self) -> Decimal {
        self.y
    }

    pub fn custom_data(&self) -> Option<&CustomData> {
        self.custom_data.as_ref()
    }
}

impl JsonCodec for DERCurvePoint {
    const TYPE_NAME: &'static str = "DERCurvePoint";

    fn read_fields(fields: &FieldReader<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            x: fields.mandatory_decimal(X)?,
            y: fields.mandatory_decimal(Y)?,
            custom_data: fields.custom_data()?,
        })
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.put_decimal(X, &self.x);
        out.put_decimal(Y, &self.y);
        out.put_custom_data(self.custom_data.as_ref());
    }

    fn check_bounds(&self) -> Result<(), ValidationError> {
        bounds::nested(self.custom_data.as_ref())
    }
}

impl fmt::Display for DERCurvePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl_serde_via_codec!(DERCurvePoint);
