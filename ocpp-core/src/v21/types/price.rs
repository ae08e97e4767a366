use core::fmt;

use rust_decimal::Decimal;

use crate::format::codec::{impl_serde_via_codec, JsonCodec};
use crate::format::{bounds, FieldReader, FieldWriter, ParseError, ValidationError};

use super::CustomData;

const EXCL_TAX: &str = "exclTax";
const INCL_TAX: &str = "inclTax";

/// A price with and/or without tax.
///
/// ```json
/// { "exclTax": number?, "inclTax": number?, "customData": CustomData? }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Price {
    excl_tax: Option<Decimal>,
    incl_tax: Option<Decimal>,
    custom_data: Option<CustomData>,
}

impl Price {
    pub fn new(excl_tax: Option<Decimal>, incl_tax: Option<Decimal>) -> Self {
        Self {
            excl_tax,
            incl_tax,
            custom_data: None,
        }
    }

    pub fn with_custom_data(mut self, custom_data: CustomData) -> Self {
        self.custom_data = Some(custom_data);
        self
    }

    pub fn excl_tax(&self) -> Option<Decimal> {
        self.excl_tax
    }

    pub fn incl_tax(&self) -> Option<Decimal> {
        self.incl_tax
    }

    pub fn custom_data(&self) -> Option<&CustomData> {
        self.custom_data.as_ref()
    }
}

impl JsonCodec for Price {
    const TYPE_NAME: &'static str = "Price";

    fn read_fields(fields: &FieldReader<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            excl_tax: fields.optional_decimal(EXCL_TAX)?,
            incl_tax: fields.optional_decimal(INCL_TAX)?,
            custom_data: fields.custom_data()?,
        })
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.put_opt_decimal(EXCL_TAX, self.excl_tax.as_ref());
        out.put_opt_decimal(INCL_TAX, self.incl_tax.as_ref());
        out.put_custom_data(self.custom_data.as_ref());
    }

    fn check_bounds(&self) -> Result<(), ValidationError> {
        bounds::nested(self.custom_data.as_ref())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.excl_tax, self.incl_tax) {
            (Some(excl), Some(incl)) => write!(f, "{excl} excl. tax, {incl} incl. tax"),
            (Some(excl), None) => write!(f, "{excl} excl. tax"),
            (None, Some(incl)) => write!(f, "{incl} incl. tax"),
            (None, None) => write!(f, "no price"),
        }
    }
}

impl_serde_via_codec!(Price);
