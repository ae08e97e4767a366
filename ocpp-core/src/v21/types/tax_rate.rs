use core::fmt;
use core::hash::{Hash, Hasher};

use rust_decimal::Decimal;

use crate::format::bounds;
use crate::format::codec::{impl_serde_via_codec, JsonCodec};
use crate::format::hash::hash_ignore_ascii_case;
use crate::format::{FieldReader, FieldWriter, ParseError, ValidationError};

use super::CustomData;

const TYPE: &str = "type";
const TAX: &str = "tax";
const STACK: &str = "stack";

/// A tax applied on top of a tariff price.
///
/// ```json
/// {
///   "type": "string(20)",
///   "tax": number,
///   "stack": integer(>=0)?,
///   "customData": CustomData?
/// }
/// ```
///
/// `tax` is a percentage. Rates with the same `stack` are added up, a higher
/// `stack` is applied on top of the lower ones. An explicit zero rate is a
/// rate of its own, not the absence of tax information.
#[derive(Clone, Debug)]
pub struct TaxRate {
    rate_type: String,
    tax: Decimal,
    stack: Option<i32>,
    custom_data: Option<CustomData>,
}

impl TaxRate {
    pub fn new(
        rate_type: impl Into<String>,
        tax: Decimal,
        stack: Option<i32>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            rate_type: bounds::trimmed_text(TYPE, rate_type)?,
            tax,
            stack,
            custom_data: None,
        })
    }

    pub fn with_custom_data(mut self, custom_data: CustomData) -> Self {
        self.custom_data = Some(custom_data);
        self
    }

    /// Kind of tax, e.g. "Federal" or "State".
    pub fn rate_type(&self) -> &str {
        &self.rate_type
    }

    pub fn tax(&self) -> Decimal {
        self.tax
    }

    pub fn stack(&self) -> Option<i32> {
        self.stack
    }

    pub fn custom_data(&self) -> Option<&CustomData> {
        self.custom_data.as_ref()
    }
}

impl JsonCodec for TaxRate {
    const TYPE_NAME: &'static str = "TaxRate";

    fn read_fields(fields: &FieldReader<'_>) -> Result<Self, ParseError> {
        let rate_type = fields.mandatory_text(TYPE)?;
        let tax = fields.mandatory_decimal(TAX)?;
        let stack = fields.optional(STACK)?;
        let custom_data = fields.custom_data()?;
        Ok(Self {
            custom_data,
            ..Self::new(rate_type, tax, stack)?
        })
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.put(TYPE, self.rate_type.as_str());
        out.put_decimal(TAX, &self.tax);
        out.put_opt(STACK, self.stack);
        out.put_custom_data(self.custom_data.as_ref());
    }

    fn check_bounds(&self) -> Result<(), ValidationError> {
        bounds::max_length(TYPE, &self.rate_type, 20)?;
        if let Some(stack) = self.stack {
            bounds::non_negative(STACK, &stack)?;
        }
        bounds::nested(self.custom_data.as_ref())
    }
}

impl PartialEq for TaxRate {
    fn eq(&self, other: &Self) -> bool {
        self.rate_type.eq_ignore_ascii_case(&other.rate_type)
            && self.tax == other.tax
            && self.stack == other.stack
            && self.custom_data == other.custom_data
    }
}

impl Eq for TaxRate {}

impl Hash for TaxRate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_ignore_ascii_case(&self.rate_type, state);
        self.tax.hash(state);
        self.stack.hash(state);
        self.custom_data.hash(state);
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}%", self.rate_type, self.tax)?;
        if let Some(stack) = self.stack {
            write!(f, " (stack {stack})")?;
        }
        Ok(())
    }
}

impl_serde_via_codec!(TaxRate);
