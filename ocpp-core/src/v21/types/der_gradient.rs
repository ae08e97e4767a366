use core::fmt;

use rust_decimal::Decimal;

use crate::format::bounds;
use crate::format::codec::{impl_serde_via_codec, JsonCodec};
use crate::format::{FieldReader, FieldWriter, ParseError, ValidationError};

use super::CustomData;

const PRIORITY: &str = "priority";
const GRADIENT: &str = "gradient";
const SOFT_GRADIENT: &str = "softGradient";

/// Ramp rates a DER applies when a setpoint changes.
///
/// ```json
/// {
///   "priority": integer(>=0),
///   "gradient": number,
///   "softGradient": number,
///   "customData": CustomData?
/// }
/// ```
///
/// Priority 0 is the highest.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DERGradient {
    priority: i32,
    gradient: Decimal,
    soft_gradient: Decimal,
    custom_data: Option<CustomData>,
}

impl DERGradient {
    pub fn new(priority: i32, gradient: Decimal, soft_gradient: Decimal) -> Self {
        Self {
            priority,
            gradient,
            soft_gradient,
            custom_data: None,
        }
    }

    pub fn with_custom_data(mut self, custom_data: CustomData) -> Self {
        self.custom_data = Some(custom_data);
        self
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Default ramp rate in percent of the maximum per second.
    pub fn gradient(&self) -> Decimal {
        self.gradient
    }

    /// Ramp rate used after a reconnect.
    pub fn soft_gradient(&self) -> Decimal {
        self.soft_gradient
    }

    pub fn custom_data(&self) -> Option<&CustomData> {
        self.custom_data.as_ref()
    }
}

impl JsonCodec for DERGradient {
    const TYPE_NAME: &'static str = "DERGradient";

    fn read_fields(fields: &FieldReader<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            priority: fields.mandatory(PRIORITY)?,
            gradient: fields.mandatory_decimal(GRADIENT)?,
            soft_gradient: fields.mandatory_decimal(SOFT_GRADIENT)?,
            custom_data: fields.custom_data()?,
        })
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.put(PRIORITY, self.priority);
        out.put_decimal(GRADIENT, &self.gradient);
        out.put_decimal(SOFT_GRADIENT, &self.soft_gradient);
        out.put_custom_data(self.custom_data.as_ref());
    }

    fn check_bounds(&self) -> Result<(), ValidationError> {
        bounds::non_negative(PRIORITY, &self.priority)?;
        bounds::nested(self.custom_data.as_ref())
    }
}

impl fmt::Display for DERGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "priority {}: gradient {}, soft gradient {}",
            self.priority, self.gradient, self.soft_gradient
        )
    }
}

impl_serde_via_codec!(DERGradient);
