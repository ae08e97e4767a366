use core::fmt;

use rust_decimal::Decimal;

use crate::format::bounds;
use crate::format::codec::{impl_serde_via_codec, JsonCodec};
use crate::format::{FieldReader, FieldWriter, ParseError, ValidationError};

use super::{CustomData, TariffConditionsFixed, TariffPrice};

const PRICE_FIXED: &str = "priceFixed";
const CONDITIONS: &str = "conditions";

/// A fixed fee, excluding tax.
///
/// ```json
/// { "priceFixed": number, "conditions": TariffConditionsFixed?, "customData": CustomData? }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TariffFixedPrice {
    price_fixed: Decimal,
    conditions: Option<TariffConditionsFixed>,
    custom_data: Option<CustomData>,
}

impl TariffFixedPrice {
    pub fn new(price_fixed: Decimal, conditions: Option<TariffConditionsFixed>) -> Self {
        Self {
            price_fixed,
            conditions,
            custom_data: None,
        }
    }

    pub fn with_custom_data(mut self, custom_data: CustomData) -> Self {
        self.custom_data = Some(custom_data);
        self
    }

    pub fn price_fixed(&self) -> Decimal {
        self.price_fixed
    }

    pub fn conditions(&self) -> Option<&TariffConditionsFixed> {
        self.conditions.as_ref()
    }

    pub fn custom_data(&self) -> Option<&CustomData> {
        self.custom_data.as_ref()
    }
}

impl JsonCodec for TariffFixedPrice {
    const TYPE_NAME: &'static str = "TariffFixedPrice";

    fn read_fields(fields: &FieldReader<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            price_fixed: fields.mandatory_decimal(PRICE_FIXED)?,
            conditions: fields.optional_object(CONDITIONS)?,
            custom_data: fields.custom_data()?,
        })
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.put_decimal(PRICE_FIXED, &self.price_fixed);
        out.put_opt_object(CONDITIONS, self.conditions.as_ref());
        out.put_custom_data(self.custom_data.as_ref());
    }

    fn check_bounds(&self) -> Result<(), ValidationError> {
        bounds::nested(self.conditions.as_ref())?;
        bounds::nested(self.custom_data.as_ref())
    }
}

impl TariffPrice for TariffFixedPrice {
    const SCHEDULE_NAME: &'static str = "TariffFixed";

    fn amount(&self) -> Decimal {
        self.price_fixed
    }
}

impl fmt::Display for TariffFixedPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} fixed", self.price_fixed)?;
        if let Some(conditions) = &self.conditions {
            write!(f, " ({conditions})")?;
        }
        Ok(())
    }
}

impl_serde_via_codec!(TariffFixedPrice);
