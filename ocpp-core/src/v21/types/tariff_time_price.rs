use core::fmt;

use rust_decimal::Decimal;

use crate::format::bounds;
use crate::format::codec::{impl_serde_via_codec, JsonCodec};
use crate::format::{FieldReader, FieldWriter, ParseError, ValidationError};

use super::{CustomData, TariffConditions, TariffPrice};

const PRICE_MINUTE: &str = "priceMinute";
const CONDITIONS: &str = "conditions";

/// Price per minute of charging or idle time, excluding tax.
///
/// ```json
/// { "priceMinute": number, "conditions": TariffConditions?, "customData": CustomData? }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TariffTimePrice {
    price_minute: Decimal,
    conditions: Option<TariffConditions>,
    custom_data: Option<CustomData>,
}

impl TariffTimePrice {
    pub fn new(price_minute: Decimal, conditions: Option<TariffConditions>) -> Self {
        Self {
            price_minute,
            conditions,
            custom_data: None,
        }
    }

    pub fn with_custom_data(mut self, custom_data: CustomData) -> Self {
        self.custom_data = Some(custom_data);
        self
    }

    pub fn price_minute(&self) -> Decimal {
        self.price_minute
    }

    pub fn conditions(&self) -> Option<&TariffConditions> {
        self.conditions.as_ref()
    }

    pub fn custom_data(&self) -> Option<&CustomData> {
        self.custom_data.as_ref()
    }
}

impl JsonCodec for TariffTimePrice {
    const TYPE_NAME: &'static str = "TariffTimePrice";

    fn read_fields(fields: &FieldReader<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            price_minute: fields.mandatory_decimal(PRICE_MINUTE)?,
            conditions: fields.optional_object(CONDITIONS)?,
            custom_data: fields.custom_data()?,
        })
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.put_decimal(PRICE_MINUTE, &self.price_minute);
        out.put_opt_object(CONDITIONS, self.conditions.as_ref());
        out.put_custom_data(self.custom_data.as_ref());
    }

    fn check_bounds(&self) -> Result<(), ValidationError> {
        bounds::nested(self.conditions.as_ref())?;
        bounds::nested(self.custom_data.as_ref())
    }
}

impl TariffPrice for TariffTimePrice {
    const SCHEDULE_NAME: &'static str = "TariffTime";

    fn amount(&self) -> Decimal {
        self.price_minute
    }
}

impl fmt::Display for TariffTimePrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} per minute", self.price_minute)?;
        if let Some(conditions) = &self.conditions {
            write!(f, " ({conditions})")?;
        }
        Ok(())
    }
}

impl_serde_via_codec!(TariffTimePrice);
