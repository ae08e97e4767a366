use core::fmt;

use rust_decimal::Decimal;

use crate::format::bounds;
use crate::format::codec::{impl_serde_via_codec, JsonCodec};
use crate::format::{FieldReader, FieldWriter, ParseError, ValidationError};

use super::{CustomData, TariffConditions, TariffPrice};

const PRICE_KWH: &str = "priceKwh";
const CONDITIONS: &str = "conditions";

/// Price per kWh of consumed energy, excluding tax.
///
/// ```json
/// { "priceKwh": number, "conditions": TariffConditions?, "customData": CustomData? }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TariffEnergyPrice {
    price_kwh: Decimal,
    conditions: Option<TariffConditions>,
    custom_data: Option<CustomData>,
}

impl TariffEnergyPrice {
    pub fn new(price_kwh: Decimal, conditions: Option<TariffConditions>) -> Self {
        Self {
            price_kwh,
            conditions,
            custom_data: None,
        }
    }

    pub fn with_custom_data(mut self, custom_data: CustomData) -> Self {
        self.custom_data = Some(custom_data);
        self
    }

    pub fn price_kwh(&self) -> Decimal {
        self.price_kwh
    }

    pub fn conditions(&self) -> Option<&TariffConditions> {
        self.conditions.as_ref()
    }

    pub fn custom_data(&self) -> Option<&CustomData> {
        self.custom_data.as_ref()
    }
}

impl JsonCodec for TariffEnergyPrice {
    const TYPE_NAME: &'static str = "TariffEnergyPrice";

    fn read_fields(fields: &FieldReader<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            price_kwh: fields.mandatory_decimal(PRICE_KWH)?,
            conditions: fields.optional_object(CONDITIONS)?,
            custom_data: fields.custom_data()?,
        })
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.put_decimal(PRICE_KWH, &self.price_kwh);
        out.put_opt_object(CONDITIONS, self.conditions.as_ref());
        out.put_custom_data(self.custom_data.as_ref());
    }

    fn check_bounds(&self) -> Result<(), ValidationError> {
        bounds::nested(self.conditions.as_ref())?;
        bounds::nested(self.custom_data.as_ref())
    }
}

impl TariffPrice for TariffEnergyPrice {
    const SCHEDULE_NAME: &'static str = "TariffEnergy";

    fn amount(&self) -> Decimal {
        self.price_kwh
    }
}

impl fmt::Display for TariffEnergyPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} per kWh", self.price_kwh)?;
        if let Some(conditions) = &self.conditions {
            write!(f, " ({conditions})")?;
        }
        Ok(())
    }
}

impl_serde_via_codec!(TariffEnergyPrice);
