use core::fmt;
use core::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};

use crate::format::bounds;
use crate::format::codec::{impl_serde_via_codec, JsonCodec};
use crate::format::hash::hash_ignore_ascii_case;
use crate::format::{FieldReader, FieldWriter, ParseError, ValidationError};

use super::{CustomData, Price, TariffEnergy, TariffFixed, TariffTime};

const TARIFF_ID: &str = "tariffId";
const CURRENCY: &str = "currency";
const VALID_FROM: &str = "validFrom";
const ENERGY: &str = "energy";
const CHARGING_TIME: &str = "chargingTime";
const IDLE_TIME: &str = "idleTime";
const FIXED_FEE: &str = "fixedFee";
const RESERVATION_TIME: &str = "reservationTime";
const RESERVATION_FIXED: &str = "reservationFixed";
const MIN_COST: &str = "minCost";
const MAX_COST: &str = "maxCost";

/// A complete tariff made of optional energy, time and fixed components.
#[derive(Clone, Debug)]
pub struct Tariff {
    tariff_id: String,
    currency: String,
    valid_from: Option<DateTime<Utc>>,
    energy: Option<TariffEnergy>,
    charging_time: Option<TariffTime>,
    idle_time: Option<TariffTime>,
    fixed_fee: Option<TariffFixed>,
    reservation_time: Option<TariffTime>,
    reservation_fixed: Option<TariffFixed>,
    min_cost: Option<Price>,
    max_cost: Option<Price>,
    custom_data: Option<CustomData>,
}

impl Tariff {
    pub fn new(
        tariff_id: impl Into<String>,
        currency: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            tariff_id: bounds::trimmed_text(TARIFF_ID, tariff_id)?,
            currency: bounds::trimmed_text(CURRENCY, currency)?,
            valid_from: None,
            energy: None,
            charging_time: None,
            idle_time: None,
            fixed_fee: None,
            reservation_time: None,
            reservation_fixed: None,
            min_cost: None,
            max_cost: None,
            custom_data: None,
        })
    }

    pub fn valid_from_time(mut self, valid_from: DateTime<Utc>) -> Self {
        self.valid_from = Some(valid_from);
        self
    }

    pub fn with_energy(mut self, energy: TariffEnergy) -> Self {
        self.energy = Some(energy);
        self
    }

    pub fn with_charging_time(mut self, charging_time: TariffTime) -> Self {
        self.charging_time = Some(charging_time);
        self
    }

    pub fn with_idle_time(mut self, idle_time: TariffTime) -> Self {
        self.idle_time = Some(idle_time);
        self
    }

    pub fn with_fixed_fee(mut self, fixed_fee: TariffFixed) -> Self {
        self.fixed_fee = Some(fixed_fee);
        self
    }

    pub fn with_reservation(
        mut self,
        reservation_time: Option<TariffTime>,
        reservation_fixed: Option<TariffFixed>,
    ) -> Self {
        self.reservation_time = reservation_time;
        self.reservation_fixed = reservation_fixed;
        self
    }

    pub fn with_cost_limits(mut self, min_cost: Option<Price>, max_cost: Option<Price>) -> Self {
        self.min_cost = min_cost;
        self.max_cost = max_cost;
        self
    }

    pub fn with_custom_data(mut self, custom_data: CustomData) -> Self {
        self.custom_data = Some(custom_data);
        self
    }

    pub fn tariff_id(&self) -> &str {
        &self.tariff_id
    }

    /// ISO 4217 currency code.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn valid_from(&self) -> Option<DateTime<Utc>> {
        self.valid_from
    }

    pub fn energy(&self) -> Option<&TariffEnergy> {
        self.energy.as_ref()
    }

    pub fn charging_time(&self) -> Option<&TariffTime> {
        self.charging_time.as_ref()
    }

    pub fn idle_time(&self) -> Option<&TariffTime> {
        self.idle_time.as_ref()
    }

    pub fn fixed_fee(&self) -> Option<&TariffFixed> {
        self.fixed_fee.as_ref()
    }

    pub fn reservation_time(&self) -> Option<&TariffTime> {
        self.reservation_time.as_ref()
    }

    pub fn reservation_fixed(&self) -> Option<&TariffFixed> {
        self.reservation_fixed.as_ref()
    }

    pub fn min_cost(&self) -> Option<&Price> {
        self.min_cost.as_ref()
    }

    pub fn max_cost(&self) -> Option<&Price> {
        self.max_cost.as_ref()
    }

    pub fn custom_data(&self) -> Option<&CustomData> {
        self.custom_data.as_ref()
    }
}

impl JsonCodec for Tariff {
    const TYPE_NAME: &'static str = "Tariff";

    fn read_fields(fields: &FieldReader<'_>) -> Result<Self, ParseError> {
        let tariff_id = fields.mandatory_text(TARIFF_ID)?;
        let currency = fields.mandatory_text(CURRENCY)?;
        Ok(Self {
            valid_from: fields.optional(VALID_FROM)?,
            energy: fields.optional_object(ENERGY)?,
            charging_time: fields.optional_object(CHARGING_TIME)?,
            idle_time: fields.optional_object(IDLE_TIME)?,
            fixed_fee: fields.optional_object(FIXED_FEE)?,
            reservation_time: fields.optional_object(RESERVATION_TIME)?,
            reservation_fixed: fields.optional_object(RESERVATION_FIXED)?,
            min_cost: fields.optional_object(MIN_COST)?,
            max_cost: fields.optional_object(MAX_COST)?,
            custom_data: fields.custom_data()?,
            ..Self::new(tariff_id, currency)?
        })
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.put(TARIFF_ID, self.tariff_id.as_str());
        out.put(CURRENCY, self.currency.as_str());
        if let Some(valid_from) = &self.valid_from {
            out.put_timestamp(VALID_FROM, valid_from);
        }
        out.put_opt_object(ENERGY, self.energy.as_ref());
        out.put_opt_object(CHARGING_TIME, self.charging_time.as_ref());
        out.put_opt_object(IDLE_TIME, self.idle_time.as_ref());
        out.put_opt_object(FIXED_FEE, self.fixed_fee.as_ref());
        out.put_opt_object(RESERVATION_TIME, self.reservation_time.as_ref());
        out.put_opt_object(RESERVATION_FIXED, self.reservation_fixed.as_ref());
        out.put_opt_object(MIN_COST, self.min_cost.as_ref());
        out.put_opt_object(MAX_COST, self.max_cost.as_ref());
        out.put_custom_data(self.custom_data.as_ref());
    }

    fn check_bounds(&self) -> Result<(), ValidationError> {
        bounds::max_length(TARIFF_ID, &self.tariff_id, 60)?;
        if self.currency.chars().count() != 3 {
            return Err(ValidationError::OutOfRange {
                field: CURRENCY,
                value: self.currency.clone(),
                expected: "a three letter ISO 4217 code",
            });
        }
        bounds::nested(self.energy.as_ref())?;
        for time in [&self.charging_time, &self.idle_time, &self.reservation_time] {
            bounds::nested(time.as_ref())?;
        }
        for fixed in [&self.fixed_fee, &self.reservation_fixed] {
            bounds::nested(fixed.as_ref())?;
        }
        for cost in [&self.min_cost, &self.max_cost] {
            bounds::nested(cost.as_ref())?;
        }
        bounds::nested(self.custom_data.as_ref())
    }
}

impl PartialEq for Tariff {
    fn eq(&self, other: &Self) -> bool {
        self.tariff_id.eq_ignore_ascii_case(&other.tariff_id)
            && self.currency == other.currency
            && self.valid_from == other.valid_from
            && self.energy == other.energy
            && self.charging_time == other.charging_time
            && self.idle_time == other.idle_time
            && self.fixed_fee == other.fixed_fee
            && self.reservation_time == other.reservation_time
            && self.reservation_fixed == other.reservation_fixed
            && self.min_cost == other.min_cost
            && self.max_cost == other.max_cost
            && self.custom_data == other.custom_data
    }
}

impl Eq for Tariff {}

impl Hash for Tariff {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_ignore_ascii_case(&self.tariff_id, state);
        self.currency.hash(state);
        self.valid_from.hash(state);
        self.energy.hash(state);
        self.charging_time.hash(state);
        self.idle_time.hash(state);
        self.fixed_fee.hash(state);
        self.reservation_time.hash(state);
        self.reservation_fixed.hash(state);
        self.min_cost.hash(state);
        self.max_cost.hash(state);
        self.custom_data.hash(state);
    }
}

impl fmt::Display for Tariff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tariff {} in {}", self.tariff_id, self.currency)
    }
}

impl_serde_via_codec!(Tariff);
