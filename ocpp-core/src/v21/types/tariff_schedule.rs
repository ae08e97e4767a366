use core::fmt;
use core::hash::{Hash, Hasher};
use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::format::bounds;
use crate::format::codec::{impl_serde_via_codec, JsonCodec};
use crate::format::hash::{distinct, hash_of, same_elements, unordered_hash};
use crate::format::{FieldReader, FieldWriter, ParseError, ValidationError};

use super::{CustomData, TariffEnergyPrice, TariffFixedPrice, TariffTimePrice, TaxRate};

const PRICES: &str = "prices";
const TAX_RATES: &str = "taxRates";

/// A price entry that can make up a [`TariffSchedule`].
pub trait TariffPrice: JsonCodec + Clone + fmt::Debug + Eq + Hash + fmt::Display {
    /// OCPP name of the schedule holding this kind of price.
    const SCHEDULE_NAME: &'static str;

    /// The price excluding tax.
    fn amount(&self) -> Decimal;
}

/// Prices of one tariff component and the taxes levied on them.
///
/// ```json
/// {
///   "prices": [Price, 1..*],
///   "taxRates": [TaxRate, 0..5]?,
///   "customData": CustomData?
/// }
/// ```
///
/// Both collections are sets: duplicates are dropped on construction and
/// order plays no role in equality or hashing. `taxRates` is left out of the
/// JSON when there are none.
#[derive(Clone, Debug)]
pub struct TariffSchedule<P> {
    prices: Vec<P>,
    tax_rates: Vec<TaxRate>,
    custom_data: Option<CustomData>,
    hash_code: u64,
}

pub type TariffEnergy = TariffSchedule<TariffEnergyPrice>;
pub type TariffTime = TariffSchedule<TariffTimePrice>;
pub type TariffFixed = TariffSchedule<TariffFixedPrice>;

impl<P: TariffPrice> TariffSchedule<P> {
    pub fn new(
        prices: impl IntoIterator<Item = P>,
        tax_rates: impl IntoIterator<Item = TaxRate>,
    ) -> Result<Self, ValidationError> {
        Self::build(prices, tax_rates, None)
    }

    fn build(
        prices: impl IntoIterator<Item = P>,
        tax_rates: impl IntoIterator<Item = TaxRate>,
        custom_data: Option<CustomData>,
    ) -> Result<Self, ValidationError> {
        let prices = distinct(prices);
        if prices.is_empty() {
            return Err(ValidationError::EmptyCollection { field: PRICES });
        }
        let tax_rates = distinct(tax_rates);
        let hash_code = Self::hash_parts(&prices, &tax_rates, &custom_data);
        Ok(Self {
            prices,
            tax_rates,
            custom_data,
            hash_code,
        })
    }

    fn hash_parts(prices: &[P], tax_rates: &[TaxRate], custom_data: &Option<CustomData>) -> u64 {
        unordered_hash(prices).wrapping_mul(5)
            ^ unordered_hash(tax_rates).wrapping_mul(3)
            ^ hash_of(custom_data)
    }

    pub fn with_custom_data(mut self, custom_data: CustomData) -> Self {
        self.custom_data = Some(custom_data);
        self.hash_code = Self::hash_parts(&self.prices, &self.tax_rates, &self.custom_data);
        self
    }

    pub fn prices(&self) -> &[P] {
        &self.prices
    }

    pub fn tax_rates(&self) -> &[TaxRate] {
        &self.tax_rates
    }

    pub fn custom_data(&self) -> Option<&CustomData> {
        self.custom_data.as_ref()
    }

    pub fn hash_code(&self) -> u64 {
        self.hash_code
    }

    /// The cheapest of the prices, excluding tax.
    pub fn lowest_price(&self) -> Decimal {
        self.prices
            .iter()
            .map(TariffPrice::amount)
            .min()
            .unwrap_or_default()
    }

    /// Applies the tax rates to `amount`. Rates sharing a stack level are
    /// added up; each level is levied on the result of the levels below it.
    /// Rates without a stack are on level 0.
    ///
    /// `None` when the result does not fit in a `Decimal`.
    pub fn with_tax(&self, amount: Decimal) -> Option<Decimal> {
        let mut levels: BTreeMap<i32, Decimal> = BTreeMap::new();
        for rate in &self.tax_rates {
            let level = levels.entry(rate.stack().unwrap_or(0)).or_default();
            *level = level.checked_add(rate.tax())?;
        }
        levels.into_values().try_fold(amount, |total, percent| {
            let tax = total.checked_mul(percent)?.checked_div(Decimal::ONE_HUNDRED)?;
            total.checked_add(tax)
        })
    }
}

impl<P: TariffPrice> JsonCodec for TariffSchedule<P> {
    const TYPE_NAME: &'static str = P::SCHEDULE_NAME;

    fn read_fields(fields: &FieldReader<'_>) -> Result<Self, ParseError> {
        let prices: Vec<P> = fields.mandatory_array(PRICES)?;
        let tax_rates: Vec<TaxRate> = fields.optional_array(TAX_RATES)?;
        let custom_data = fields.custom_data()?;
        Ok(Self::build(prices, tax_rates, custom_data)?)
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.put_array(PRICES, &self.prices);
        out.put_nonempty_array(TAX_RATES, &self.tax_rates);
        out.put_custom_data(self.custom_data.as_ref());
    }

    fn check_bounds(&self) -> Result<(), ValidationError> {
        bounds::within(TAX_RATES, &self.tax_rates.len(), None, Some(5), "at most 5 elements")?;
        self.prices.iter().try_for_each(P::check_bounds)?;
        self.tax_rates.iter().try_for_each(TaxRate::check_bounds)?;
        bounds::nested(self.custom_data.as_ref())
    }
}

impl<P: TariffPrice> PartialEq for TariffSchedule<P> {
    fn eq(&self, other: &Self) -> bool {
        same_elements(&self.prices, &other.prices)
            && same_elements(&self.tax_rates, &other.tax_rates)
            && self.custom_data == other.custom_data
    }
}

impl<P: TariffPrice> Eq for TariffSchedule<P> {}

impl<P: TariffPrice> Hash for TariffSchedule<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code);
    }
}

impl<P: TariffPrice> fmt::Display for TariffSchedule<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", P::SCHEDULE_NAME)?;
        for (index, price) in self.prices.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{price}")?;
        }
        if !self.tax_rates.is_empty() {
            write!(f, " + {} tax rate(s)", self.tax_rates.len())?;
        }
        Ok(())
    }
}

impl_serde_via_codec!(TariffEnergy, TariffTime, TariffFixed);
