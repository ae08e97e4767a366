use core::fmt;
use core::hash::{Hash, Hasher};

use rust_decimal::Decimal;

use crate::format::bounds;
use crate::format::codec::{impl_serde_via_codec, JsonCodec};
use crate::format::hash::{distinct, hash_of, same_elements, unordered_hash};
use crate::format::{FieldReader, FieldWriter, ParseError, ValidationError};

use super::{Cost, CustomData};

const START_VALUE: &str = "startValue";
const COST: &str = "cost";

/// The costs that apply from a given consumption value on.
///
/// ```json
/// {
///   "startValue": number,
///   "cost": [Cost, 1..3],
///   "customData": CustomData?
/// }
/// ```
///
/// Costs are kept as a set: duplicates are dropped and their order does not
/// take part in equality.
#[derive(Clone, Debug)]
pub struct ConsumptionCost {
    start_value: Decimal,
    costs: Vec<Cost>,
    custom_data: Option<CustomData>,
    hash_code: u64,
}

impl ConsumptionCost {
    pub fn new(
        start_value: Decimal,
        costs: impl IntoIterator<Item = Cost>,
    ) -> Result<Self, ValidationError> {
        Self::build(start_value, costs, None)
    }

    fn build(
        start_value: Decimal,
        costs: impl IntoIterator<Item = Cost>,
        custom_data: Option<CustomData>,
    ) -> Result<Self, ValidationError> {
        let costs = distinct(costs);
        if costs.is_empty() {
            return Err(ValidationError::EmptyCollection { field: COST });
        }
        let hash_code = Self::hash_parts(&start_value, &costs, &custom_data);
        Ok(Self {
            start_value,
            costs,
            custom_data,
            hash_code,
        })
    }

    fn hash_parts(start_value: &Decimal, costs: &[Cost], custom_data: &Option<CustomData>) -> u64 {
        hash_of(start_value).wrapping_mul(5)
            ^ unordered_hash(costs).wrapping_mul(3)
            ^ hash_of(custom_data)
    }

    pub fn with_custom_data(mut self, custom_data: CustomData) -> Self {
        self.custom_data = Some(custom_data);
        self.hash_code = Self::hash_parts(&self.start_value, &self.costs, &self.custom_data);
        self
    }

    pub fn start_value(&self) -> Decimal {
        self.start_value
    }

    pub fn costs(&self) -> &[Cost] {
        &self.costs
    }

    pub fn custom_data(&self) -> Option<&CustomData> {
        self.custom_data.as_ref()
    }

    pub fn hash_code(&self) -> u64 {
        self.hash_code
    }
}

impl JsonCodec for ConsumptionCost {
    const TYPE_NAME: &'static str = "ConsumptionCost";

    fn read_fields(fields: &FieldReader<'_>) -> Result<Self, ParseError> {
        let start_value = fields.mandatory_decimal(START_VALUE)?;
        let costs: Vec<Cost> = fields.mandatory_array(COST)?;
        let custom_data = fields.custom_data()?;
        Ok(Self::build(start_value, costs, custom_data)?)
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.put_decimal(START_VALUE, &self.start_value);
        out.put_array(COST, &self.costs);
        out.put_custom_data(self.custom_data.as_ref());
    }

    fn check_bounds(&self) -> Result<(), ValidationError> {
        bounds::within(COST, &self.costs.len(), Some(1), Some(3), "1..=3 elements")?;
        self.costs.iter().try_for_each(Cost::check_bounds)?;
        bounds::nested(self.custom_data.as_ref())
    }
}

impl PartialEq for ConsumptionCost {
    fn eq(&self, other: &Self) -> bool {
        self.start_value == other.start_value
            && same_elements(&self.costs, &other.costs)
            && self.custom_data == other.custom_data
    }
}

impl Eq for ConsumptionCost {}

impl Hash for ConsumptionCost {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code);
    }
}

impl fmt::Display for ConsumptionCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "from {}: ", self.start_value)?;
        for (index, cost) in self.costs.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{cost}")?;
        }
        Ok(())
    }
}

impl_serde_via_codec!(ConsumptionCost);
