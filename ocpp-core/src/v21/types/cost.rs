use core::fmt;

use crate::format::bounds;
use crate::format::codec::{impl_serde_via_codec, JsonCodec};
use crate::format::{FieldReader, FieldWriter, ParseError, ValidationError};

use super::{CostKind, CustomData};

const COST_KIND: &str = "costKind";
const AMOUNT: &str = "amount";
const AMOUNT_MULTIPLIER: &str = "amountMultiplier";

/// A non-monetary cost figure for a period of a sales tariff.
///
/// ```json
/// {
///   "costKind": CostKind,
///   "amount": integer,
///   "amountMultiplier": integer(-3..3)?,
///   "customData": CustomData?
/// }
/// ```
///
/// The effective value is `amount * 10^amountMultiplier`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cost {
    cost_kind: CostKind,
    amount: i32,
    amount_multiplier: Option<i32>,
    custom_data: Option<CustomData>,
}

impl Cost {
    pub fn new(cost_kind: CostKind, amount: i32, amount_multiplier: Option<i32>) -> Self {
        Self {
            cost_kind,
            amount,
            amount_multiplier,
            custom_data: None,
        }
    }

    pub fn with_custom_data(mut self, custom_data: CustomData) -> Self {
        self.custom_data = Some(custom_data);
        self
    }

    pub fn cost_kind(&self) -> CostKind {
        self.cost_kind
    }

    pub fn amount(&self) -> i32 {
        self.amount
    }

    pub fn amount_multiplier(&self) -> Option<i32> {
        self.amount_multiplier
    }

    pub fn custom_data(&self) -> Option<&CustomData> {
        self.custom_data.as_ref()
    }
}

impl JsonCodec for Cost {
    const TYPE_NAME: &'static str = "Cost";

    fn read_fields(fields: &FieldReader<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            cost_kind: fields.mandatory(COST_KIND)?,
            amount: fields.mandatory(AMOUNT)?,
            amount_multiplier: fields.optional(AMOUNT_MULTIPLIER)?,
            custom_data: fields.custom_data()?,
        })
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.put_display(COST_KIND, &self.cost_kind);
        out.put(AMOUNT, self.amount);
        out.put_opt(AMOUNT_MULTIPLIER, self.amount_multiplier);
        out.put_custom_data(self.custom_data.as_ref());
    }

    fn check_bounds(&self) -> Result<(), ValidationError> {
        if let Some(multiplier) = self.amount_multiplier {
            bounds::within(AMOUNT_MULTIPLIER, &multiplier, Some(-3), Some(3), "-3..=3")?;
        }
        bounds::nested(self.custom_data.as_ref())
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.cost_kind)?;
        if let Some(multiplier) = self.amount_multiplier {
            write!(f, " (x10^{multiplier})")?;
        }
        Ok(())
    }
}

impl_serde_via_codec!(Cost);
