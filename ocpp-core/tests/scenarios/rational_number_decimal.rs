use rocpp_types::v21::types::RationalNumber;
use rocpp_types::{JsonCodec, ValidationError};
use rust_decimal::Decimal;
use serde_json::json;

use crate::harness::init_logger;

pub fn run() -> anyhow::Result<()> {
    init_logger();

    let number = RationalNumber::from_decimal(Decimal::new(12345, 3))?;
    assert_eq!(number.value(), 12345);
    assert_eq!(number.exponent(), -3);
    assert_eq!(number.to_decimal()?, Decimal::new(12345, 3));
    assert_eq!(number.to_json(), json!({ "exponent": -3, "value": 12345 }));

    for decimal in [
        Decimal::ZERO,
        Decimal::new(-75, 1),
        Decimal::new(1, 3),
        Decimal::from(i32::MAX),
        Decimal::from(10_000_000_000i64),
        Decimal::from(-21_474_836_470_000i64),
    ] {
        let number = RationalNumber::from_decimal(decimal)?;
        assert_eq!(number.to_decimal()?, decimal, "{decimal} did not survive");
    }

    assert_eq!(
        RationalNumber::new(15, 2).to_decimal()?,
        Decimal::from(1500)
    );
    assert!(matches!(
        RationalNumber::from_decimal(Decimal::from(u32::MAX)),
        Err(ValidationError::NotRepresentable(_))
    ));
    Ok(())
}
