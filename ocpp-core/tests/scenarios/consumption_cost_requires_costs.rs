use rocpp_types::v21::types::{ConsumptionCost, Cost, CostKind};
use rocpp_types::{JsonCodec, ParseError, ValidationError};
use rust_decimal::Decimal;
use serde_json::json;

use crate::harness::init_logger;

pub fn run() -> anyhow::Result<()> {
    init_logger();

    assert_eq!(
        ConsumptionCost::new(Decimal::ZERO, Vec::new()).unwrap_err(),
        ValidationError::EmptyCollection { field: "cost" }
    );
    assert_eq!(
        ConsumptionCost::try_parse(&json!({ "startValue": 0, "cost": [] })),
        Err(ParseError::Validation(ValidationError::EmptyCollection {
            field: "cost"
        }))
    );
    assert_eq!(
        ConsumptionCost::try_parse(&json!({ "startValue": 0 })),
        Err(ParseError::MissingField { field: "cost" })
    );

    let co2 = Cost::new(CostKind::CarbonDioxideEmission, 250, Some(-1));
    let green = Cost::new(CostKind::RenewableGenerationPercentage, 64, None);
    let cost = ConsumptionCost::new(
        Decimal::new(125, 1),
        vec![co2.clone(), green.clone(), co2.clone()],
    )?;
    assert_eq!(cost.costs(), &[co2, green]);
    assert_eq!(cost.start_value(), Decimal::new(125, 1));
    Ok(())
}
