use rocpp_types::v21::types::{ConsumptionCost, Cost, CostKind, StatusInfo, EVSE};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::harness::init_logger;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
struct CostUpdate {
    evse: EVSE,
    consumption_costs: Vec<ConsumptionCost>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status_info: Option<StatusInfo>,
}

pub fn run() -> anyhow::Result<()> {
    init_logger();

    let document = json!({
        "evse": { "id": 1, "connectorId": 2 },
        "consumptionCosts": [
            { "startValue": 0, "cost": [{ "costKind": "CarbonDioxideEmission", "amount": 300 }] },
            { "startValue": 20.5, "cost": [{ "costKind": "RelativePricePercentage", "amount": 80 }] }
        ]
    });
    let update: CostUpdate = serde_json::from_value(document.clone())?;
    assert_eq!(update.evse, EVSE::new(1, Some(2)));
    assert_eq!(update.consumption_costs.len(), 2);
    assert!(update.status_info.is_none());
    assert_eq!(serde_json::to_value(&update)?, document);

    let cost: Cost = r#"{"costKind":"RenewableGenerationPercentage","amount":42}"#.parse()?;
    assert_eq!(cost, Cost::new(CostKind::RenewableGenerationPercentage, 42, None));

    let error = serde_json::from_value::<Cost>(json!({ "costKind": "CarbonDioxideEmission" }))
        .unwrap_err();
    assert!(error.to_string().contains("'amount'"), "{error}");
    Ok(())
}
