use rocpp_types::v21::types::{Cost, CostKind};
use rocpp_types::JsonCodec;
use serde_json::json;

use crate::harness::init_logger;

pub fn run() -> anyhow::Result<()> {
    init_logger();

    let plain = Cost::new(CostKind::RelativePricePercentage, 100, None);
    let json = plain.to_json();
    assert!(json.get("amountMultiplier").is_none());
    assert_eq!(
        serde_json::to_string(&json)?,
        r#"{"costKind":"RelativePricePercentage","amount":100}"#
    );

    let scaled = Cost::new(CostKind::RelativePricePercentage, 100, Some(2));
    assert_eq!(scaled.to_json()["amountMultiplier"], json!(2));
    assert_ne!(plain, scaled);
    assert_eq!(Cost::try_parse(&scaled.to_json())?, scaled);
    assert_eq!(Cost::try_parse(&json)?, plain);
    assert_eq!(scaled.to_string(), "100 RelativePricePercentage (x10^2)");
    Ok(())
}
