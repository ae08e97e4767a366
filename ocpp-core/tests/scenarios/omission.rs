use rocpp_types::v21::types::{
    PeriodicEventStreamParameters, Price, ResultCode, ResultInfo, Tariff, TariffConditions,
    TariffTime, TariffTimePrice, TariffWindow, EVSE,
};
use rocpp_types::JsonCodec;
use rust_decimal::Decimal;
use serde_json::json;

use crate::harness::{contains_null, fixture, init_logger};

pub fn run() -> anyhow::Result<()> {
    init_logger();

    assert_eq!(EVSE::new(1, None).to_json(), json!({ "id": 1 }));
    assert_eq!(PeriodicEventStreamParameters::default().to_json(), json!({}));
    assert_eq!(
        Price::new(Some(Decimal::ONE), None).to_json(),
        json!({ "exclTax": 1 })
    );
    assert_eq!(
        ResultInfo::new(ResultCode::Accepted, Some("   ".into())).to_json(),
        json!({ "resultCode": "Accepted" })
    );
    assert_eq!(
        TariffConditions::new(TariffWindow::new()).to_json(),
        json!({})
    );

    let time = TariffTime::new(vec![TariffTimePrice::new(Decimal::new(5, 2), None)], vec![])?;
    let json = time.to_json();
    assert!(json.get("taxRates").is_none());
    assert_eq!(json, json!({ "prices": [{ "priceMinute": 0.05 }] }));

    let tariff = fixture("tariff")?;
    let parsed = Tariff::try_parse(&tariff)?;
    assert!(!contains_null(&parsed.to_json()));
    let mut sparse = tariff.clone();
    if let Some(object) = sparse.as_object_mut() {
        object.insert("maxCost".into(), serde_json::Value::Null);
    }
    let sparse = Tariff::try_parse(&sparse)?;
    assert!(sparse.max_cost().is_none());
    assert!(sparse.to_json().get("maxCost").is_none());
    Ok(())
}
