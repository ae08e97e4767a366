use rocpp_types::v21::types::{ConsumptionCost, Cost, Price, Tariff, TariffEnergy, TaxRate};
use rocpp_types::{CodecContext, CodecHooks, JsonCodec};
use rust_decimal::Decimal;
use serde_json::{json, Value};

use crate::harness::{fixture, init_logger};

fn cap_from_document(raw: &Value, tariff: Tariff) -> Tariff {
    match raw.get("capOverride").and_then(Value::as_i64) {
        Some(cap) => {
            let min_cost = tariff.min_cost().cloned();
            let max_cost = Price::new(Some(Decimal::from(cap)), None);
            tariff.with_cost_limits(min_cost, Some(max_cost))
        }
        None => tariff,
    }
}

pub fn run() -> anyhow::Result<()> {
    init_logger();

    let hooks = CodecHooks::new()
        .on_parse::<Cost>(|json, cost| match json.get("vendorScale").and_then(Value::as_i64) {
            Some(scale) => Cost::new(
                cost.cost_kind(),
                cost.amount() * scale as i32,
                cost.amount_multiplier(),
            ),
            None => cost,
        })
        .on_serialize::<Cost>(|cost, mut json| {
            if let Some(object) = json.as_object_mut() {
                object.insert("label".into(), Value::from(cost.to_string()));
            }
            json
        });
    let context = CodecContext::with_hooks(hooks);

    let json = json!({
        "startValue": 0,
        "cost": [{ "costKind": "CarbonDioxideEmission", "amount": 10, "vendorScale": 3 }]
    });
    let parsed = ConsumptionCost::try_parse_with(&json, &context)?;
    assert_eq!(parsed.costs()[0].amount(), 30);
    let out = parsed.to_json_with(&context);
    assert_eq!(out["cost"][0]["label"], json!("30 CarbonDioxideEmission"));

    // Without the context nothing changes.
    let plain = ConsumptionCost::try_parse(&json)?;
    assert_eq!(plain.costs()[0].amount(), 10);
    assert!(plain.to_json()["cost"][0].get("label").is_none());

    // Hooks reach values several levels down.
    let context = CodecContext::with_hooks(
        CodecHooks::new()
            .on_parse::<TaxRate>(|_, rate| {
                TaxRate::new(rate.rate_type().to_uppercase(), rate.tax(), rate.stack())
                    .unwrap_or(rate)
            })
            .on_serialize::<TariffEnergy>(|_, mut json| {
                if let Some(object) = json.as_object_mut() {
                    object.remove("taxRates");
                }
                json
            })
            .on_parse::<Tariff>(cap_from_document),
    );

    let mut document = fixture("tariff")?;
    if let Some(object) = document.as_object_mut() {
        object.insert("capOverride".into(), json!(50));
    }
    if let Some(rate) = document.pointer_mut("/energy/taxRates/0/type") {
        *rate = json!("vat");
    }
    let tariff = Tariff::try_parse_with(&document, &context)?;
    assert_eq!(
        tariff.max_cost().and_then(Price::excl_tax),
        Some(Decimal::from(50))
    );
    let energy = tariff.energy().map(TariffEnergy::tax_rates);
    assert_eq!(energy.map(|rates| rates[0].rate_type()), Some("VAT"));

    let out = tariff.to_json_with(&context);
    assert!(out["energy"].get("taxRates").is_none());
    assert!(out["energy"].get("prices").is_some());
    Ok(())
}
