use rocpp_types::v21::types::{
    AdditionalInfo, Cost, DERCurvePoint, RelativeTimeInterval, Tariff, TariffConditions,
    TariffFixed, EVSE,
};
use rocpp_types::{JsonCodec, ParseError, ValidationError};
use serde_json::json;

use crate::harness::init_logger;

fn invalid_field<T: JsonCodec + std::fmt::Debug>(json: serde_json::Value) -> &'static str {
    match T::try_parse(&json) {
        Err(ParseError::InvalidField { field, .. }) => field,
        other => panic!("expected an invalid field for {json}, got {other:?}"),
    }
}

pub fn run() -> anyhow::Result<()> {
    init_logger();

    assert_eq!(
        AdditionalInfo::try_parse(&json!({ "additionalIdToken": "tag" })),
        Err(ParseError::MissingField { field: "type" })
    );
    assert_eq!(
        AdditionalInfo::try_parse(&json!({ "additionalIdToken": "tag", "type": null })),
        Err(ParseError::MissingField { field: "type" })
    );
    assert_eq!(
        AdditionalInfo::try_parse(&json!({ "additionalIdToken": "   ", "type": "RFID" })),
        Err(ParseError::Validation(ValidationError::EmptyText {
            field: "additionalIdToken"
        }))
    );
    assert_eq!(
        TariffFixed::try_parse(&json!({ "prices": [] })),
        Err(ParseError::Validation(ValidationError::EmptyCollection {
            field: "prices"
        }))
    );

    assert_eq!(
        invalid_field::<Cost>(json!({ "costKind": "CarbonDioxideEmission", "amount": "100" })),
        "amount"
    );
    assert_eq!(
        invalid_field::<Cost>(json!({ "costKind": "Banana", "amount": 1 })),
        "costKind"
    );
    assert_eq!(invalid_field::<EVSE>(json!({ "id": 1, "connectorId": "x" })), "connectorId");
    assert_eq!(invalid_field::<DERCurvePoint>(json!({ "x": "1", "y": 2 })), "x");
    assert_eq!(invalid_field::<RelativeTimeInterval>(json!({ "start": 1.5 })), "start");
    assert_eq!(
        invalid_field::<TariffConditions>(json!({ "startTimeOfDay": "7am" })),
        "startTimeOfDay"
    );
    assert_eq!(
        invalid_field::<TariffFixed>(json!({ "prices": {} })),
        "prices"
    );

    // The innermost failure surfaces unchanged.
    let nested = json!({
        "tariffId": "T-1",
        "currency": "EUR",
        "energy": { "prices": [{ "priceKwh": 0.3 }, { "priceKwh": "cheap" }] }
    });
    assert_eq!(invalid_field::<Tariff>(nested), "priceKwh");
    assert_eq!(
        EVSE::try_parse(&json!({ "id": 1, "customData": { "note": "no vendor" } })),
        Err(ParseError::MissingField { field: "vendorId" })
    );

    assert_eq!(
        Cost::try_parse(&json!([1, 2])),
        Err(ParseError::NotAnObject { type_name: "Cost" })
    );
    assert!(matches!(Cost::parse("{\"costKind\":"), Err(ParseError::Syntax(_))));

    let error = AdditionalInfo::parse(r#"{"additionalIdToken":"tag"}"#).unwrap_err();
    assert_eq!(error.to_string(), "the mandatory field 'type' is missing");
    Ok(())
}
