use rocpp_types::v21::types::{AdditionalInfo, ConsumptionCost, Cost, EVSE};
use rocpp_types::v21::ProtocolError;
use rocpp_types::{CodecContext, JsonCodec};
use serde_json::json;

use crate::harness::init_logger;

fn code_for<T: JsonCodec + std::fmt::Debug>(json: serde_json::Value) -> ProtocolError {
    match T::try_parse_with(&json, &CodecContext::strict()) {
        Err(error) => ProtocolError::from(&error),
        Ok(value) => panic!("{value:?} was accepted"),
    }
}

pub fn run() -> anyhow::Result<()> {
    init_logger();

    assert_eq!(code_for::<Cost>(json!("cost")), ProtocolError::FormatViolation);
    assert_eq!(
        code_for::<Cost>(json!({ "costKind": "CarbonDioxideEmission" })),
        ProtocolError::OccurrenceConstraintViolation
    );
    assert_eq!(
        code_for::<ConsumptionCost>(json!({ "startValue": 1, "cost": [] })),
        ProtocolError::OccurrenceConstraintViolation
    );
    assert_eq!(
        code_for::<EVSE>(json!({ "id": "one" })),
        ProtocolError::TypeConstraintViolation
    );
    assert_eq!(
        code_for::<EVSE>(json!({ "id": -4 })),
        ProtocolError::PropertyConstraintViolation
    );
    assert_eq!(
        code_for::<AdditionalInfo>(json!({ "additionalIdToken": "", "type": "RFID" })),
        ProtocolError::PropertyConstraintViolation
    );

    let syntax = Cost::parse("not json").unwrap_err();
    assert_eq!(ProtocolError::from(syntax), ProtocolError::FormatViolation);
    assert_eq!(
        ProtocolError::OccurrenceConstraintViolation.to_string(),
        "OccurrenceConstraintViolation"
    );
    assert_eq!(
        serde_json::from_str::<ProtocolError>("\"RpcFrameworkError\"")?,
        ProtocolError::RpcFrameworkError
    );
    Ok(())
}
