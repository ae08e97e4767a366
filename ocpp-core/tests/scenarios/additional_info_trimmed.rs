use rocpp_types::v21::types::AdditionalInfo;
use rocpp_types::JsonCodec;

use crate::harness::{hash_of, init_logger};

pub fn run() -> anyhow::Result<()> {
    init_logger();

    let info = AdditionalInfo::new("  tag123  ", "RFID")?;
    assert_eq!(info.additional_id_token(), "tag123");
    assert_eq!(info.token_type(), "RFID");

    let text = serde_json::to_string(&info.to_json())?;
    assert_eq!(text, r#"{"additionalIdToken":"tag123","type":"RFID"}"#);

    let parsed = AdditionalInfo::parse(&text)?;
    assert_eq!(parsed, info);
    assert_eq!(hash_of(&parsed), hash_of(&info));

    let padded = AdditionalInfo::parse(r#"{"additionalIdToken":" tag123","type":"RFID "}"#)?;
    assert_eq!(padded, info);
    Ok(())
}
