use chrono::TimeDelta;
use rocpp_types::v21::types::{
    AdditionalInfo, ConsumptionCost, CustomData, DERCurvePoint, DERGradient,
    EVAbsolutePriceScheduleEntry, EVPowerSchedule, EVSE, LimitBeyondSoC,
    PeriodicEventStreamParameters, RelativeTimeInterval, ResultCode, ResultInfo, StatusInfo,
    Tariff, TaxRate,
};
use rocpp_types::JsonCodec;
use rust_decimal::Decimal;
use serde_json::{json, Map, Value};

use crate::harness::{assert_round_trip, fixture, init_logger};

fn vendor() -> anyhow::Result<CustomData> {
    let mut properties = Map::new();
    properties.insert("mode".into(), json!("eco"));
    properties.insert("limits".into(), json!([1, 2, 3]));
    Ok(CustomData::with_properties("com.example", properties)?)
}

pub fn run() -> anyhow::Result<()> {
    init_logger();

    let tariff: Tariff = assert_round_trip(&fixture("tariff")?)?;
    assert_eq!(tariff.tariff_id(), "T-2026-01");
    assert_round_trip::<ConsumptionCost>(&fixture("consumption_cost")?)?;
    assert_round_trip::<EVPowerSchedule>(&fixture("ev_power_schedule")?)?;
    let price_entry = fixture("ev_absolute_price_schedule_entry")?;
    assert_round_trip::<EVAbsolutePriceScheduleEntry>(&price_entry)?;
    assert_round_trip::<StatusInfo>(&fixture("status_info")?)?;

    let custom_data = vendor()?;
    let built = [
        AdditionalInfo::new("04A2B3C4", "ISO14443")?
            .with_custom_data(custom_data.clone())
            .to_json(),
        DERCurvePoint::new(Decimal::new(-125, 2), Decimal::from(40)).to_json(),
        DERGradient::new(0, Decimal::new(5, 1), Decimal::new(25, 2))
            .with_custom_data(custom_data.clone())
            .to_json(),
        EVSE::new(2, Some(1)).to_json(),
        LimitBeyondSoC::new(80, Decimal::from(7400)).to_json(),
        PeriodicEventStreamParameters::new(Some(TimeDelta::seconds(60)), Some(10)).to_json(),
        RelativeTimeInterval::new(TimeDelta::seconds(900), Some(TimeDelta::seconds(1800)))
            .to_json(),
        ResultInfo::new(ResultCode::InvalidInput, Some("schedule overlaps".into()))
            .with_custom_data(custom_data)
            .to_json(),
    ];
    assert_round_trip::<AdditionalInfo>(&built[0])?;
    assert_round_trip::<DERCurvePoint>(&built[1])?;
    assert_round_trip::<DERGradient>(&built[2])?;
    assert_round_trip::<EVSE>(&built[3])?;
    assert_round_trip::<LimitBeyondSoC>(&built[4])?;
    assert_round_trip::<PeriodicEventStreamParameters>(&built[5])?;
    assert_round_trip::<RelativeTimeInterval>(&built[6])?;
    let result: ResultInfo = assert_round_trip(&built[7])?;
    assert_eq!(result.result_code(), ResultCode::InvalidInput);
    assert_eq!(built[7]["resultCode"], json!("InvalidInput"));
    assert_eq!(
        ResultInfo::try_parse(&json!({ "resultCode": "OK" }))?,
        ResultInfo::ok()
    );

    let precise: Decimal = "19.123456789012345678".parse()?;
    let vat = TaxRate::new("VAT", precise, None)?;
    assert_eq!(vat.to_json().to_string(), r#"{"type":"VAT","tax":19.123456789012345678}"#);
    let vat: TaxRate = assert_round_trip(&vat.to_json())?;
    assert_eq!(vat.tax(), precise);

    let fraction: Decimal = "0.12345678901234567891".parse()?;
    let text = format!(r#"{{"x":{},"y":{}}}"#, Decimal::MAX, fraction);
    let extreme: Value = serde_json::from_str(&text)?;
    let point: DERCurvePoint = assert_round_trip(&extreme)?;
    assert_eq!(point, DERCurvePoint::new(Decimal::MAX, fraction));
    assert_eq!(point.to_json().to_string(), text);
    let lowest = DERCurvePoint::new(Decimal::MIN, Decimal::ZERO);
    assert_round_trip::<DERCurvePoint>(&lowest.to_json())?;
    Ok(())
}
