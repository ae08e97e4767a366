use chrono::{DateTime, TimeDelta, Utc};
use rocpp_types::v21::types::{
    ChargingRateUnit, ChargingRateValue, EVAbsolutePriceScheduleEntry, EVPowerSchedule,
    EVPowerScheduleEntry, EVPriceRule, LimitAtSoC, RelativeTimeInterval,
};
use rocpp_types::{JsonCodec, ValidationError};
use rust_decimal::Decimal;
use serde_json::json;

use crate::harness::{fixture, init_logger};

pub fn run() -> anyhow::Result<()> {
    init_logger();

    let schedule = EVPowerSchedule::try_parse(&fixture("ev_power_schedule")?)?;
    let anchor: DateTime<Utc> = "2026-03-01T08:00:00Z".parse()?;
    assert_eq!(schedule.time_anchor(), anchor);
    let power_at = |offset: TimeDelta| {
        schedule
            .entry_at(anchor + offset)
            .map(EVPowerScheduleEntry::power)
    };
    assert_eq!(power_at(TimeDelta::minutes(30)), Some(Decimal::from(11000)));
    assert_eq!(power_at(TimeDelta::minutes(70)), Some(Decimal::new(-30005, 1)));
    assert_eq!(power_at(TimeDelta::seconds(-1)), None);
    assert_eq!(power_at(TimeDelta::hours(2)), None);

    let lenient = EVPowerSchedule::try_parse(&json!({
        "evPowerScheduleEntries": [
            { "duration": -9223372036854775i64, "power": 1 },
            { "duration": 10, "power": 2 }
        ],
        "timeAnchor": "2020-01-01T00:00:00Z"
    }))?;
    let start: DateTime<Utc> = "2020-01-01T00:00:00Z".parse()?;
    let power_in_lenient = |at: DateTime<Utc>| {
        lenient
            .entry_at(at)
            .map(EVPowerScheduleEntry::power)
    };
    assert_eq!(power_in_lenient(start), Some(Decimal::from(2)));
    assert_eq!(power_in_lenient(start + TimeDelta::seconds(9)), Some(Decimal::from(2)));
    assert_eq!(power_in_lenient(start + TimeDelta::days(1)), None);

    // Entries are ordered in time, unlike tariff prices.
    let first = EVPowerScheduleEntry::new(TimeDelta::minutes(10), Decimal::from(7000));
    let second = EVPowerScheduleEntry::new(TimeDelta::minutes(5), Decimal::ZERO);
    assert_ne!(
        EVPowerSchedule::new(vec![first.clone(), second.clone()], anchor)?,
        EVPowerSchedule::new(vec![second, first], anchor)?
    );
    assert_eq!(
        EVPowerSchedule::new(Vec::new(), anchor).unwrap_err(),
        ValidationError::EmptyCollection {
            field: "evPowerScheduleEntries"
        }
    );

    let rules = vec![
        EVPriceRule::new(Decimal::new(45, 2), Decimal::from(22000)),
        EVPriceRule::new(Decimal::new(30, 2), Decimal::ZERO),
        EVPriceRule::new(Decimal::new(35, 2), Decimal::from(7000)),
    ];
    let entry = EVAbsolutePriceScheduleEntry::new(TimeDelta::hours(2), rules)?;
    assert_eq!(
        entry,
        EVAbsolutePriceScheduleEntry::try_parse(&fixture("ev_absolute_price_schedule_entry")?)?
    );
    assert_eq!(entry.energy_fee_at(Decimal::from(10000)), Some(Decimal::new(35, 2)));
    assert_eq!(entry.energy_fee_at(Decimal::from(50000)), Some(Decimal::new(45, 2)));
    assert_eq!(entry.energy_fee_at(Decimal::from(-1)), None);

    let limit = LimitAtSoC::from_rate(80, ChargingRateValue::amperes(Decimal::from(16)));
    assert_eq!(
        limit.limit_in(ChargingRateUnit::A),
        ChargingRateValue::amperes(Decimal::from(16))
    );
    assert_eq!(limit.limit_in(ChargingRateUnit::W).to_string(), "16 W");
    assert_eq!(limit.to_string(), "16 at 80% SoC");

    let interval = RelativeTimeInterval::new(TimeDelta::minutes(15), Some(TimeDelta::minutes(30)));
    assert_eq!(interval.end(), Some(TimeDelta::minutes(45)));
    assert_eq!(RelativeTimeInterval::new(TimeDelta::zero(), None).end(), None);
    Ok(())
}
