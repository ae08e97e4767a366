use anyhow::Context;
use chrono::{DateTime, NaiveDate, Utc};
use rocpp_types::v21::types::{
    DayOfWeek, EvseKind, Tariff, TariffEnergy, TariffEnergyPrice, TariffWindow, TaxRate,
};
use rocpp_types::JsonCodec;
use rust_decimal::Decimal;

use crate::harness::{fixture, init_logger};

fn date(text: &str) -> anyhow::Result<NaiveDate> {
    Ok(text.parse()?)
}

pub fn run() -> anyhow::Result<()> {
    init_logger();

    let tariff = Tariff::try_parse(&fixture("tariff")?)?;
    assert_eq!(tariff.to_string(), "tariff T-2026-01 in EUR");
    assert_eq!(tariff.currency(), "EUR");
    assert_eq!(
        tariff.valid_from(),
        Some("2026-01-01T00:00:00Z".parse::<DateTime<Utc>>()?)
    );

    let energy = tariff.energy().context("tariff has an energy component")?;
    assert_eq!(energy.lowest_price(), Decimal::new(29, 2));
    assert_eq!(energy.with_tax(Decimal::from(100)), Some(Decimal::from(119)));
    assert_eq!(energy.with_tax(Decimal::MAX), None);

    let peak = energy.prices()[0]
        .conditions()
        .context("peak price has conditions")?;
    assert_eq!(peak.window().evse_kind(), Some(EvseKind::AC));
    assert!(peak.window().applies_on(date("2026-01-05")?));
    assert!(!peak.window().applies_on(date("2026-01-03")?));

    let fixed = tariff.fixed_fee().context("tariff has a fixed fee")?;
    assert_eq!(
        fixed.to_string(),
        "TariffFixed: 1.5 fixed (paid with VISA) + 1 tax rate(s)"
    );
    assert!(tariff.reservation_time().is_none());

    let january = TariffWindow::new()
        .on_days([DayOfWeek::Friday, DayOfWeek::Monday, DayOfWeek::Friday])
        .valid(Some(date("2026-01-01")?), Some(date("2026-02-01")?));
    assert_eq!(
        january.days_of_week(),
        &[DayOfWeek::Monday, DayOfWeek::Friday]
    );
    assert!(january.applies_on(date("2026-01-02")?));
    assert!(!january.applies_on(date("2026-02-02")?));
    assert!(!january.applies_on(date("2025-12-29")?));
    assert!(TariffWindow::new().is_unrestricted());
    assert!(!january.is_unrestricted());

    let stacked = TariffEnergy::new(
        vec![TariffEnergyPrice::new(Decimal::new(40, 2), None)],
        vec![
            TaxRate::new("VAT", Decimal::from(19), Some(0))?,
            TaxRate::new("City", Decimal::from(2), None)?,
            TaxRate::new("Surcharge", Decimal::from(10), Some(1))?,
        ],
    )?;
    assert_eq!(
        stacked.with_tax(Decimal::from(100)),
        Some(Decimal::new(1331, 1))
    );

    let levies = TariffEnergy::new(
        vec![TariffEnergyPrice::new(Decimal::ONE, None)],
        vec![
            TaxRate::new("A", Decimal::MAX, Some(0))?,
            TaxRate::new("B", Decimal::MAX, Some(0))?,
        ],
    )?;
    assert_eq!(levies.with_tax(Decimal::ONE), None);
    assert_eq!(levies.with_tax(Decimal::ZERO), None);

    let untaxed = TariffEnergy::new(vec![TariffEnergyPrice::new(Decimal::ONE, None)], vec![])?;
    assert_eq!(untaxed.with_tax(Decimal::MAX), Some(Decimal::MAX));
    Ok(())
}
