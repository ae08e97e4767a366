use rocpp_types::v21::types::{
    AdditionalInfo, ConsumptionCost, Cost, CostKind, CustomData, DERCurvePoint, StatusInfo,
    Tariff, TariffFixed, TariffFixedPrice, TaxRate,
};
use rust_decimal::Decimal;

use crate::harness::{hash_of, init_logger};

pub fn run() -> anyhow::Result<()> {
    init_logger();

    let upper = AdditionalInfo::new("tag", "RFID")?;
    let lower = AdditionalInfo::new("tag", "rfid")?;
    assert_eq!(upper, lower);
    assert_eq!(hash_of(&upper), hash_of(&lower));
    assert_ne!(upper, AdditionalInfo::new("TAG", "RFID")?);

    let vat = TaxRate::new("VAT", Decimal::from(19), Some(0))?;
    let vat_lower = TaxRate::new("vat", Decimal::from(19), Some(0))?;
    assert_eq!(vat, vat_lower);
    assert_eq!(hash_of(&vat), hash_of(&vat_lower));

    let status = StatusInfo::new("InvalidSchedule", None)?;
    assert_eq!(status, StatusInfo::new("INVALIDSCHEDULE", None)?);
    assert_ne!(status, StatusInfo::new("InvalidSchedule", Some("late".into()))?);

    let tariff = Tariff::new("t-1", "EUR")?;
    let shouting = Tariff::new("T-1", "EUR")?;
    assert_eq!(tariff, shouting);
    assert_eq!(hash_of(&tariff), hash_of(&shouting));

    assert_ne!(CustomData::new("org.example")?, CustomData::new("Org.Example")?);

    // Decimals compare by value, not by scale.
    let point = DERCurvePoint::new(Decimal::new(10, 1), Decimal::from(2));
    let same = DERCurvePoint::new(Decimal::ONE, Decimal::new(200, 2));
    assert_eq!(point, same);
    assert_eq!(hash_of(&point), hash_of(&same));

    // Case variants are duplicates inside a set.
    let fee = TariffFixedPrice::new(Decimal::new(15, 1), None);
    let fixed = TariffFixed::new(vec![fee.clone(), fee.clone()], vec![vat, vat_lower])?;
    assert_eq!(fixed.prices().len(), 1);
    assert_eq!(fixed.tax_rates().len(), 1);

    let co2 = Cost::new(CostKind::CarbonDioxideEmission, 250, None);
    let green = Cost::new(CostKind::RenewableGenerationPercentage, 64, None);
    let a = ConsumptionCost::new(Decimal::ONE, vec![co2.clone(), green.clone(), co2.clone()])?;
    let b = ConsumptionCost::new(Decimal::ONE, vec![green.clone(), co2.clone()])?;
    assert_eq!(a, b);
    assert_eq!(a.hash_code(), b.hash_code());
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_ne!(a, ConsumptionCost::new(Decimal::TWO, vec![green, co2])?);

    let tagged = a.clone().with_custom_data(CustomData::new("org.example")?);
    assert_ne!(tagged, a);
    assert_ne!(tagged.hash_code(), a.hash_code());
    Ok(())
}
