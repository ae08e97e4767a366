mod additional_info;
mod charging_rate_unit;
mod charging_rate_value;
mod consumption_cost;
mod cost;
mod cost_kind;
mod custom_data;
mod day_of_week;
mod der_curve_point;
mod der_gradient;
mod ev_absolute_price_schedule_entry;
mod ev_power_schedule;
mod ev_power_schedule_entry;
mod ev_price_rule;
mod evse;
mod evse_kind;
mod periodic_event_stream_parameters;
mod price;
mod rational_number;
mod relative_time_interval;
mod result_code;
mod result_info;
mod soc_limit;
mod status_info;
mod tariff;
mod tariff_conditions;
mod tariff_conditions_fixed;
mod tariff_energy_price;
mod tariff_fixed_price;
mod tariff_schedule;
mod tariff_time_price;
mod tariff_window;
mod tax_rate;

pub use {
    additional_info::AdditionalInfo,
    charging_rate_unit::ChargingRateUnit,
    charging_rate_value::ChargingRateValue,
    consumption_cost::ConsumptionCost,
    cost::Cost,
    cost_kind::CostKind,
    custom_data::CustomData,
    day_of_week::DayOfWeek,
    der_curve_point::DERCurvePoint,
    der_gradient::DERGradient,
    ev_absolute_price_schedule_entry::EVAbsolutePriceScheduleEntry,
    ev_power_schedule::EVPowerSchedule,
    ev_power_schedule_entry::EVPowerScheduleEntry,
    ev_price_rule::EVPriceRule,
    evse::EVSE,
    evse_kind::EvseKind,
    periodic_event_stream_parameters::PeriodicEventStreamParameters,
    price::Price,
    rational_number::RationalNumber,
    relative_time_interval::RelativeTimeInterval,
    result_code::ResultCode,
    result_info::ResultInfo,
    soc_limit::{LimitAtSoC, LimitBeyondSoC, SocLimit},
    status_info::StatusInfo,
    tariff::Tariff,
    tariff_conditions::TariffConditions,
    tariff_conditions_fixed::TariffConditionsFixed,
    tariff_energy_price::TariffEnergyPrice,
    tariff_fixed_price::TariffFixedPrice,
    tariff_schedule::{TariffEnergy, TariffFixed, TariffPrice, TariffSchedule, TariffTime},
    tariff_time_price::TariffTimePrice,
    tariff_window::TariffWindow,
    tax_rate::TaxRate,
};
