pub mod additional_info_trimmed;
pub mod consumption_cost_requires_costs;
pub mod cost_multiplier;
pub mod equality;
pub mod ev_schedules;
pub mod hooks;
pub mod omission;
pub mod protocol_errors;
pub mod rational_number_decimal;
pub mod rejection;
pub mod round_trip;
pub mod serde_bridge;
pub mod tariff_pricing;
