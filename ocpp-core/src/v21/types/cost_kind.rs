#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CostKind {
    CarbonDioxideEmission,
    RelativePricePercentage,
    RenewableGenerationPercentage,
}

impl core::fmt::Display for CostKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            CostKind::CarbonDioxideEmission => "CarbonDioxideEmission",
            CostKind::RelativePricePercentage => "RelativePricePercentage",
            CostKind::RenewableGenerationPercentage => "RenewableGenerationPercentage",
        };
        write!(f, "{s}")
    }
}
