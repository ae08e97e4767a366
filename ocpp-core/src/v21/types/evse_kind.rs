#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EvseKind {
    AC,
    DC,
}

impl core::fmt::Display for EvseKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            EvseKind::AC => "AC",
            EvseKind::DC => "DC",
        };
        write!(f, "{s}")
    }
}
