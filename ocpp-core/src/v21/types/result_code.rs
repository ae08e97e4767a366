/// Outcome classes of a processed request.
#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResultCode {
    #[serde(rename = "OK")]
    Ok,
    Accepted,
    Rejected,
    InvalidInput,
    Forbidden,
    Timeout,
    NetworkError,
    ServerError,
    Unknown,
}

impl ResultCode {
    pub fn is_success(&self) -> bool {
        matches!(self, ResultCode::Ok | ResultCode::Accepted)
    }
}

impl core::fmt::Display for ResultCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            ResultCode::Ok => "OK",
            ResultCode::Accepted => "Accepted",
            ResultCode::Rejected => "Rejected",
            ResultCode::InvalidInput => "InvalidInput",
            ResultCode::Forbidden => "Forbidden",
            ResultCode::Timeout => "Timeout",
            ResultCode::NetworkError => "NetworkError",
            ResultCode::ServerError => "ServerError",
            ResultCode::Unknown => "Unknown",
        };
        write!(f, "{s}")
    }
}
