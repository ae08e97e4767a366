use crate::format::{ParseError, ValidationError};

/// Error codes of an OCPP 2.1 CALLERROR frame.
#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProtocolError {
    FormatViolation,
    GenericError,
    InternalError,
    MessageTypeNotSupported,
    NotImplemented,
    NotSupported,
    OccurrenceConstraintViolation,
    PropertyConstraintViolation,
    ProtocolError,
    RpcFrameworkError,
    SecurityError,
    TypeConstraintViolation,
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProtocolError::FormatViolation => "FormatViolation",
            ProtocolError::GenericError => "GenericError",
            ProtocolError::InternalError => "InternalError",
            ProtocolError::MessageTypeNotSupported => "MessageTypeNotSupported",
            ProtocolError::NotImplemented => "NotImplemented",
            ProtocolError::NotSupported => "NotSupported",
            ProtocolError::OccurrenceConstraintViolation => "OccurrenceConstraintViolation",
            ProtocolError::PropertyConstraintViolation => "PropertyConstraintViolation",
            ProtocolError::ProtocolError => "ProtocolError",
            ProtocolError::RpcFrameworkError => "RpcFrameworkError",
            ProtocolError::SecurityError => "SecurityError",
            ProtocolError::TypeConstraintViolation => "TypeConstraintViolation",
        };
        write!(f, "{s}")
    }
}

/// The error code a receiver answers with when a payload does not parse.
impl From<&ParseError> for ProtocolError {
    fn from(error: &ParseError) -> Self {
        match error {
            ParseError::NotAnObject { .. } | ParseError::Syntax(_) => {
                ProtocolError::FormatViolation
            }
            ParseError::MissingField { .. } => ProtocolError::OccurrenceConstraintViolation,
            ParseError::InvalidField { .. } => ProtocolError::TypeConstraintViolation,
            ParseError::Validation(ValidationError::EmptyCollection { .. }) => {
                ProtocolError::OccurrenceConstraintViolation
            }
            ParseError::Validation(_) => ProtocolError::PropertyConstraintViolation,
        }
    }
}

impl From<ParseError> for ProtocolError {
    fn from(error: ParseError) -> Self {
        ProtocolError::from(&error)
    }
}
