mod protocol_error;
pub mod types;

pub use protocol_error::ProtocolError;
