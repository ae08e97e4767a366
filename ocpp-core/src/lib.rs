//! OCPP 2.1 value objects with a validated JSON representation.
//!
//! Every type implements [`format::JsonCodec`]: `try_parse` for JSON values,
//! `parse` for JSON text and `to_json` for the way back. Per-type hooks and
//! strict schema bound checking are configured through
//! [`format::CodecContext`].

pub mod format;
pub mod v21;

pub use format::{CodecContext, CodecHooks, CodecOptions, JsonCodec, ParseError, ValidationError};
