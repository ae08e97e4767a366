pub(crate) mod bounds;
pub mod codec;
pub mod context;
pub mod error;
pub mod fields;
pub(crate) mod hash;
pub(crate) mod numbers;
pub mod writer;

pub use codec::JsonCodec;
pub use context::{CodecContext, CodecHooks, CodecOptions};
pub use error::{ParseError, ValidationError};
pub use fields::FieldReader;
pub use writer::FieldWriter;
