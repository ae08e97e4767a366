use core::fmt;

use crate::format::codec::{impl_serde_via_codec, JsonCodec};
use crate::format::{bounds, FieldReader, FieldWriter, ParseError, ValidationError};

use super::{CustomData, ResultCode};

const RESULT_CODE: &str = "resultCode";
const DESCRIPTION: &str = "description";

/// The generic `Result` object: a result code and an optional explanation.
///
/// ```json
/// { "resultCode": ResultCode, "description": string?, "customData": CustomData? }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResultInfo {
    result_code: ResultCode,
    description: Option<String>,
    custom_data: Option<CustomData>,
}

impl ResultInfo {
    pub fn new(result_code: ResultCode, description: Option<String>) -> Self {
        Self {
            result_code,
            description: description
                .map(|text| text.trim().to_owned())
                .filter(|text| !text.is_empty()),
            custom_data: None,
        }
    }

    pub fn ok() -> Self {
        Self::new(ResultCode::Ok, None)
    }

    pub fn with_custom_data(mut self, custom_data: CustomData) -> Self {
        self.custom_data = Some(custom_data);
        self
    }

    pub fn result_code(&self) -> ResultCode {
        self.result_code
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn custom_data(&self) -> Option<&CustomData> {
        self.custom_data.as_ref()
    }
}

impl JsonCodec for ResultInfo {
    const TYPE_NAME: &'static str = "Result";

    fn read_fields(fields: &FieldReader<'_>) -> Result<Self, ParseError> {
        let result_code = fields.mandatory(RESULT_CODE)?;
        let description = fields.optional_text(DESCRIPTION)?;
        Ok(Self {
            custom_data: fields.custom_data()?,
            ..Self::new(result_code, description)
        })
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.put_display(RESULT_CODE, &self.result_code);
        out.put_opt(DESCRIPTION, self.description.as_deref());
        out.put_custom_data(self.custom_data.as_ref());
    }

    fn check_bounds(&self) -> Result<(), ValidationError> {
        bounds::nested(self.custom_data.as_ref())
    }
}

impl fmt::Display for ResultInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{}: {}", self.result_code, description),
            None => write!(f, "{}", self.result_code),
        }
    }
}

impl_serde_via_codec!(ResultInfo);
