use core::fmt;
use core::hash::{Hash, Hasher};

use crate::format::bounds;
use crate::format::codec::{impl_serde_via_codec, JsonCodec};
use crate::format::hash::hash_ignore_ascii_case;
use crate::format::{FieldReader, FieldWriter, ParseError, ValidationError};

use super::CustomData;

const REASON_CODE: &str = "reasonCode";
const ADDITIONAL_INFO: &str = "additionalInfo";

/// More detail on the status returned in a response.
///
/// ```json
/// { "reasonCode": "string(20)", "additionalInfo": "string(1024)"?, "customData": CustomData? }
/// ```
#[derive(Clone, Debug)]
pub struct StatusInfo {
    reason_code: String,
    additional_info: Option<String>,
    custom_data: Option<CustomData>,
}

impl StatusInfo {
    pub fn new(
        reason_code: impl Into<String>,
        additional_info: Option<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            reason_code: bounds::trimmed_text(REASON_CODE, reason_code)?,
            additional_info,
            custom_data: None,
        })
    }

    pub fn with_custom_data(mut self, custom_data: CustomData) -> Self {
        self.custom_data = Some(custom_data);
        self
    }

    pub fn reason_code(&self) -> &str {
        &self.reason_code
    }

    pub fn additional_info(&self) -> Option<&str> {
        self.additional_info.as_deref()
    }

    pub fn custom_data(&self) -> Option<&CustomData> {
        self.custom_data.as_ref()
    }
}

impl JsonCodec for StatusInfo {
    const TYPE_NAME: &'static str = "StatusInfo";

    fn read_fields(fields: &FieldReader<'_>) -> Result<Self, ParseError> {
        let reason_code = fields.mandatory_text(REASON_CODE)?;
        let additional_info = fields.optional_text(ADDITIONAL_INFO)?;
        let custom_data = fields.custom_data()?;
        Ok(Self {
            custom_data,
            ..Self::new(reason_code, additional_info)?
        })
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.put(REASON_CODE, self.reason_code.as_str());
        out.put_opt(ADDITIONAL_INFO, self.additional_info.as_deref());
        out.put_custom_data(self.custom_data.as_ref());
    }

    fn check_bounds(&self) -> Result<(), ValidationError> {
        bounds::max_length(REASON_CODE, &self.reason_code, 20)?;
        if let Some(info) = &self.additional_info {
            bounds::max_length(ADDITIONAL_INFO, info, 1024)?;
        }
        bounds::nested(self.custom_data.as_ref())
    }
}

impl PartialEq for StatusInfo {
    fn eq(&self, other: &Self) -> bool {
        self.reason_code.eq_ignore_ascii_case(&other.reason_code)
            && self.additional_info == other.additional_info
            && self.custom_data == other.custom_data
    }
}

impl Eq for StatusInfo {}

impl Hash for StatusInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_ignore_ascii_case(&self.reason_code, state);
        self.additional_info.hash(state);
        self.custom_data.hash(state);
    }
}

impl fmt::Display for StatusInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.additional_info {
            Some(info) => write!(f, "{} ({})", self.reason_code, info),
            None => write!(f, "{}", self.reason_code),
        }
    }
}

impl_serde_via_codec!(StatusInfo);
