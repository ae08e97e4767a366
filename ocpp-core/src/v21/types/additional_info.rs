use core::fmt;
use core::hash::{Hash, Hasher};

use crate::format::bounds;
use crate::format::codec::{impl_serde_via_codec, JsonCodec};
use crate::format::hash::hash_ignore_ascii_case;
use crate::format::{FieldReader, FieldWriter, ParseError, ValidationError};

use super::CustomData;

const ADDITIONAL_ID_TOKEN: &str = "additionalIdToken";
const TYPE: &str = "type";

/// An additional identifier that goes along with an id token.
///
/// ```json
/// {
///   "additionalIdToken": "string(255)",
///   "type": "string(50)",
///   "customData": CustomData?
/// }
/// ```
///
/// Both strings are trimmed and must not be empty. `type` compares without
/// regard to ASCII case.
#[derive(Clone, Debug)]
pub struct AdditionalInfo {
    additional_id_token: String,
    token_type: String,
    custom_data: Option<CustomData>,
}

impl AdditionalInfo {
    pub fn new(
        additional_id_token: impl Into<String>,
        token_type: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            additional_id_token: bounds::trimmed_text(ADDITIONAL_ID_TOKEN, additional_id_token)?,
            token_type: bounds::trimmed_text(TYPE, token_type)?,
            custom_data: None,
        })
    }

    pub fn with_custom_data(mut self, custom_data: CustomData) -> Self {
        self.custom_data = Some(custom_data);
        self
    }

    pub fn additional_id_token(&self) -> &str {
        &self.additional_id_token
    }

    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    pub fn custom_data(&self) -> Option<&CustomData> {
        self.custom_data.as_ref()
    }
}

impl JsonCodec for AdditionalInfo {
    const TYPE_NAME: &'static str = "AdditionalInfo";

    fn read_fields(fields: &FieldReader<'_>) -> Result<Self, ParseError> {
        let token = fields.mandatory_text(ADDITIONAL_ID_TOKEN)?;
        let token_type = fields.mandatory_text(TYPE)?;
        let custom_data = fields.custom_data()?;
        Ok(Self {
            custom_data,
            ..Self::new(token, token_type)?
        })
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.put(ADDITIONAL_ID_TOKEN, self.additional_id_token.as_str());
        out.put(TYPE, self.token_type.as_str());
        out.put_custom_data(self.custom_data.as_ref());
    }

    fn check_bounds(&self) -> Result<(), ValidationError> {
        bounds::max_length(ADDITIONAL_ID_TOKEN, &self.additional_id_token, 255)?;
        bounds::max_length(TYPE, &self.token_type, 50)?;
        bounds::nested(self.custom_data.as_ref())
    }
}

impl PartialEq for AdditionalInfo {
    fn eq(&self, other: &Self) -> bool {
        self.additional_id_token == other.additional_id_token
            && self.token_type.eq_ignore_ascii_case(&other.token_type)
            && self.custom_data == other.custom_data
    }
}

impl Eq for AdditionalInfo {}

impl Hash for AdditionalInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.additional_id_token.hash(state);
        hash_ignore_ascii_case(&self.token_type, state);
        self.custom_data.hash(state);
    }
}

impl fmt::Display for AdditionalInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.additional_id_token, self.token_type)
    }
}

impl_serde_via_codec!(AdditionalInfo);
