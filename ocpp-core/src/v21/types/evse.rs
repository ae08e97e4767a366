use core::fmt;

use crate::format::bounds;
use crate::format::codec::{impl_serde_via_codec, JsonCodec};
use crate::format::{FieldReader, FieldWriter, ParseError, ValidationError};

use super::CustomData;

const ID: &str = "id";
const CONNECTOR_ID: &str = "connectorId";

/// An EVSE of a charging station, optionally narrowed to one connector.
///
/// ```json
/// { "id": integer(>=0), "connectorId": integer(>=0)?, "customData": CustomData? }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EVSE {
    id: i32,
    connector_id: Option<i32>,
    custom_data: Option<CustomData>,
}

impl EVSE {
    pub fn new(id: i32, connector_id: Option<i32>) -> Self {
        Self {
            id,
            connector_id,
            custom_data: None,
        }
    }

    pub fn with_custom_data(mut self, custom_data: CustomData) -> Self {
        self.custom_data = Some(custom_data);
        self
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn connector_id(&self) -> Option<i32> {
        self.connector_id
    }

    pub fn custom_data(&self) -> Option<&CustomData> {
        self.custom_data.as_ref()
    }
}

impl JsonCodec for EVSE {
    const TYPE_NAME: &'static str = "EVSE";

    fn read_fields(fields: &FieldReader<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            id: fields.mandatory(ID)?,
            connector_id: fields.optional(CONNECTOR_ID)?,
            custom_data: fields.custom_data()?,
        })
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.put(ID, self.id);
        out.put_opt(CONNECTOR_ID, self.connector_id);
        out.put_custom_data(self.custom_data.as_ref());
    }

    fn check_bounds(&self) -> Result<(), ValidationError> {
        bounds::non_negative(ID, &self.id)?;
        if let Some(connector_id) = self.connector_id {
            bounds::non_negative(CONNECTOR_ID, &connector_id)?;
        }
        bounds::nested(self.custom_data.as_ref())
    }
}

impl fmt::Display for EVSE {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.connector_id {
            Some(connector_id) => write!(f, "EVSE {} connector {}", self.id, connector_id),
            None => write!(f, "EVSE {}", self.id),
        }
    }
}

impl_serde_via_codec!(EVSE);
