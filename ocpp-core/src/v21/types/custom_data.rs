use core::fmt;
use core::hash::{Hash, Hasher};

use serde_json::{Map, Value};

use crate::format::bounds;
use crate::format::codec::{impl_serde_via_codec, JsonCodec};
use crate::format::{FieldReader, FieldWriter, ParseError, ValidationError};

const VENDOR_ID: &str = "vendorId";

/// Vendor specific payload that can be attached to every OCPP object.
///
/// ```json
/// { "vendorId": "string(255)", ...additional properties }
/// ```
///
/// Properties other than `vendorId` are carried along untouched.
#[derive(Clone, Debug)]
pub struct CustomData {
    vendor_id: String,
    properties: Map<String, Value>,
}

impl CustomData {
    pub fn new(vendor_id: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_properties(vendor_id, Map::new())
    }

    pub fn with_properties(
        vendor_id: impl Into<String>,
        mut properties: Map<String, Value>,
    ) -> Result<Self, ValidationError> {
        properties.remove(VENDOR_ID);
        Ok(Self {
            vendor_id: bounds::trimmed_text(VENDOR_ID, vendor_id)?,
            properties,
        })
    }

    pub fn vendor_id(&self) -> &str {
        &self.vendor_id
    }

    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}

impl JsonCodec for CustomData {
    const TYPE_NAME: &'static str = "CustomData";

    fn read_fields(fields: &FieldReader<'_>) -> Result<Self, ParseError> {
        let vendor_id = fields.mandatory_text(VENDOR_ID)?;
        Ok(Self::with_properties(vendor_id, fields.object().clone())?)
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.put(VENDOR_ID, self.vendor_id.as_str());
        for (key, value) in &self.properties {
            out.put(key, value.clone());
        }
    }

    fn check_bounds(&self) -> Result<(), ValidationError> {
        bounds::max_length(VENDOR_ID, &self.vendor_id, 255)
    }
}

impl PartialEq for CustomData {
    fn eq(&self, other: &Self) -> bool {
        self.vendor_id == other.vendor_id && self.properties == other.properties
    }
}

impl Eq for CustomData {}

impl Hash for CustomData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vendor_id.hash(state);
        let mut keys: Vec<&String> = self.properties.keys().collect();
        keys.sort();
        keys.hash(state);
    }
}

impl fmt::Display for CustomData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} properties)", self.vendor_id, self.properties.len())
    }
}

impl_serde_via_codec!(CustomData);
