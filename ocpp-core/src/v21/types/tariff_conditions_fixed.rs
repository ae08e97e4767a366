use core::fmt;

use crate::format::bounds;
use crate::format::codec::{impl_serde_via_codec, JsonCodec};
use crate::format::{FieldReader, FieldWriter, ParseError, ValidationError};

use super::{CustomData, TariffWindow};

const PAYMENT_BRAND: &str = "paymentBrand";
const PAYMENT_RECOGNITION: &str = "paymentRecognition";

/// Restrictions under which a fixed price applies.
///
/// ```json
/// {
///   "startTimeOfDay": "HH:MM"?, "endTimeOfDay": "HH:MM"?,
///   "dayOfWeek": [DayOfWeek, 1..7]?,
///   "validFromDate": "YYYY-MM-DD"?, "validToDate": "YYYY-MM-DD"?,
///   "evseKind": EvseKind?,
///   "paymentBrand": "string(20)"?,
///   "paymentRecognition": "string(20)"?,
///   "customData": CustomData?
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TariffConditionsFixed {
    window: TariffWindow,
    payment_brand: Option<String>,
    payment_recognition: Option<String>,
    custom_data: Option<CustomData>,
}

impl TariffConditionsFixed {
    pub fn new(
        window: TariffWindow,
        payment_brand: Option<String>,
        payment_recognition: Option<String>,
    ) -> Self {
        Self {
            window,
            payment_brand,
            payment_recognition,
            custom_data: None,
        }
    }

    pub fn with_custom_data(mut self, custom_data: CustomData) -> Self {
        self.custom_data = Some(custom_data);
        self
    }

    pub fn window(&self) -> &TariffWindow {
        &self.window
    }

    /// Card brand the price is restricted to, e.g. "VISA".
    pub fn payment_brand(&self) -> Option<&str> {
        self.payment_brand.as_deref()
    }

    /// How the payment was recognized, e.g. "EMVCo" or "ISO14443".
    pub fn payment_recognition(&self) -> Option<&str> {
        self.payment_recognition.as_deref()
    }

    pub fn custom_data(&self) -> Option<&CustomData> {
        self.custom_data.as_ref()
    }
}

impl JsonCodec for TariffConditionsFixed {
    const TYPE_NAME: &'static str = "TariffConditionsFixed";

    fn read_fields(fields: &FieldReader<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            window: TariffWindow::read(fields)?,
            payment_brand: fields.optional_text(PAYMENT_BRAND)?,
            payment_recognition: fields.optional_text(PAYMENT_RECOGNITION)?,
            custom_data: fields.custom_data()?,
        })
    }

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        self.window.write(out);
        out.put_opt(PAYMENT_BRAND, self.payment_brand.as_deref());
        out.put_opt(PAYMENT_RECOGNITION, self.payment_recognition.as_deref());
        out.put_custom_data(self.custom_data.as_ref());
    }

    fn check_bounds(&self) -> Result<(), ValidationError> {
        if let Some(brand) = &self.payment_brand {
            bounds::max_length(PAYMENT_BRAND, brand, 20)?;
        }
        if let Some(recognition) = &self.payment_recognition {
            bounds::max_length(PAYMENT_RECOGNITION, recognition, 20)?;
        }
        bounds::nested(self.custom_data.as_ref())
    }
}

impl fmt::Display for TariffConditionsFixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.payment_brand, self.window.is_unrestricted()) {
            (Some(brand), _) => write!(f, "paid with {brand}"),
            (None, true) => write!(f, "always"),
            (None, false) => write!(f, "conditional"),
        }
    }
}

impl_serde_via_codec!(TariffConditionsFixed);
