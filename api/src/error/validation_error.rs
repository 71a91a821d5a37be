//! Response deserialization errors.

use thiserror::Error;

use crate::content_type::ContentType;

/// Errors raised while turning a response body into the caller's type.
///
/// Each variant corresponds to one [`ContentType`].
#[derive(Debug, Error)]
pub enum ValidationError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// XML parsing failed.
    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::DeError),
}

impl ValidationError {
    /// The content type whose decoder produced this error.
    pub fn content_type(&self) -> ContentType {
        match self {
            Self::JsonParse(_) => ContentType::Json,
            Self::XmlParse(_) => ContentType::Xml,
        }
    }
}
