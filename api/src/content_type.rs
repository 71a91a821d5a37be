//! Content type preference shared by request headers and response decoding.

use strum::{Display, EnumIter, EnumString};

/// Body format negotiated with the remote service.
///
/// The same value drives the outbound `Content-Type` header and the decoder
/// applied to the response, so requests and responses always agree.
///
/// ## Examples
///
/// ```rust
/// use ccb_api::ContentType;
///
/// let parsed: ContentType = "xml".parse().unwrap();
/// assert_eq!(parsed, ContentType::Xml);
/// assert_eq!(parsed.mime(), "application/xml");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ContentType {
    /// `application/json`
    #[default]
    Json,
    /// `application/xml`
    Xml,
}

impl ContentType {
    /// Returns the MIME type sent in the `Content-Type` header.
    pub fn mime(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "application/xml",
        }
    }
}
