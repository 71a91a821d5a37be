//! Response format trait and implementations.

use serde::de::DeserializeOwned;

use crate::content_type::ContentType;
use crate::error::ValidationError;

/// Trait for response format parsing strategies.
///
/// Each format transforms a raw response body into the caller's type. The
/// target shape is chosen at the call site through the `S` parameter.
pub trait ResponseFormat {
    /// Parse a response body into `S`.
    fn parse<S: DeserializeOwned>(body: &[u8]) -> Result<S, ValidationError>;

    /// The content type this format reads.
    fn content_type() -> ContentType;
}

/// JSON response format.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl ResponseFormat for JsonFormat {
    fn parse<S: DeserializeOwned>(body: &[u8]) -> Result<S, ValidationError> {
        serde_json::from_slice(body).map_err(ValidationError::JsonParse)
    }

    fn content_type() -> ContentType {
        ContentType::Json
    }
}

/// XML response format.
///
/// The root element name is not checked; its children map onto the fields
/// of `S`.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlFormat;

impl ResponseFormat for XmlFormat {
    fn parse<S: DeserializeOwned>(body: &[u8]) -> Result<S, ValidationError> {
        quick_xml::de::from_reader(body).map_err(ValidationError::XmlParse)
    }

    fn content_type() -> ContentType {
        ContentType::Xml
    }
}

/// Decodes `body` according to `content_type`.
///
/// An empty (or whitespace-only) body yields `S::default()`, so a successful
/// response always produces a constructed value.
pub fn decode<S>(content_type: ContentType, body: &[u8]) -> Result<S, ValidationError>
where
    S: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(S::default());
    }

    match content_type {
        ContentType::Json => JsonFormat::parse(body),
        ContentType::Xml => XmlFormat::parse(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    struct Roster {
        #[serde(rename = "member", default)]
        members: Vec<Member>,
    }

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    struct Member {
        id: u32,
        name: String,
    }

    #[test]
    fn test_json_format_parse() {
        let body = br#"{"member": [{"id": 1, "name": "Ann"}]}"#;
        let roster: Roster = JsonFormat::parse(body).unwrap();
        assert_eq!(roster.members.len(), 1);
        assert_eq!(roster.members[0].name, "Ann");
    }

    #[test]
    fn test_xml_format_parse() {
        let body = b"<roster><member><id>1</id><name>Ann</name></member><member><id>2</id><name>Ben</name></member></roster>";
        let roster: Roster = XmlFormat::parse(body).unwrap();
        assert_eq!(
            roster.members,
            vec![
                Member { id: 1, name: "Ann".to_string() },
                Member { id: 2, name: "Ben".to_string() },
            ]
        );
    }

    #[test]
    fn test_decode_follows_content_type() {
        let json = br#"{"member": [{"id": 3, "name": "Cy"}]}"#;
        let xml = b"<roster><member><id>3</id><name>Cy</name></member></roster>";

        let from_json: Roster = decode(ContentType::Json, json).unwrap();
        let from_xml: Roster = decode(ContentType::Xml, xml).unwrap();
        assert_eq!(from_json, from_xml);

        let crossed = decode::<Roster>(ContentType::Json, xml);
        assert!(matches!(crossed, Err(ValidationError::JsonParse(_))));
    }

    #[test]
    fn test_empty_body_yields_default() {
        let roster: Roster = decode(ContentType::Xml, b"").unwrap();
        assert_eq!(roster, Roster::default());

        let roster: Roster = decode(ContentType::Json, b"  \n").unwrap();
        assert_eq!(roster, Roster::default());
    }

    #[test]
    fn test_shape_mismatch_is_an_error() {
        let body = br#"{"member": "not a list"}"#;
        let result = decode::<Roster>(ContentType::Json, body);
        assert!(matches!(result, Err(ValidationError::JsonParse(_))));
    }

    #[test]
    fn test_content_types() {
        assert_eq!(JsonFormat::content_type(), ContentType::Json);
        assert_eq!(XmlFormat::content_type(), ContentType::Xml);
    }
}
