//! Per-call request assembly.

use reqwest::header::HeaderValue;
use url::Url;

use crate::query::QueryParams;

/// Request parameter carrying the service name.
pub const SERVICE_PARAM: &str = "srv";

/// `Accept-Encoding` value sent with every request.
pub const ACCEPT_ENCODING_VALUE: &str = "gzip,deflate";

/// A fully assembled request, ready to send.
///
/// Built fresh for every call and never stored on the executor, so
/// concurrent calls cannot see each other's parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub(crate) url: Url,
    pub(crate) params: QueryParams,
    pub(crate) content_type: HeaderValue,
}

impl PreparedRequest {
    /// The URL the GET is sent to, without the query string.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// All request parameters, service selector included.
    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// The service this request targets.
    pub fn service(&self) -> Option<&str> {
        self.params.get(SERVICE_PARAM)
    }

    /// The `Content-Type` header value.
    pub fn content_type(&self) -> &str {
        self.content_type.to_str().unwrap_or_default()
    }

    /// The URL with all parameters encoded into its query string.
    pub fn full_url(&self) -> Url {
        let mut url = self.url.clone();
        if !self.params.is_empty() {
            url.query_pairs_mut().extend_pairs(self.params.iter());
        }
        url
    }
}
