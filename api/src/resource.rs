//! Typed endpoint declarations.

use serde::de::DeserializeOwned;

use crate::query::QueryObject;

/// A remote service together with its query and result types.
///
/// Endpoint modules implement this on a marker type so callers can write
/// `executor.call::<QueueManagers>(&query)` instead of repeating the service
/// name and result type at every call site.
pub trait Resource {
    /// Value of the `srv` request parameter.
    const SERVICE: &'static str;

    /// Query object accepted by the service.
    type Query: QueryObject;

    /// Shape the response body decodes into.
    type Output: DeserializeOwned + Default;
}
