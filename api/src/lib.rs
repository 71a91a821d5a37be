//! Typed client for the Church Community Builder service API.
//!
//! Every service lives behind a single URL and is selected with the `srv`
//! request parameter. The `ccb_api` crate turns a per-service query object
//! into an authenticated GET request and decodes the answer into a typed
//! result.
//!
//! ## Features
//!
//! - **Query objects**: `Serialize` structs with optional fields, flattened to
//!   string parameters with unset fields dropped
//! - **One generic executor**: Basic auth, `gzip,deflate` encoding, JSON or
//!   XML bodies chosen once per executor
//! - **Layered error handling**: transport, remote status, deserialization and
//!   configuration failures are distinct variants
//! - **Typed resources**: endpoint modules declare service name, query type and
//!   result type once
//!
//! ## Example
//!
//! ```rust,ignore
//! use ccb_api::{ContentType, Executor};
//! use ccb_api::processes::queue_managers::QueueManagers;
//! use url::Url;
//!
//! let executor = Executor::builder(
//!     Url::parse("https://mychurch.ccbchurch.com/api.php")?,
//!     "api_user",
//!     "secret",
//! )
//! .content_type(ContentType::Xml)
//! .build();
//!
//! let managers = QueueManagers::new(&executor).list(Some(5), None).await?;
//! println!("{} managers", managers.len());
//! ```

pub mod client;
pub mod config;
pub mod content_type;
pub mod error;
pub mod processes;
pub mod query;
pub mod resource;
pub mod response;

// Re-exports for convenience
pub use client::{Executor, ExecutorBuilder, PreparedRequest};
pub use config::ApiConfig;
pub use content_type::ContentType;
pub use error::{ApiError, ClientError, ConfigError, ValidationError};
pub use query::{QueryObject, QueryParams};
pub use resource::Resource;
