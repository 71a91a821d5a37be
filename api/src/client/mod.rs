//! Request execution.
//!
//! This module provides the [`Executor`], which turns a service name and a
//! [`QueryObject`](crate::QueryObject) into an authenticated GET request and
//! decodes the response into the caller's type.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use ccb_api::{ContentType, Executor};
//! use url::Url;
//!
//! #[derive(Debug, Default, serde::Deserialize)]
//! struct Campuses { #[serde(rename = "campus", default)] items: Vec<Campus> }
//!
//! #[derive(Debug, Default, serde::Deserialize)]
//! struct Campus { id: u32, name: String }
//!
//! let executor = Executor::builder(
//!     Url::parse("https://mychurch.ccbchurch.com/api.php")?,
//!     "api_user",
//!     "secret",
//! )
//! .content_type(ContentType::Xml)
//! .build();
//!
//! let campuses: Campuses = executor.execute(&(), "campus_list").await?;
//! ```

mod executor;
mod request;

pub use executor::{Executor, ExecutorBuilder, SUCCESS_CEILING};
pub use request::{PreparedRequest, ACCEPT_ENCODING_VALUE, SERVICE_PARAM};
