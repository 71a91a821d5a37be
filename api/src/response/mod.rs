//! Response decoding.
//!
//! This module provides the [`ResponseFormat`] trait for typed body parsing,
//! with one implementation per [`ContentType`](crate::ContentType), and
//! [`decode`] which picks the implementation at runtime from the executor's
//! configured preference.

mod format;

pub use format::{decode, JsonFormat, ResponseFormat, XmlFormat};
