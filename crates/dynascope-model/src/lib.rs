//! Data model types for the dynascope store utilities.
//!
//! This crate holds the wire-faithful representation of what the key-value
//! store hands back: item attribute values, table descriptors, and composite
//! item keys. Serialization follows the store's JSON conventions
//! (`PascalCase` field names, single-key attribute value objects), with one
//! deliberate deviation: descriptor timestamps render as ISO-8601 strings via
//! [`Timestamp`] instead of raw epoch seconds, so report dumps stay readable.
// "DynamoDB" appears throughout the doc comments in this crate.
#![allow(clippy::doc_markdown)]

pub mod attribute_value;
pub mod key;
pub mod timestamp;
pub mod types;

pub use attribute_value::AttributeValue;
pub use key::ItemKey;
pub use timestamp::Timestamp;
pub use types::{Item, TableDescription};
