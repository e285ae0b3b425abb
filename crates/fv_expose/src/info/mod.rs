//! Static description of record types.
//!
//! ## Menu
//!
//! - [`FieldId`]: The identifier of a field, interned at compile time.
//! - [`TYPE_TAG`]: The name of the implicit structural marker field.
//! - [`FieldInfo`]: Name and tag flag of one field.
//! - [`RecordInfo`]: Type path and ordered fields of a record type.
//! - [`Record`]: A type with a [`RecordInfo`] and by-name field access.

// -----------------------------------------------------------------------------
// Modules

mod record;
mod record_info;

// -----------------------------------------------------------------------------
// Exports

pub use record::Record;
pub use record_info::{FieldId, FieldInfo, RecordInfo, TYPE_TAG};
