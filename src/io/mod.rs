//! Reading and writing patent documents.
//!
//! A patent document is a JSON object holding the patent number, its lifecycle
//! status, the claims, and any attached Markush structures. Every field maps
//! onto one model field through the records in [`record`]; loading a document
//! re-validates it through the same constructors used programmatically.

pub mod error;
pub mod record;

mod json;

pub use error::Error;
pub use record::{
    ClaimElementRecord, ClaimRecord, MarkushRecord, PatentRecord, PositionRecord,
    SubstituentRecord,
};

use crate::analysis::Patent;
use std::io::{Read, Write};

/// Reads and validates a patent document from `reader`.
pub fn read_patent<R: Read>(reader: R) -> Result<Patent, Error> {
    json::reader::read(reader)
}

/// Writes `patent` as pretty-printed JSON followed by a newline.
pub fn write_patent<W: Write>(writer: W, patent: &Patent) -> Result<(), Error> {
    json::writer::write(writer, patent)
}

pub fn from_json_str(s: &str) -> Result<Patent, Error> {
    json::reader::from_str(s)
}

pub fn to_json_string(patent: &Patent) -> Result<String, Error> {
    json::writer::to_string(patent)
}
