//! Raw motion sample input.
//!
//! - `decode`: row parsing for the `;`-delimited capture format
//! - `aggregate`: grouping decoded samples into per-entity paths

mod aggregate;
mod decode;

pub use aggregate::{EntityPath, EntityPaths};
pub use decode::{
    decode_fields, decode_row, parse_number, RawSample, SampleReader, DELIMITER, FIELD_COUNT,
};
