//! Raw motion sample decoding.
//!
//! Rows are `;`-delimited with the layout `entityId; x; <ignored>; y; timestamp`.
//! The third column is present in every capture export but carries nothing we
//! use; it is skipped rather than interpreted.

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter, Trim};

use crate::error::PipelineError;

/// Field delimiter of the raw capture format.
pub const DELIMITER: u8 = b';';

/// Minimum number of fields a row must carry.
pub const FIELD_COUNT: usize = 5;

/// A single decoded motion sample.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSample {
    /// Identifier of the tracked entity
    pub entity_id: String,
    /// Horizontal position in projection space (meters)
    pub x: f64,
    /// Vertical position in projection space (meters)
    pub y: f64,
    /// Capture timestamp
    pub timestamp: f64,
}

impl RawSample {
    pub fn new(entity_id: impl Into<String>, x: f64, y: f64, timestamp: f64) -> Self {
        Self {
            entity_id: entity_id.into(),
            x,
            y,
            timestamp,
        }
    }
}

/// Parse a numeric field, accepting `,` as decimal separator.
///
/// Every comma is replaced with a period before parsing. Non-finite results
/// are rejected.
pub fn parse_number(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Decode one row that has already been split into fields.
///
/// # Arguments
/// * `fields` - Row fields in source order (whitespace is trimmed here)
/// * `line` - 1-based line number, used in error reports
pub fn decode_fields(fields: &[&str], line: usize) -> Result<RawSample, PipelineError> {
    if fields.len() < FIELD_COUNT {
        return Err(PipelineError::MissingFields {
            line,
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }

    let number = |field: &'static str, raw: &str| {
        parse_number(raw).ok_or_else(|| PipelineError::MalformedRow {
            line,
            field,
            value: raw.trim().to_string(),
        })
    };

    // fields[2] is the unused capture column
    Ok(RawSample {
        entity_id: fields[0].trim().to_string(),
        x: number("x", fields[1])?,
        y: number("y", fields[3])?,
        timestamp: number("timestamp", fields[4])?,
    })
}

fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All);
    builder
}

fn decode_record(record: &StringRecord, line: usize) -> Result<RawSample, PipelineError> {
    let fields: Vec<&str> = record.iter().collect();
    decode_fields(&fields, line)
}

/// Decode one raw text row.
///
/// Quoted fields are unquoted first, so `"0,5"` parses like `0,5`.
pub fn decode_row(row: &str, line: usize) -> Result<RawSample, PipelineError> {
    let mut reader = reader_builder().from_reader(row.as_bytes());
    let mut record = StringRecord::new();
    if !reader.read_record(&mut record)? {
        return Err(PipelineError::MissingFields {
            line,
            expected: FIELD_COUNT,
            found: 0,
        });
    }
    decode_record(&record, line)
}

/// Lazily decodes samples from a reader.
///
/// Blank and whitespace-only lines are skipped. Each item is the decode
/// result of one row, so callers decide whether to stop at the first error.
pub struct SampleReader<R: Read> {
    records: StringRecordsIntoIter<R>,
}

impl<R: Read> SampleReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            records: reader_builder().from_reader(reader).into_records(),
        }
    }
}

impl SampleReader<fs::File> {
    /// Open a sample file from a path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let file = fs::File::open(path).map_err(|source| PipelineError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(file))
    }
}

impl<'a> SampleReader<&'a [u8]> {
    /// Decode from an in-memory string.
    pub fn from_text(content: &'a str) -> Self {
        Self::new(content.as_bytes())
    }
}

impl<R: Read> Iterator for SampleReader<R> {
    type Item = Result<RawSample, PipelineError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(e) => return Some(Err(e.into())),
            };

            if record.iter().all(str::is_empty) {
                continue;
            }

            let line = record.position().map_or(0, |pos| pos.line() as usize);
            return Some(decode_record(&record, line));
        }
    }
}
