//! Line-level CSV parsing.
//!
//! The format is deliberately naive: fields are split on every comma and
//! quotes are only recognised as a wrapping pair around a whole field.

use crate::error::ParseError;
use crate::record::{LAT_RANGE, LNG_RANGE, PointRecord};

pub const FIELD_COUNT: usize = 4;

/// Parse one data line (never the header) into a [`PointRecord`].
///
/// `line_no` is the 1-based position of the line in the source text and is
/// only used for error reporting.
pub fn parse_line(line: &str, line_no: usize) -> Result<PointRecord, ParseError> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() < FIELD_COUNT {
        return Err(ParseError::MissingFields {
            line: line_no,
            found: parts.len(),
        });
    }
    if parts.len() > FIELD_COUNT {
        return Err(ParseError::ExtraFields {
            line: line_no,
            found: parts.len(),
        });
    }

    let latitude = parse_coord(parts[0], "latitude", LAT_RANGE, line_no)?;
    let longitude = parse_coord(parts[1], "longitude", LNG_RANGE, line_no)?;
    let title = strip_quotes(parts[2]);
    if title.is_empty() {
        return Err(ParseError::EmptyTitle { line: line_no });
    }

    Ok(PointRecord {
        latitude,
        longitude,
        title: title.to_string(),
        description: strip_quotes(parts[3]).to_string(),
    })
}

/// Remove one leading and one trailing `"`, each only if present.
pub fn strip_quotes(field: &str) -> &str {
    let field = field.strip_prefix('"').unwrap_or(field);
    field.strip_suffix('"').unwrap_or(field)
}

fn parse_coord(
    raw: &str,
    field: &'static str,
    (min, max): (f64, f64),
    line: usize,
) -> Result<f64, ParseError> {
    let value = match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            return Err(ParseError::InvalidNumber {
                line,
                field,
                value: raw.to_string(),
            });
        }
    };
    if !(min..=max).contains(&value) {
        return Err(ParseError::OutOfRange {
            line,
            field,
            value,
            min,
            max,
        });
    }
    Ok(value)
}
