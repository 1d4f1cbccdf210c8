use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::csv::{FIELD_COUNT, parse_line};
use crate::error::{IngestError, ParseError};
use crate::record::PointRecord;

/// What to do with the first non-blank line of the file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderMode {
    /// Drop it without looking at it.
    #[default]
    Discard,
    /// Require `latitude,longitude,title,description` (aliases allowed).
    Validate,
}

/// Outcome of ingesting one CSV document: the rows that loaded and the rows
/// that did not.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ingestion {
    pub records: Vec<PointRecord>,
    pub failures: Vec<ParseError>,
    pub skipped_blank: usize,
}

impl Ingestion {
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Split `text` into lines, handle the header, and parse every remaining
/// non-blank line. A bad row is logged and collected, never fatal.
pub fn ingest_text(text: &str, header: HeaderMode) -> Result<Ingestion, IngestError> {
    let mut out = Ingestion::default();
    // spreadsheet exports often start with a UTF-8 BOM
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .skip_while(|(_, l)| l.trim().is_empty());

    match lines.next() {
        Some((_, first)) => {
            if header == HeaderMode::Validate {
                check_header(first)?;
            }
            debug!("csv header: {}", first.trim());
        }
        None if header == HeaderMode::Validate => {
            return Err(IngestError::Header {
                found: String::new(),
            });
        }
        None => return Ok(out),
    }

    for (line_no, line) in lines {
        if line.trim().is_empty() {
            out.skipped_blank += 1;
            continue;
        }
        match parse_line(line, line_no) {
            Ok(record) => out.records.push(record),
            Err(e) => {
                warn!("skipping row: {e}");
                out.failures.push(e);
            }
        }
    }
    Ok(out)
}

fn check_header(line: &str) -> Result<(), IngestError> {
    const EXPECTED: [&[&str]; FIELD_COUNT] = [
        &["latitude", "lat"],
        &["longitude", "lng", "lon"],
        &["title", "name"],
        &["description", "desc"],
    ];
    let cols: Vec<String> = line
        .split(',')
        .map(|c| crate::csv::strip_quotes(c.trim()).to_ascii_lowercase())
        .collect();
    let ok = cols.len() == FIELD_COUNT
        && cols
            .iter()
            .zip(EXPECTED.iter())
            .all(|(c, names)| names.contains(&c.as_str()));
    if ok {
        Ok(())
    } else {
        Err(IngestError::Header {
            found: line.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "latitude,longitude,title,description\n\
        46.52,6.63,Lausanne,\"Capital of Vaud\"\n\
        \n\
        46.46,6.84,Vevey,Home of the fork\n";

    #[test]
    fn discards_header_and_blank_lines() {
        let ing = ingest_text(SAMPLE, HeaderMode::Discard).unwrap();
        assert_eq!(ing.records.len(), 2);
        assert_eq!(ing.records[0].title, "Lausanne");
        assert_eq!(ing.records[0].description, "Capital of Vaud");
        assert_eq!(ing.records[1].title, "Vevey");
        assert_eq!(ing.skipped_blank, 1);
        assert!(!ing.is_partial());
    }

    #[test]
    fn bad_rows_do_not_stop_the_good_ones() {
        let text = "lat,lng,title,description\n\
            46.52,6.63,Lausanne,ok\n\
            north,6.63,Broken,nope\n\
            46.3,7.0\n\
            46.46,6.84,Vevey,ok\n";
        let ing = ingest_text(text, HeaderMode::Discard).unwrap();
        assert_eq!(ing.records.len(), 2);
        assert_eq!(ing.failures.len(), 2);
        assert_eq!(ing.failures[0].line(), 3);
        assert_eq!(ing.failures[1].line(), 4);
        assert!(ing.is_partial());
    }

    #[test]
    fn handles_crlf_and_leading_blank_lines() {
        let text = "\r\n\r\nlatitude,longitude,title,description\r\n46.5,6.6,Ouchy,port\r\n";
        let ing = ingest_text(text, HeaderMode::Validate).unwrap();
        assert_eq!(ing.records.len(), 1);
        assert_eq!(ing.records[0].description, "port");
    }

    #[test]
    fn empty_document_yields_nothing() {
        let ing = ingest_text("  \n\n", HeaderMode::Discard).unwrap();
        assert!(ing.records.is_empty());
        assert!(ing.failures.is_empty());
        assert!(ingest_text("", HeaderMode::Validate).is_err());
    }

    #[test]
    fn header_only_document_yields_nothing() {
        let ing = ingest_text("latitude,longitude,title,description", HeaderMode::Discard).unwrap();
        assert_eq!(ing, Ingestion::default());
    }

    #[test]
    fn validate_mode_accepts_aliases() {
        let text = "LAT, Lon, Name, Desc\n46.5,6.6,Ouchy,port\n";
        assert_eq!(ingest_text(text, HeaderMode::Validate).unwrap().records.len(), 1);
    }

    #[test]
    fn byte_order_mark_does_not_break_the_header() {
        let text = "\u{feff}latitude,longitude,title,description\n46.5,6.6,Ouchy,port\n";
        let ing = ingest_text(text, HeaderMode::Validate).unwrap();
        assert_eq!(ing.records.len(), 1);
        assert_eq!(ing.records[0].title, "Ouchy");
        assert_eq!(ingest_text(text, HeaderMode::Discard).unwrap(), ing);
    }

    #[test]
    fn validate_mode_rejects_a_data_row_as_header() {
        let text = "46.5,6.6,Ouchy,port\n46.46,6.84,Vevey,ok\n";
        let err = ingest_text(text, HeaderMode::Validate).unwrap_err();
        assert_eq!(
            err,
            IngestError::Header {
                found: "46.5,6.6,Ouchy,port".to_string()
            }
        );
        // the default mode silently drops that first row
        let ing = ingest_text(text, HeaderMode::Discard).unwrap();
        assert_eq!(ing.records.len(), 1);
    }
}
