//! Encoding a [`Directory`] to the contacts file format and back.
//!
//! ```text
//! Name,Phone numbers
//! Alice,"['555-1234', '555-5678']"
//! Bob,['555-9999']
//! ```
//!
//! The second column holds the phone list in bracketed, quoted form. Items are
//! written single-quoted with `\` and `'` backslash-escaped, so any phone value
//! survives a round trip. Cells are quoted only when the CSV layer needs it.
//! On read, cells that are not a well-formed quoted list fall back to the
//! legacy rule: strip brackets, whitespace and quotes, then split on commas.
//! Under that rule values containing commas, brackets or quotes cannot be
//! recovered, so only files written by [`encode`] guarantee a lossless round
//! trip for them.

use crate::domain::{Name, Phone};
use crate::error::{StorageError, StorageResult};
use crate::models::{Directory, Record};
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{Read, Write};
use tracing::{debug, warn};

/// Column names of the header row.
pub const HEADER: [&str; 2] = ["Name", "Phone numbers"];

static LEGACY_STRIP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[\[\]\s'"]"#).expect("Failed to compile legacy phone list regex")
});

/// Read a directory from `reader`.
///
/// An empty source yields an empty directory. When the same name appears on
/// several rows the last one wins.
///
/// # Errors
///
/// Returns `StorageError::Format` for a bad header or row shape,
/// `StorageError::InvalidRecord` for an empty name, and `StorageError::Io`
/// if reading fails or the input is not UTF-8.
pub fn decode<R: Read>(mut reader: R) -> StorageResult<Directory> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    decode_str(&input)
}

/// Read a directory from an in-memory string. See [`decode`].
pub fn decode_str(input: &str) -> StorageResult<Directory> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input.as_bytes());
    let mut rows = reader.records();

    let mut directory = Directory::new();
    let Some(header) = rows.next().transpose()? else {
        return Ok(directory);
    };
    if !header.iter().eq(HEADER) {
        return Err(StorageError::Format {
            line: line_of(&header),
            reason: format!(
                "expected header '{}', found '{}'",
                HEADER.join(","),
                header.iter().collect::<Vec<_>>().join(",")
            ),
        });
    }

    for row in rows {
        let row = row?;
        let line = line_of(&row);
        if row.len() != HEADER.len() {
            return Err(StorageError::Format {
                line,
                reason: format!("expected 2 columns, found {}", row.len()),
            });
        }

        let name =
            Name::new(&row[0]).map_err(|source| StorageError::InvalidRecord { line, source })?;
        let phones = decode_phone_list(&row[1], line)?;
        directory.add_record(Record::new(name, phones));
    }

    debug!(contacts = directory.len(), "decoded directory");
    Ok(directory)
}

/// Write `directory` to `writer`: header first, then one row per record.
pub fn encode<W: Write>(directory: &Directory, writer: W) -> StorageResult<()> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(writer);

    writer.write_record(HEADER)?;
    for record in directory {
        let phones = encode_phone_list(record.phones());
        writer.write_record([record.name().as_str(), phones.as_str()])?;
    }

    writer.flush()?;
    debug!(contacts = directory.len(), "encoded directory");
    Ok(())
}

fn line_of(row: &StringRecord) -> usize {
    row.position().map_or(0, |pos| pos.line() as usize)
}

/// Encode `directory` into a String. See [`encode`].
pub fn encode_to_string(directory: &Directory) -> StorageResult<String> {
    let mut buffer = Vec::new();
    encode(directory, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| StorageError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Render phones as `['a', 'b']`.
pub fn encode_phone_list(phones: &[Phone]) -> String {
    let items: Vec<String> = phones
        .iter()
        .map(|phone| format!("'{}'", escape_item(phone.as_str())))
        .collect();
    format!("[{}]", items.join(", "))
}

/// Parse a phone list cell back into phones.
pub fn decode_phone_list(cell: &str, line: usize) -> StorageResult<Vec<Phone>> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(Vec::new());
    }

    let values = match parse_quoted_list(cell) {
        Some(values) => values,
        None => {
            warn!(line, cell, "phone list is not a quoted list, using legacy parsing");
            parse_legacy_list(cell)
        }
    };

    let mut phones = Vec::with_capacity(values.len());
    for value in values {
        let phone =
            Phone::new(value).map_err(|source| StorageError::InvalidRecord { line, source })?;
        if !phone.is_empty() {
            phones.push(phone);
        }
    }
    Ok(phones)
}

fn escape_item(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Parse `['a', "b"]`. Returns `None` if the cell is not exactly that shape.
fn parse_quoted_list(cell: &str) -> Option<Vec<String>> {
    let inner = cell.strip_prefix('[')?.strip_suffix(']')?;
    let mut chars = inner.chars().peekable();
    let mut values = Vec::new();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let quote = match chars.next() {
            None if values.is_empty() => return Some(values),
            Some(q @ ('\'' | '"')) => q,
            _ => return None,
        };

        let mut value = String::new();
        loop {
            match chars.next()? {
                '\\' => match chars.next()? {
                    'n' => value.push('\n'),
                    'r' => value.push('\r'),
                    't' => value.push('\t'),
                    other => value.push(other),
                },
                c if c == quote => break,
                c => value.push(c),
            }
        }
        values.push(value);

        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        match chars.next() {
            None => return Some(values),
            Some(',') => continue,
            Some(_) => return None,
        }
    }
}

fn parse_legacy_list(cell: &str) -> Vec<String> {
    LEGACY_STRIP_REGEX
        .replace_all(cell, "")
        .split(',')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phones(values: &[&str]) -> Vec<Phone> {
        values.iter().map(|v| Phone::new(*v).unwrap()).collect()
    }

    fn directory(entries: Vec<(&str, Vec<&str>)>) -> Directory {
        entries
            .into_iter()
            .map(|(name, values)| Record::new(Name::new(name).unwrap(), phones(&values)))
            .collect()
    }

    #[test]
    fn test_encode_layout() {
        let dir = directory(vec![
            ("Bob", vec!["555-9999"]),
            ("Alice", vec!["555-1234", "555-5678"]),
        ]);
        let text = encode_to_string(&dir).unwrap();
        assert_eq!(
            text,
            "Name,Phone numbers\r\n\
             Alice,\"['555-1234', '555-5678']\"\r\n\
             Bob,['555-9999']\r\n"
        );
    }

    #[test]
    fn test_decode_legacy_file() {
        let text = "Name,Phone numbers\nAlice,\"['555-1234', '555-5678']\"\nBob,['555-9999']\n";
        let dir = decode_str(text).unwrap();

        assert_eq!(dir.len(), 2);
        assert_eq!(
            dir.get("Alice").unwrap().phones(),
            phones(&["555-1234", "555-5678"]).as_slice()
        );
        assert_eq!(dir.get("Bob").unwrap().phones(), phones(&["555-9999"]).as_slice());
    }

    #[test]
    fn test_decode_empty_source_is_empty_directory() {
        assert!(decode_str("").unwrap().is_empty());
        assert!(decode_str("Name,Phone numbers\r\n").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_bad_header() {
        let err = decode_str("Who,What\nAlice,[]\n").unwrap_err();
        assert!(matches!(err, StorageError::Format { line: 1, .. }));
    }

    #[test]
    fn test_decode_rejects_wrong_column_count() {
        let err = decode_str("Name,Phone numbers\nAlice\n").unwrap_err();
        match err {
            StorageError::Format { line, reason } => {
                assert_eq!(line, 2);
                assert_eq!(reason, "expected 2 columns, found 1");
            }
            other => panic!("Expected Format error, got: {:?}", other),
        }
    }

    #[test]
    fn test_decode_rejects_empty_name() {
        let err = decode_str("Name,Phone numbers\n,\"['1']\"\n").unwrap_err();
        assert!(matches!(err, StorageError::InvalidRecord { line: 2, .. }));
    }

    #[test]
    fn test_decode_last_duplicate_row_wins() {
        let dir = decode_str("Name,Phone numbers\nAlice,\"['1']\"\nAlice,\"['2']\"\n").unwrap();
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.get("Alice").unwrap().phones(), phones(&["2"]).as_slice());
    }

    #[test]
    fn test_decode_reads_stray_quote_as_text() {
        let text = "Name,Phone numbers\nAlice, \"['555-1234']\"\nBob,\"['1']\"\n";
        let dir = decode_str(text).unwrap();

        assert_eq!(dir.len(), 2);
        assert_eq!(dir.get("Alice").unwrap().phones(), phones(&["555-1234"]).as_slice());
        assert_eq!(dir.get("Bob").unwrap().phones(), phones(&["1"]).as_slice());
    }

    #[test]
    fn test_decode_nested_brackets_from_old_files() {
        let dir = decode_str("Name,Phone numbers\nAlice,\"[[555-1234, 555-5678]]\"\n").unwrap();
        assert_eq!(
            dir.get("Alice").unwrap().phones(),
            phones(&["555-1234", "555-5678"]).as_slice()
        );
    }

    #[test]
    fn test_decode_skips_blank_lines() {
        let dir = decode_str("Name,Phone numbers\n\nAlice,[]\r\n\r\nBob,['1']\n\n").unwrap();
        assert_eq!(dir.len(), 2);
        assert_eq!(dir.get("Bob").unwrap().phones(), phones(&["1"]).as_slice());
    }

    #[test]
    fn test_decode_strips_bom() {
        let dir = decode_str("\u{feff}Name,Phone numbers\nAlice,[]\n").unwrap();
        assert!(dir.get("Alice").unwrap().phones().is_empty());
    }

    #[test]
    fn test_phone_list_empty_forms() {
        assert!(decode_phone_list("[]", 1).unwrap().is_empty());
        assert!(decode_phone_list("  ", 1).unwrap().is_empty());
        assert_eq!(encode_phone_list(&[]), "[]");
    }

    #[test]
    fn test_phone_list_drops_blank_items() {
        assert_eq!(decode_phone_list("['', '555']", 1).unwrap(), phones(&["555"]));
        assert!(decode_phone_list("['']", 1).unwrap().is_empty());
    }

    #[test]
    fn test_phone_list_escapes_awkward_values() {
        let awkward = phones(&["a,b", "[x]", "it's", "back\\slash", "\"q\""]);
        let cell = encode_phone_list(&awkward);
        assert_eq!(decode_phone_list(&cell, 1).unwrap(), awkward);
    }

    #[test]
    fn test_phone_list_accepts_double_quoted_items() {
        let decoded = decode_phone_list(r#"["it's", '555']"#, 1).unwrap();
        assert_eq!(decoded, phones(&["it's", "555"]));
    }

    #[test]
    fn test_phone_list_legacy_fallback() {
        assert_eq!(
            decode_phone_list("[555-1234, 555-5678]", 1).unwrap(),
            phones(&["555-1234", "555-5678"])
        );
        assert_eq!(
            decode_phone_list("555-1234,,555-5678", 1).unwrap(),
            phones(&["555-1234", "555-5678"])
        );
        assert_eq!(
            decode_phone_list("['555-1234', ]", 1).unwrap(),
            phones(&["555-1234"])
        );
    }
}
