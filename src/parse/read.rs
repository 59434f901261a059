// src/parse/read.rs

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use tracing::debug;

use super::normalize::{canonical_name, capture_name};
use super::types::ErrorDefinition;
use crate::error::ParseError;

/// Lazy iterator over the data rows of an error-definition table.
///
/// Rows are parsed one at a time in input order; the first error aborts the
/// parse and the iterator should be dropped. Restarting means reopening the
/// source. The underlying file handle is released when the reader is dropped.
pub struct ErrorTableReader<R: Read> {
    records: StringRecordsIntoIter<R>,
    /// 1-based row counter including the header, so data rows start at 2.
    row: u64,
}

impl<R: Read> Iterator for ErrorTableReader<R> {
    type Item = Result<ErrorDefinition, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(r) => r,
            Err(e) => return Some(Err(e.into())),
        };
        self.row += 1;
        Some(parse_record(&record, self.row))
    }
}

/// Open the CSV table at `path` and iterate its error definitions.
///
/// The table has three columns (name, codes, description) after a header
/// row, which is skipped unread. The codes column holds space-separated
/// integers and defaults to 400 when blank.
pub fn parse_errors<P: AsRef<Path>>(path: P) -> Result<ErrorTableReader<File>, ParseError> {
    let path = path.as_ref();
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    debug!("opened error table {}", path.display());

    Ok(ErrorTableReader {
        records: reader.into_records(),
        row: 1,
    })
}

/// Same as [`parse_errors`] but over any reader, for in-memory tables.
pub fn parse_errors_from<R: Read>(input: R) -> ErrorTableReader<R> {
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    ErrorTableReader {
        records: reader.into_records(),
        row: 1,
    }
}

fn parse_record(record: &StringRecord, line: u64) -> Result<ErrorDefinition, ParseError> {
    if record.len() != 3 {
        return Err(ParseError::ColumnCount { line });
    }

    let raw_name = record[0].to_string();
    let description = record[2].to_string();

    let mut codes = Vec::new();
    for token in record[1].split_whitespace() {
        match token.parse::<i32>() {
            Ok(code) => codes.push(code),
            Err(_) => return Err(ParseError::BadCodes { line }),
        }
    }
    if codes.is_empty() {
        codes.push(400);
    }

    let capture = capture_name(&raw_name, &description)?;

    Ok(ErrorDefinition {
        codes,
        canonical_name: canonical_name(&raw_name),
        raw_name,
        description,
        capture_name: capture,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "name,codes,description\n";

    fn parse_all(body: &str) -> Vec<Result<ErrorDefinition, ParseError>> {
        let input = format!("{HEADER}{body}");
        parse_errors_from(input.as_bytes()).collect()
    }

    #[test]
    fn parses_rows_in_order_from_a_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(
            file,
            "{HEADER}\
             FLOOD_WAIT_0,420,A wait of {{seconds}} seconds is required\n\
             BOT_METHOD_INVALID,400,The method can't be used by bots\n"
        )?;

        let defs = parse_errors(file.path())?.collect::<Result<Vec<_>, _>>()?;
        assert_eq!(defs.len(), 2);

        assert_eq!(defs[0].codes, vec![420]);
        assert_eq!(defs[0].raw_name, "FLOOD_WAIT_0");
        assert_eq!(defs[0].canonical_name, "floodwait");
        assert_eq!(defs[0].capture_name.as_deref(), Some("seconds"));
        assert_eq!(defs[0].int_code(), 420);

        assert_eq!(defs[1].canonical_name, "botmethodinvalid");
        assert_eq!(defs[1].capture_name, None);
        Ok(())
    }

    #[test]
    fn quoted_commas_stay_in_the_description() {
        let defs = parse_all("PHONE_MIGRATE_X,303,\"The phone number, once checked, belongs elsewhere\"\n");
        let def = defs[0].as_ref().unwrap();
        assert_eq!(def.description, "The phone number, once checked, belongs elsewhere");
        assert_eq!(def.codes, vec![303]);
    }

    #[test]
    fn unquoted_comma_fails_with_the_right_line() {
        let defs = parse_all(
            "FIRST_VALID,400,fine\n\
             BAD_ROW,400,oops, an unquoted comma\n",
        );
        assert!(defs[0].is_ok());
        let err = defs[1].as_ref().unwrap_err();
        assert!(matches!(err, ParseError::ColumnCount { line: 3 }));
    }

    #[test]
    fn missing_column_fails_too() {
        let defs = parse_all("ONLY_TWO,400\n");
        assert!(matches!(
            defs[0].as_ref().unwrap_err(),
            ParseError::ColumnCount { line: 2 }
        ));
    }

    #[test]
    fn non_integer_code_fails_with_the_right_line() {
        let defs = parse_all("NAME,abc,desc\n");
        assert!(matches!(
            defs[0].as_ref().unwrap_err(),
            ParseError::BadCodes { line: 2 }
        ));
    }

    #[test]
    fn empty_codes_default_to_400() {
        let defs = parse_all("SOMETHING_ODD,  ,no code given\n");
        assert_eq!(defs[0].as_ref().unwrap().codes, vec![400]);
    }

    #[test]
    fn multiple_codes_are_kept_in_order() {
        let defs = parse_all("USER_MIGRATE_X,303 400,moved\n");
        assert_eq!(defs[0].as_ref().unwrap().codes, vec![303, 400]);
    }

    #[test]
    fn parameterized_row_without_placeholder_fails() {
        let defs = parse_all("FILE_PART_0_MISSING,400,The part is missing\n");
        assert!(matches!(
            defs[0].as_ref().unwrap_err(),
            ParseError::NoPlaceholder { .. }
        ));
    }

    #[test]
    fn canonical_names_are_normalized_for_every_valid_row() {
        let defs = parse_all(
            "FLOOD_WAIT_X,420,A wait of {seconds} seconds is required\n\
             SESSION_PASSWORD_NEEDED,401,2FA is enabled\n\
             TIMEOUT_ERROR,503,A timeout occurred\n",
        );
        for def in defs {
            let name = def.unwrap().canonical_name;
            assert_eq!(name, name.to_lowercase());
            assert!(!name.contains(['-', '_']));
            assert!(!name.contains(|c: char| c.is_ascii_digit()));
            assert!(!name.ends_with("error"));
        }
    }

    #[test]
    fn header_row_is_never_parsed() {
        // A header that would itself be an invalid row must not error.
        let input = "this header,is not,a valid row at all\n";
        let defs: Vec<_> = parse_errors_from(input.as_bytes()).collect();
        assert!(defs.is_empty());
    }
}
