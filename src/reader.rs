//! File-reading conveniences over [`FixedWidthParser`].
//!
//! Parsing itself is pure; these helpers own the I/O concern of getting
//! lines out of a file. File handles are opened and closed per call so
//! nothing leaks on error paths.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{ConfigError, ParseError};
use crate::parser::FixedWidthParser;

impl FixedWidthParser {
    /// Parse every line of a text file, in file order.
    ///
    /// Each line is parsed with [`parse_line`](Self::parse_line); the
    /// per-line leniency rules apply unchanged, so short lines and
    /// (in table mode) unclassified lines never fail the whole file.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Vec<Vec<String>>, ParseError> {
        let reader = BufReader::new(File::open(path)?);
        let mut rows = Vec::new();
        for line in reader.lines() {
            rows.push(self.parse_line(&line?));
        }
        Ok(rows)
    }

    /// Parse a file of back-to-back fixed-length records with no line
    /// separators (a single-line feed).
    ///
    /// The file is split into consecutive `record_len`-byte records and
    /// each complete record is parsed. A trailing partial record is
    /// discarded. `record_len` of zero is a configuration error.
    pub fn parse_chunked_file(
        &self,
        path: impl AsRef<Path>,
        record_len: usize,
    ) -> Result<Vec<Vec<String>>, ParseError> {
        if record_len == 0 {
            return Err(ConfigError::ZeroChunkLength.into());
        }

        let bytes = fs::read(path)?;
        Ok(bytes
            .chunks_exact(record_len)
            .map(|record| self.parse_record(record))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_file_in_order() {
        let file = write_temp(b"SMITH   00050000\nJONES   00075000\n");
        let parser = FixedWidthParser::new(&[8, 8]).unwrap();
        let rows = parser.parse_file(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["SMITH", "00050000"]);
        assert_eq!(rows[1], vec!["JONES", "00075000"]);
    }

    #[test]
    fn test_parse_file_tolerates_ragged_lines() {
        let file = write_temp(b"AAAABBBBCCCC\nAAAABBB\n");
        let parser = FixedWidthParser::new(&[4, 4, 4]).unwrap();
        let rows = parser.parse_file(file.path()).unwrap();
        assert_eq!(rows[0], vec!["AAAA", "BBBB", "CCCC"]);
        assert_eq!(rows[1], vec!["AAAA", "BBB"]);
    }

    #[test]
    fn test_parse_file_missing_path_is_io_error() {
        let parser = FixedWidthParser::new(&[4]).unwrap();
        let result = parser.parse_file("/nonexistent/input.data");
        assert!(matches!(result, Err(ParseError::Io(_))));
    }

    #[test]
    fn test_chunked_file_splits_records() {
        // Three 8-byte records, no separators.
        let file = write_temp(b"AAAABBBBCCCCDDDDEEEEFFFF");
        let parser = FixedWidthParser::new(&[4, 4]).unwrap();
        let rows = parser.parse_chunked_file(file.path(), 8).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["AAAA", "BBBB"]);
        assert_eq!(rows[2], vec!["EEEE", "FFFF"]);
    }

    #[test]
    fn test_chunked_file_drops_trailing_partial_record() {
        let file = write_temp(b"AAAABBBBCC");
        let parser = FixedWidthParser::new(&[4, 4]).unwrap();
        let rows = parser.parse_chunked_file(file.path(), 8).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_chunked_file_zero_record_len_rejected() {
        let file = write_temp(b"AAAA");
        let parser = FixedWidthParser::new(&[4]).unwrap();
        let result = parser.parse_chunked_file(file.path(), 0);
        assert!(matches!(
            result,
            Err(ParseError::Config(ConfigError::ZeroChunkLength))
        ));
    }
}
