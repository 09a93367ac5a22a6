//! The fixed-width line parser.
//!
//! A `FixedWidthParser` holds either one schema (every line uses the same
//! layout) or a [`SchemaTable`] (the layout is picked per line by prefix
//! match). Parsing is a pure transformation over the frozen schema state:
//! a line in, a `Vec<String>` of trimmed fields out, with short lines
//! accommodated by schema trimming rather than errors.

use crate::error::ConfigError;
use crate::schema::SchemaTable;
use crate::spec::WidthSpec;

#[derive(Debug, Clone)]
enum Mode {
    Single(WidthSpec),
    Table(SchemaTable),
}

/// Parses lines of text into fields by a fixed column-width schema.
///
/// # Example
/// ```
/// use fixedwidth_rs::FixedWidthParser;
///
/// // Record layout: Last(8) First(10) Dept(10) Salary(8)
/// let parser = FixedWidthParser::new(&[8, 10, 10, 8]).unwrap();
/// let fields = parser.parse_line("SMITH   JOHN      SALES     00050000");
/// assert_eq!(fields, vec!["SMITH", "JOHN", "SALES", "00050000"]);
/// ```
#[derive(Debug, Clone)]
pub struct FixedWidthParser {
    mode: Mode,
}

impl FixedWidthParser {
    /// Build a single-schema parser from signed field widths.
    ///
    /// Positive widths are kept as fields, negative widths are skipped
    /// padding. Fails with a `ConfigError` on an empty or zero-bearing
    /// width list.
    pub fn new(widths: &[i64]) -> Result<Self, ConfigError> {
        Ok(Self {
            mode: Mode::Single(WidthSpec::new(widths)?),
        })
    }

    /// Build a table-mode parser: each line's schema is selected by the
    /// first table key that is a prefix of the line.
    pub fn with_schemas(table: SchemaTable) -> Self {
        Self {
            mode: Mode::Table(table),
        }
    }

    /// Parse one line into trimmed, Latin-1 decoded field strings.
    ///
    /// In table mode a line matching no key returns an empty `Vec` - a
    /// "could not classify" signal, not an error. Note the inherited
    /// ambiguity: a matched schema whose widths are all negative also
    /// yields an empty `Vec`, indistinguishable from no-match.
    ///
    /// Lines longer than the schema's total width have their trailing
    /// characters dropped; shorter lines are handled by trimming the
    /// schema to fit (see [`WidthSpec`]). Neither case errors.
    ///
    /// Widths count characters, not UTF-8 bytes: the line is encoded to
    /// Latin-1 (one byte per character) before unpacking, so `"é"`
    /// occupies one column. Characters outside the Latin-1 range become
    /// `?`, since a fixed-width column cannot hold a multi-byte
    /// substitute.
    pub fn parse_line(&self, line: &str) -> Vec<String> {
        if line.is_ascii() {
            return self.parse_record(line.as_bytes());
        }
        self.parse_record(&encode_latin1(line))
    }

    /// Parse one raw record. Byte-oriented twin of [`parse_line`]; the
    /// bytes are interpreted as Latin-1, so any byte sequence is valid.
    ///
    /// [`parse_line`]: Self::parse_line
    pub fn parse_record(&self, raw: &[u8]) -> Vec<String> {
        match &self.mode {
            Mode::Single(spec) => spec.unpack(raw),
            Mode::Table(table) => match table.select(raw) {
                Some(spec) => spec.unpack(raw),
                None => Vec::new(),
            },
        }
    }

    /// Parse each line of an iterable, preserving input order.
    pub fn parse_lines<I, S>(&self, lines: I) -> Vec<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .map(|line| self.parse_line(line.as_ref()))
            .collect()
    }
}

/// Encode text as Latin-1, one byte per character. Characters above
/// U+00FF are replaced with `?`.
fn encode_latin1(line: &str) -> Vec<u8> {
    line.chars()
        .map(|c| if (c as u32) <= 0xFF { c as u8 } else { b'?' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keep_skip_keep() {
        let parser = FixedWidthParser::new(&[1, -1, 1]).unwrap();
        assert_eq!(parser.parse_line("AxB"), vec!["A", "B"]);
    }

    #[test]
    fn test_exact_length_field_count() {
        let parser = FixedWidthParser::new(&[3, -2, 4]).unwrap();
        let fields = parser.parse_line("abcXYdefg");
        assert_eq!(fields, vec!["abc", "defg"]);
        // One string per positive width, each no longer than its column.
        assert!(fields[0].len() <= 3);
        assert!(fields[1].len() <= 4);
    }

    #[test]
    fn test_construction_rejects_bad_widths() {
        assert!(FixedWidthParser::new(&[]).is_err());
        assert!(FixedWidthParser::new(&[3, 0]).is_err());
    }

    #[test]
    fn test_short_line_degrades_without_error() {
        let parser = FixedWidthParser::new(&[4, 4, 4]).unwrap();
        let fields = parser.parse_line("abcdefg");
        assert_eq!(fields, vec!["abcd", "efg"]);
    }

    #[test]
    fn test_table_mode_no_match_returns_empty() {
        let table = SchemaTable::from_pairs([("AB", vec![2, 3]), ("CD", vec![1, 4])]).unwrap();
        let parser = FixedWidthParser::with_schemas(table);
        assert!(parser.parse_line("XYtest").is_empty());
    }

    #[test]
    fn test_table_mode_selects_matching_schema() {
        let table = SchemaTable::from_pairs([("AB", vec![2, 3]), ("CD", vec![1, 4])]).unwrap();
        let parser = FixedWidthParser::with_schemas(table);
        assert_eq!(parser.parse_line("ABxyz"), vec!["AB", "xyz"]);
        assert_eq!(parser.parse_line("CDxyz"), vec!["C", "Dxyz"]);
    }

    #[test]
    fn test_table_mode_first_match_tie_break() {
        // "HDR" and "H" both prefix-match "HDR2024"; insertion order wins.
        let table = SchemaTable::from_pairs([("HDR", vec![3, 4]), ("H", vec![1, 6])]).unwrap();
        let parser = FixedWidthParser::with_schemas(table);
        assert_eq!(parser.parse_line("HDR2024"), vec!["HDR", "2024"]);
    }

    #[test]
    fn test_parse_line_is_idempotent() {
        let parser = FixedWidthParser::new(&[4, 4, 4]).unwrap();
        let first = parser.parse_line("abcdefg");
        let second = parser.parse_line("abcdefg");
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_lines_preserves_order() {
        let parser = FixedWidthParser::new(&[2, 2]).unwrap();
        let rows = parser.parse_lines(["AABB", "CCDD", "EEFF"]);
        assert_eq!(
            rows,
            vec![
                vec!["AA".to_string(), "BB".to_string()],
                vec!["CC".to_string(), "DD".to_string()],
                vec!["EE".to_string(), "FF".to_string()],
            ]
        );
    }

    #[test]
    fn test_parse_line_counts_latin1_chars_not_utf8_bytes() {
        // "é" is two bytes in UTF-8 but one Latin-1 column.
        let parser = FixedWidthParser::new(&[4]).unwrap();
        assert_eq!(parser.parse_line("café"), vec!["café"]);

        let parser = FixedWidthParser::new(&[1, -1, 1]).unwrap();
        assert_eq!(parser.parse_line("éxB"), vec!["é", "B"]);
    }

    #[test]
    fn test_parse_line_short_line_counts_chars() {
        // 7 characters against [4, 4, 4]: same trim as the ASCII case,
        // regardless of UTF-8 byte length.
        let parser = FixedWidthParser::new(&[4, 4, 4]).unwrap();
        assert_eq!(parser.parse_line("ébcdefg"), vec!["ébcd", "efg"]);
    }

    #[test]
    fn test_parse_line_replaces_non_latin1_chars() {
        let parser = FixedWidthParser::new(&[2, 2]).unwrap();
        assert_eq!(parser.parse_line("A\u{20ac}BC"), vec!["A?", "BC"]);
    }

    #[test]
    fn test_parse_record_accepts_any_bytes() {
        let parser = FixedWidthParser::new(&[2, 2]).unwrap();
        let fields = parser.parse_record(&[0xFF, 0xFE, 0x41, 0x42]);
        assert_eq!(fields, vec!["\u{ff}\u{fe}", "AB"]);
    }

    #[test]
    fn test_shared_parser_across_threads() {
        let parser = FixedWidthParser::new(&[4, 4, 4]).unwrap();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| parser.parse_line("abcdefg")))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), vec!["abcd", "efg"]);
            }
        });
    }
}
