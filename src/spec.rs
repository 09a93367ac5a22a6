//! Validated field width schemas.
//!
//! A schema is an ordered list of non-zero integers. A positive width `n`
//! keeps the next `n` bytes as a field; a negative width `-n` skips `n`
//! bytes of padding. The schema is validated and frozen at construction:
//! per-line adjustments (trimming for short lines) always work on a local
//! segment list, never on the stored schema.

use crate::error::ConfigError;

/// One column range of a record: its byte width and whether it is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Segment {
    pub width: usize,
    pub keep: bool,
}

/// An immutable, validated fixed-width field schema.
///
/// Precomputes the keep/skip segment list and the total expected line
/// length (sum of absolute widths) so that `parse_line` can slice lines
/// without re-walking the raw width list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidthSpec {
    segments: Vec<Segment>,
    total_width: usize,
}

impl WidthSpec {
    /// Build a schema from signed field widths.
    ///
    /// Rejects an empty list and any zero entry with a `ConfigError`.
    ///
    /// # Example
    /// ```
    /// use fixedwidth_rs::WidthSpec;
    ///
    /// // Keep 8 bytes, skip 2, keep 10.
    /// let spec = WidthSpec::new(&[8, -2, 10]).unwrap();
    /// assert_eq!(spec.total_width(), 20);
    /// ```
    pub fn new(widths: &[i64]) -> Result<Self, ConfigError> {
        if widths.is_empty() {
            return Err(ConfigError::EmptySpec);
        }

        let mut segments = Vec::with_capacity(widths.len());
        let mut total_width = 0usize;

        for (index, &w) in widths.iter().enumerate() {
            if w == 0 {
                return Err(ConfigError::ZeroWidth { index });
            }
            let width = w.unsigned_abs() as usize;
            segments.push(Segment { width, keep: w > 0 });
            total_width += width;
        }

        Ok(Self {
            segments,
            total_width,
        })
    }

    /// Total line length this schema expects (sum of absolute widths).
    pub fn total_width(&self) -> usize {
        self.total_width
    }

    /// Number of retained (positive-width) fields in the full schema.
    pub fn field_count(&self) -> usize {
        self.segments.iter().filter(|s| s.keep).count()
    }

    /// Slice a raw record into decoded, trimmed field strings.
    ///
    /// Records at least `total_width` bytes long are sliced with the
    /// precomputed segments; trailing bytes past the total are dropped.
    /// Shorter records get a trimmed local copy of the segment list via
    /// [`trimmed_to`](Self::trimmed_to).
    pub(crate) fn unpack(&self, raw: &[u8]) -> Vec<String> {
        if raw.len() >= self.total_width {
            slice_fields(&self.segments, raw)
        } else {
            slice_fields(&self.trimmed_to(raw.len()), raw)
        }
    }

    /// Build a segment list fitted to a record of `len` bytes.
    ///
    /// Drops trailing segments while the remaining total exceeds `len`;
    /// if the remaining total then falls short of `len`, appends one
    /// synthetic kept segment covering the difference. Always returns a
    /// fresh list; the stored schema is never mutated.
    fn trimmed_to(&self, len: usize) -> Vec<Segment> {
        let mut segments = self.segments.clone();
        let mut total = self.total_width;

        while total > len {
            match segments.pop() {
                Some(seg) => total -= seg.width,
                None => break,
            }
        }

        if total < len {
            segments.push(Segment {
                width: len - total,
                keep: true,
            });
        }

        segments
    }
}

/// Walk segments over a record, decoding each kept slice as Latin-1 and
/// trimming surrounding whitespace.
fn slice_fields(segments: &[Segment], raw: &[u8]) -> Vec<String> {
    let mut fields = Vec::new();
    let mut offset = 0;

    for seg in segments {
        let slice = &raw[offset..offset + seg.width];
        offset += seg.width;
        if seg.keep {
            fields.push(decode_latin1(slice).trim().to_string());
        }
    }

    fields
}

/// Decode bytes as Latin-1 text. Every byte maps to the code point of the
/// same value, so decoding cannot fail.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
