//! # fixedwidth-rs
//!
//! A fixed-width text record field parsing library.
//!
//! Fixed-width feeds carry their layout out of band: each record is a run
//! of fixed-length columns, with padding between fields and no delimiters.
//! This library splits such records into trimmed field strings given a
//! column-width schema, and supports the ragged realities of legacy feeds:
//!
//! - **Signed widths**: a positive width keeps a column, a negative width
//!   skips padding
//! - **Prefix-selected schemas**: multi-layout feeds pick a schema per
//!   record by matching a literal line prefix
//! - **Short-line trimming**: truncated records shrink the schema to fit
//!   instead of erroring
//! - **Latin-1 decoding**: every byte value maps to a character, so raw
//!   legacy bytes always decode
//!
//! ## Example
//!
//! ```
//! use fixedwidth_rs::FixedWidthParser;
//!
//! // Record layout: Last(8) First(10) Dept(10) Salary(8)
//! let parser = FixedWidthParser::new(&[8, 10, -10, 8]).unwrap();
//!
//! let fields = parser.parse_line("SMITH   JOHN      SALES     00050000");
//! assert_eq!(fields, vec!["SMITH", "JOHN", "00050000"]);
//! ```

pub mod error;
pub mod parser;
pub mod reader;
pub mod schema;
pub mod spec;

pub use error::{ConfigError, ParseError};
pub use parser::FixedWidthParser;
pub use schema::SchemaTable;
pub use spec::WidthSpec;
