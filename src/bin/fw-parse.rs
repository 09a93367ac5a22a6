//! CLI tool to run a fixed-width schema against a data file.
//!
//! Layout comes from either `--widths` (one schema for every record) or
//! `--schema` (a table file for multi-layout feeds). Schema table format:
//!
//! ```text
//! # record type code -> field widths (negative = skip)
//! HDR = 3, 8
//! DTL = 3, -1, 10, 8
//! ```
//!
//! Each input line is parsed into fields and written joined by the
//! delimiter. Lines that parse to no fields (a line matching no prefix
//! in schema-table mode, or a layout that keeps no columns) are omitted
//! from the output.

use clap::Parser;
use fixedwidth_rs::{FixedWidthParser, SchemaTable};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;

/// Parse a fixed-width data file into delimited fields.
#[derive(Parser)]
#[command(name = "fw-parse")]
struct Cli {
    /// Input data file (fixed-width records, or /dev/stdin)
    input: String,

    /// Comma-separated signed field widths, e.g. "8,-2,10"
    #[arg(short, long, conflicts_with = "schema")]
    widths: Option<String>,

    /// Schema table file: one "PREFIX = widths" entry per line
    #[arg(short, long)]
    schema: Option<String>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// String placed between fields in the output
    #[arg(short, long, default_value = "\t")]
    delimiter: String,

    /// Show paths and record counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let parser = match (&cli.widths, &cli.schema) {
        (Some(widths), None) => {
            let widths = match parse_widths(widths) {
                Ok(w) => w,
                Err(e) => {
                    eprintln!("Error in --widths: {e}");
                    process::exit(1);
                }
            };
            match FixedWidthParser::new(&widths) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Error in --widths: {e}");
                    process::exit(1);
                }
            }
        }
        (None, Some(schema_path)) => {
            let schema_text = match fs::read_to_string(schema_path) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error reading schema file '{schema_path}': {e}");
                    process::exit(1);
                }
            };
            match parse_schema_file(&schema_text) {
                Ok(table) => FixedWidthParser::with_schemas(table),
                Err(e) => {
                    eprintln!("Error in schema file '{schema_path}': {e}");
                    process::exit(1);
                }
            }
        }
        _ => {
            eprintln!("Error: exactly one of --widths or --schema is required");
            process::exit(1);
        }
    };

    let input_text = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading input file '{}': {e}", cli.input);
            process::exit(1);
        }
    };

    if cli.verbose {
        eprintln!("Input:  {}", cli.input);
        eprintln!("Output: {}", cli.output.as_deref().unwrap_or("(stdout)"));
        if let Some(schema) = &cli.schema {
            eprintln!("Schema: {schema}");
        }
    }

    let (input_count, output_count, output) = render_rows(&parser, &input_text, &cli.delimiter);

    if let Some(out_path) = &cli.output {
        if let Some(parent) = Path::new(out_path.as_str()).parent()
            && !parent.as_os_str().is_empty()
            && fs::create_dir_all(parent).is_err()
        {
            eprintln!("Error creating output directory for '{out_path}'");
            process::exit(1);
        }
        if let Err(e) = fs::write(out_path, &output) {
            eprintln!("Error writing output file '{out_path}': {e}");
            process::exit(1);
        }
        eprintln!("Parsed {input_count} -> {output_count} records, output: {out_path}");
    } else {
        if let Err(e) = io::stdout().write_all(output.as_bytes()) {
            eprintln!("Error writing output: {e}");
            process::exit(1);
        }
        if !output.is_empty() && !output.ends_with('\n') {
            println!();
        }
        eprintln!("Parsed {input_count} -> {output_count} records");
    }
}

/// Parse each input line and join its fields with the delimiter.
///
/// Rows that parse to no fields are omitted, whichever mode produced
/// them: an unclassified line in schema-table mode, or a layout that
/// keeps no columns. Returns `(input_count, output_count, output_text)`.
fn render_rows(parser: &FixedWidthParser, input_text: &str, delimiter: &str) -> (usize, usize, String) {
    let mut input_count = 0usize;
    let mut rows = Vec::new();
    for line in input_text.lines() {
        input_count += 1;
        let fields = parser.parse_line(line);
        if !fields.is_empty() {
            rows.push(fields.join(delimiter));
        }
    }

    let output_count = rows.len();
    (input_count, output_count, rows.join("\n"))
}

/// Parse a comma-separated signed width list, e.g. "8, -2, 10".
fn parse_widths(text: &str) -> Result<Vec<i64>, String> {
    text.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<i64>()
                .map_err(|_| format!("invalid field width '{part}'"))
        })
        .collect()
}

/// Parse a schema table file into prefix -> widths entries.
///
/// One "PREFIX = widths" entry per line; blank lines and lines starting
/// with `#` are skipped. Entry order in the file is the prefix match
/// order.
fn parse_schema_file(text: &str) -> Result<SchemaTable, String> {
    let mut pairs: Vec<(String, Vec<i64>)> = Vec::new();

    for (line_num, line) in text.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (key, widths) = line
            .split_once('=')
            .ok_or_else(|| format!("Line {}: expected 'PREFIX = widths'", line_num + 1))?;

        let key = key.trim();
        if key.is_empty() {
            return Err(format!("Line {}: empty prefix", line_num + 1));
        }

        let widths =
            parse_widths(widths).map_err(|e| format!("Line {}: {e}", line_num + 1))?;
        pairs.push((key.to_string(), widths));
    }

    SchemaTable::from_pairs(pairs).map_err(|e| e.to_string())
}
