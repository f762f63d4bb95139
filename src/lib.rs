//! # csvgrid
//!
//! Parse delimited text (CSV, TSV and friends) into a grid of typed cells
//! or into records keyed by the header row.
//!
//! Cells are coerced from their text: JSON number literals become
//! [`CellValue::Number`], `true`/`false` become [`CellValue::Bool`], `null`
//! becomes [`CellValue::Null`] and everything else stays a string.
//!
//! ## Quick start
//!
//! ```
//! use csvgrid::{CellValue, CsvParser};
//!
//! let mut parser = CsvParser::new("name,age\nAlice,30\nBob,");
//!
//! let table = parser.to_table()?;
//! assert_eq!(table[1], vec![CellValue::from("Alice"), CellValue::Number(30.0)]);
//!
//! let records = parser.to_records()?;
//! assert_eq!(records[1].get("age"), None); // empty cells are left out
//! # Ok::<(), csvgrid::CsvError>(())
//! ```
//!
//! ## Strict and lenient rows
//!
//! In strict mode (the default) short rows are padded with empty strings and
//! rows wider than the header fail with [`CsvError::MalformedData`]. Lenient
//! mode keeps every row as it was read.
//!
//! ```
//! use csvgrid::{CsvOptions, CsvParser};
//!
//! let options = CsvOptions::default().strict(false);
//! let mut parser = CsvParser::with_options("a,b\n1,2,3", options);
//! assert_eq!(parser.to_table()?[1].len(), 3);
//! # Ok::<(), csvgrid::CsvError>(())
//! ```

pub mod csv;
pub mod csv_parser;
pub mod detect;
pub mod error;
pub mod types;

pub use csv::CsvOptions;
pub use csv_parser::{parse_records, parse_table, CsvParser};
pub use detect::detect_delimiter;
pub use error::{CsvError, Result};
pub use types::{CellValue, Record, Row};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
