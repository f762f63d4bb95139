//! CSV parser with cached table and record views

use crate::csv::{build_records, CsvOptions, Tokenizer};
use crate::error::{CsvError, Result};
use crate::types::{Record, Row};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, trace};

/// Parse a document into rows of typed cells
///
/// Runs one uncached parse. Use [`CsvParser`] to reuse results across calls.
pub fn parse_table(data: &str, options: &CsvOptions) -> Result<Vec<Row>> {
    Tokenizer::new(data, *options).read_table()
}

/// Parse a document into records keyed by its first row
pub fn parse_records(data: &str, options: &CsvOptions) -> Result<Vec<Record>> {
    let table = parse_table(data, options)?;
    Ok(build_records(&table))
}

/// Derived view tagged with the configuration version it was built from
struct Cached<T: ?Sized> {
    version: u64,
    value: Arc<T>,
}

/// CSV parser holding a document and its configuration
///
/// The table and record views are computed on first access and kept until
/// the document or any option changes. Accessors hand out shared snapshots,
/// so earlier results stay valid after the parser is reconfigured.
///
/// # Examples
///
/// ```
/// use csvgrid::{CellValue, CsvParser};
///
/// let mut parser = CsvParser::new("one,two,three\n1,2,3");
///
/// let table = parser.to_table()?;
/// assert_eq!(table.len(), 2);
///
/// let records = parser.to_records()?;
/// assert_eq!(records[0]["two"], CellValue::Number(2.0));
/// # Ok::<(), csvgrid::CsvError>(())
/// ```
///
/// # Reconfiguring
///
/// ```
/// use csvgrid::CsvParser;
///
/// let mut parser = CsvParser::default();
/// parser
///     .set_data("one\ttwo\n1\t2")
///     .set_delimiter('\t')
///     .set_qualifier("'")?;
///
/// assert_eq!(parser.to_table()?[0].len(), 2);
/// # Ok::<(), csvgrid::CsvError>(())
/// ```
pub struct CsvParser {
    data: String,
    options: CsvOptions,
    version: u64,
    table: Option<Cached<[Row]>>,
    records: Option<Cached<[Record]>>,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::with_options("", CsvOptions::default())
    }
}

impl CsvParser {
    /// Create a parser over `data` with default options
    pub fn new(data: impl Into<String>) -> Self {
        Self::with_options(data, CsvOptions::default())
    }

    /// Create a parser over `data` with custom options
    pub fn with_options(data: impl Into<String>, options: CsvOptions) -> Self {
        CsvParser {
            data: data.into(),
            options,
            version: 0,
            table: None,
            records: None,
        }
    }

    /// Read a whole UTF-8 file as the document, with default options
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use csvgrid::CsvParser;
    ///
    /// let mut parser = CsvParser::open("data.csv")?;
    /// for record in parser.to_records()?.iter() {
    ///     println!("{:?}", record);
    /// }
    /// # Ok::<(), csvgrid::CsvError>(())
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, CsvOptions::default())
    }

    /// Read a whole UTF-8 file as the document, with custom options
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: CsvOptions) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = data.len(), "loaded CSV document");
        Ok(Self::with_options(data, options))
    }

    /// Get the current document
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Replace the document
    pub fn set_data(&mut self, data: impl Into<String>) -> &mut Self {
        self.data = data.into();
        self.invalidate();
        self
    }

    /// Get the current options
    pub fn options(&self) -> &CsvOptions {
        &self.options
    }

    /// Replace all options at once
    pub fn set_options(&mut self, options: CsvOptions) -> &mut Self {
        self.options = options;
        self.invalidate();
        self
    }

    /// Get the current delimiter (defaults to `,`)
    pub fn delimiter(&self) -> char {
        self.options.delimiter
    }

    pub fn set_delimiter(&mut self, delimiter: char) -> &mut Self {
        self.options.delimiter = delimiter;
        self.invalidate();
        self
    }

    /// Get the current qualifier (defaults to `"`)
    pub fn qualifier(&self) -> char {
        self.options.qualifier
    }

    /// Set the qualifier
    ///
    /// Fails with [`CsvError::InvalidQualifier`] unless `qualifier` is exactly
    /// one character. The parser is left untouched on failure.
    pub fn set_qualifier(&mut self, qualifier: &str) -> Result<&mut Self> {
        let mut chars = qualifier.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return Err(CsvError::InvalidQualifier {
                qualifier: qualifier.to_string(),
            });
        };

        self.options.qualifier = ch;
        self.invalidate();
        Ok(self)
    }

    pub fn strict(&self) -> bool {
        self.options.strict
    }

    pub fn set_strict(&mut self, strict: bool) -> &mut Self {
        self.options.strict = strict;
        self.invalidate();
        self
    }

    pub fn trim(&self) -> bool {
        self.options.trim
    }

    pub fn set_trim(&mut self, trim: bool) -> &mut Self {
        self.options.trim = trim;
        self.invalidate();
        self
    }

    /// Get the document as rows of typed cells
    ///
    /// In strict mode a row wider than the first row fails with
    /// [`CsvError::MalformedData`]; nothing is cached in that case.
    pub fn to_table(&mut self) -> Result<Arc<[Row]>> {
        if let Some(cached) = self.table.as_ref().filter(|c| c.version == self.version) {
            trace!(version = self.version, "table cache hit");
            return Ok(Arc::clone(&cached.value));
        }

        let rows: Arc<[Row]> = parse_table(&self.data, &self.options)?.into();
        debug!(rows = rows.len(), version = self.version, "parsed table");

        self.table = Some(Cached {
            version: self.version,
            value: Arc::clone(&rows),
        });
        Ok(rows)
    }

    /// Get every data row keyed by the header row
    pub fn to_records(&mut self) -> Result<Arc<[Record]>> {
        if let Some(cached) = self.records.as_ref().filter(|c| c.version == self.version) {
            trace!(version = self.version, "records cache hit");
            return Ok(Arc::clone(&cached.value));
        }

        let table = self.to_table()?;
        let records: Arc<[Record]> = build_records(&table).into();
        debug!(records = records.len(), version = self.version, "built records");

        self.records = Some(Cached {
            version: self.version,
            value: Arc::clone(&records),
        });
        Ok(records)
    }

    fn invalidate(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}
