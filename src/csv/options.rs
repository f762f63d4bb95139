//! Parser configuration

/// Options controlling how a document is split into cells and rows
///
/// # Examples
///
/// ```
/// use csvgrid::CsvOptions;
///
/// let options = CsvOptions::default()
///     .delimiter('\t')
///     .qualifier('\'')
///     .strict(false);
///
/// assert_eq!(options.delimiter, '\t');
/// assert!(options.trim);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Separates cells within a row (default: `,`)
    pub delimiter: char,
    /// Quotes cells containing delimiters, newlines or qualifiers (default: `"`)
    pub qualifier: char,
    /// Require every row to match the header row's width (default: true)
    pub strict: bool,
    /// Strip surrounding whitespace from each cell (default: true)
    pub trim: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        CsvOptions {
            delimiter: ',',
            qualifier: '"',
            strict: true,
            trim: true,
        }
    }
}

impl CsvOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter (builder pattern)
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set custom qualifier (builder pattern)
    pub fn qualifier(mut self, qualifier: char) -> Self {
        self.qualifier = qualifier;
        self
    }

    /// Enable or disable strict row width (builder pattern)
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Enable or disable whitespace trimming (builder pattern)
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}
