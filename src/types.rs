//! Type definitions for parsed CSV data

use indexmap::IndexMap;
use std::fmt;

/// Largest magnitude at which every integer is exactly representable in an f64
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Represents a single typed cell produced by scalar coercion
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Numeric literal (`42`, `-3.5`, `1e3`)
    Number(f64),
    /// `true` or `false`
    Bool(bool),
    /// `null`
    Null,
    /// Anything else, including the empty string
    String(String),
}

impl CellValue {
    /// Empty string cell, used for padding and blank cells
    pub fn empty() -> Self {
        CellValue::String(String::new())
    }

    /// Convert cell value to string
    ///
    /// Integral numbers print without a fractional part, so a header cell
    /// holding `1` becomes the key `"1"`.
    pub fn as_string(&self) -> String {
        match self {
            CellValue::Number(n) => format_number(*n),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Null => "null".to_string(),
            CellValue::String(s) => s.clone(),
        }
    }

    /// Check if cell is the empty string
    pub fn is_empty_string(&self) -> bool {
        matches!(self, CellValue::String(s) if s.is_empty())
    }

    /// Check if cell is null
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Try to convert to float
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to convert to boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrow the text of a string cell
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        let mut buf = itoa::Buffer::new();
        buf.format(n as i64).to_string()
    } else {
        n.to_string()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Number(f)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Number(i as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CellValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Number(n) => serializer.serialize_f64(*n),
            CellValue::Bool(b) => serializer.serialize_bool(*b),
            CellValue::Null => serializer.serialize_unit(),
            CellValue::String(s) => serializer.serialize_str(s),
        }
    }
}

/// One row of cells, in column order
pub type Row = Vec<CellValue>;

/// One data row keyed by the header row, in header order
pub type Record = IndexMap<String, CellValue>;
