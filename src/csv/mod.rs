//! CSV scanning, coercion and record projection

mod cursor;
mod options;
mod parser;
mod records;
mod scalar;

pub use options::CsvOptions;
pub use records::build_records;
pub use scalar::coerce;

pub(crate) use parser::Tokenizer;
