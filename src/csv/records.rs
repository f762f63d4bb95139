//! Header-keyed record projection

use crate::types::{CellValue, Record, Row};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Zip every data row against the first row of `table`
///
/// Empty-string cells and cells past the header width are left out.
pub fn build_records(table: &[Row]) -> Vec<Record> {
    let Some((header, data)) = table.split_first() else {
        return Vec::new();
    };

    let keys: Vec<String> = header.iter().map(CellValue::as_string).collect();

    #[cfg(feature = "parallel")]
    let records: Vec<Record> = data.par_iter().map(|row| build_record(&keys, row)).collect();

    #[cfg(not(feature = "parallel"))]
    let records: Vec<Record> = data.iter().map(|row| build_record(&keys, row)).collect();

    records
}

fn build_record(keys: &[String], row: &[CellValue]) -> Record {
    let mut record = Record::with_capacity(keys.len());

    for (key, value) in keys.iter().zip(row) {
        if !value.is_empty_string() {
            record.insert(key.clone(), value.clone());
        }
    }

    record
}
