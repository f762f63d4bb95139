//! Guess the delimiter of a file and print its records
//!
//! Usage: cargo run --example detect_delimiter -- data.csv

use csvgrid::{detect_delimiter, CsvOptions, CsvParser};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::args()
        .nth(1)
        .ok_or("usage: detect_delimiter <file>")?;

    let data = std::fs::read_to_string(&path)?;
    let delimiter = detect_delimiter(&data, '"');
    println!("Detected delimiter: {:?}", delimiter);

    let mut parser = CsvParser::with_options(data, CsvOptions::default().delimiter(delimiter));
    let records = parser.to_records()?;

    println!("Records: {}", records.len());
    for record in records.iter().take(5) {
        println!("   {:?}", record);
    }

    Ok(())
}
