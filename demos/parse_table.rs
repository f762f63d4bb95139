//! CSV Parser Examples
//!
//! Demonstrates the table and record views:
//! - Typed cells from plain CSV
//! - Records keyed by the header row
//! - Custom delimiter and qualifier
//! - Strict versus lenient row widths
//!
//! Run with `RUST_LOG=csvgrid=debug` to see parse and cache events.

use csvgrid::{CsvOptions, CsvParser};
use std::error::Error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== CSV Parser Examples ===\n");

    // Example 1: Table view
    println!("1. Table view...");
    let mut parser = CsvParser::new("name,age,member\nAlice,30,true\nBob,25,false\nCarol,,null");
    for (i, row) in parser.to_table()?.iter().enumerate() {
        println!("   Row {}: {:?}", i + 1, row);
    }

    // Example 2: Records view (cached table is reused)
    println!("\n2. Records view...");
    for record in parser.to_records()?.iter() {
        println!("   {:?}", record);
    }

    // Example 3: Semicolons and single quotes
    println!("\n3. Custom delimiter and qualifier...");
    parser
        .set_data("city;motto\n'Paris';'fluctuat; nec mergitur'\n'Rome';'it''s eternal'")
        .set_delimiter(';')
        .set_qualifier("'")?;
    for record in parser.to_records()?.iter() {
        println!("   {:?}", record);
    }

    // Example 4: Strict versus lenient
    println!("\n4. Ragged rows...");
    let data = "a,b,c\n1,2,3,4";
    let mut strict = CsvParser::new(data);
    match strict.to_table() {
        Ok(_) => println!("   strict: parsed"),
        Err(e) => println!("   strict: {}", e),
    }

    let mut lenient = CsvParser::with_options(data, CsvOptions::default().strict(false));
    for row in lenient.to_table()?.iter() {
        println!("   lenient: {} cells {:?}", row.len(), row);
    }

    Ok(())
}
