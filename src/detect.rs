//! Delimiter detection

use crate::csv::CsvOptions;
use crate::csv_parser::parse_table;
use tracing::trace;

/// Candidates tried by [`detect_delimiter`], in priority order
pub const CANDIDATE_DELIMITERS: [char; 3] = [',', '\t', ' '];

/// Guess the delimiter of `data` by parsing it with each candidate
///
/// Each candidate scores `rows * first row width` under a strict parse, or
/// zero if the parse fails. The highest score wins and ties go to the earlier
/// candidate. Falls back to `,` when nothing scores.
///
/// # Examples
///
/// ```
/// use csvgrid::detect_delimiter;
///
/// assert_eq!(detect_delimiter("a\tb\tc\n1\t2\t3", '"'), '\t');
/// assert_eq!(detect_delimiter("", '"'), ',');
/// ```
pub fn detect_delimiter(data: &str, qualifier: char) -> char {
    let mut winner = CANDIDATE_DELIMITERS[0];
    let mut max = 0;

    for delimiter in CANDIDATE_DELIMITERS {
        let options = CsvOptions::default()
            .delimiter(delimiter)
            .qualifier(qualifier);

        let score = match parse_table(data, &options) {
            Ok(rows) => rows.first().map_or(0, |first| rows.len() * first.len()),
            Err(_) => 0,
        };
        trace!(?delimiter, score, "scored delimiter candidate");

        if score > max {
            max = score;
            winner = delimiter;
        }
    }

    winner
}
