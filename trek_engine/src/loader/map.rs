//! Map file parser.
//!
//! One row per line, whitespace-separated integers. Blank lines are ignored.
//! Shape and range checks happen later, in validation.

use crate::loader::{LoadError, MAP_FILE, parse_int};

/// Parse map text into rows of raw cell values.
///
/// # Errors
/// - `LoadError::BadInteger` for any token that isn't an integer
pub fn parse_map(text: &str) -> Result<Vec<Vec<i64>>, LoadError> {
    let mut rows = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| parse_int(token, MAP_FILE, index + 1))
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows() {
        let rows = parse_map("0 1 2\n3 -1 4\n").unwrap();
        assert_eq!(rows, vec![vec![0, 1, 2], vec![3, -1, 4]]);
    }

    #[test]
    fn skips_blank_lines_and_extra_spaces() {
        let rows = parse_map("\n  0   1\n\n2\t-1  \n\n").unwrap();
        assert_eq!(rows, vec![vec![0, 1], vec![2, -1]]);
    }

    #[test]
    fn reports_line_of_bad_token() {
        let err = parse_map("0 1\n2 x\n").unwrap_err();
        assert_eq!(
            err,
            LoadError::BadInteger {
                file: MAP_FILE,
                line: 2,
                token: "x".into()
            }
        );
    }

    #[test]
    fn empty_text_gives_no_rows() {
        assert!(parse_map("").unwrap().is_empty());
    }
}
