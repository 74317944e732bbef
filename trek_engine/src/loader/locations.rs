//! Location file parser.
//!
//! Each record is a position line, an optional visit-points line, a brief
//! description line, and long description lines up to a line reading `END`.
//! Blank lines between records are skipped.

use std::iter::Peekable;

use trek_data::LocationDef;

use crate::loader::{LOCATIONS_FILE, LoadError, parse_int, parse_position};

const END_MARKER: &str = "END";

/// Parse location records.
///
/// # Errors
/// - `LoadError::BadInteger` / `LoadError::NegativePosition` for a bad position line
/// - `LoadError::Truncated` if a record stops before its brief description
/// - `LoadError::MissingEnd` if a long description runs off the end of the file
pub fn parse_locations(text: &str) -> Result<Vec<LocationDef>, LoadError> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line)).peekable();
    let mut defs = Vec::new();

    while let Some((line_no, line)) = next_non_blank(&mut lines) {
        let position = parse_position(line, LOCATIONS_FILE, line_no)?;

        let (brief_line, brief) = lines.next().ok_or(LoadError::Truncated {
            file: LOCATIONS_FILE,
            line: line_no,
            expected: "a brief description",
        })?;
        // an integer here is the visit-points line, otherwise it's already the brief
        let (visit_points, brief) = match parse_int(brief, LOCATIONS_FILE, brief_line) {
            Ok(points) => {
                let (_, brief) = lines.next().ok_or(LoadError::Truncated {
                    file: LOCATIONS_FILE,
                    line: brief_line,
                    expected: "a brief description",
                })?;
                (points, brief)
            },
            Err(_) => (0, brief),
        };

        let mut long = Vec::new();
        loop {
            let Some((_, line)) = lines.next() else {
                return Err(LoadError::MissingEnd {
                    file: LOCATIONS_FILE,
                    line: line_no,
                    position,
                });
            };
            if line.trim() == END_MARKER {
                break;
            }
            long.push(line.trim());
        }

        defs.push(LocationDef {
            position,
            visit_points,
            brief: brief.trim().to_string(),
            long: long.join("\n").trim().to_string(),
        });
    }
    Ok(defs)
}

fn next_non_blank<'a, I>(lines: &mut Peekable<I>) -> Option<(usize, &'a str)>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    while let Some(&(_, line)) = lines.peek() {
        if line.trim().is_empty() {
            lines.next();
        } else {
            return lines.next();
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
0
5
Front gate.
You stand at the front gate.
Ivy climbs the brick pillars.
END

1
Quad.
A wide lawn crossed by paths.
END
";

    #[test]
    fn parses_records_with_and_without_points() {
        let defs = parse_locations(SAMPLE).unwrap();
        assert_eq!(defs.len(), 2);
        assert_eq!(
            defs[0],
            LocationDef {
                position: 0,
                visit_points: 5,
                brief: "Front gate.".into(),
                long: "You stand at the front gate.\nIvy climbs the brick pillars.".into(),
            }
        );
        assert_eq!(defs[1].visit_points, 0);
        assert_eq!(defs[1].brief, "Quad.");
        assert_eq!(defs[1].long, "A wide lawn crossed by paths.");
    }

    #[test]
    fn missing_end_is_an_error() {
        let err = parse_locations("3\nBrief.\nLong text\n").unwrap_err();
        assert_eq!(
            err,
            LoadError::MissingEnd {
                file: LOCATIONS_FILE,
                line: 1,
                position: 3
            }
        );
    }

    #[test]
    fn position_must_be_an_integer() {
        let err = parse_locations("\n\nlobby\nBrief.\nLong.\nEND\n").unwrap_err();
        assert!(matches!(err, LoadError::BadInteger { line: 3, .. }));
    }

    #[test]
    fn record_without_brief_is_truncated() {
        let err = parse_locations("7").unwrap_err();
        assert!(matches!(err, LoadError::Truncated { line: 1, .. }));
    }

    #[test]
    fn trailing_blank_lines_are_fine() {
        let defs = parse_locations("0\nA.\nA long.\nEND\n\n\n").unwrap();
        assert_eq!(defs.len(), 1);
    }
}
