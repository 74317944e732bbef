//! Item file parser.
//!
//! Plain items come first, one `home target points name...` record per line.
//! A blank line starts the locked section, where each record spans three
//! lines: the item record, the name of its key item, and the hint shown while
//! it stays locked.

use trek_data::{ItemDef, LockDef};

use crate::loader::{ITEMS_FILE, LoadError, parse_int, parse_position};

/// Parse plain and locked item records.
///
/// # Errors
/// - `LoadError::BadInteger` / `LoadError::NegativePosition` for bad numeric fields
/// - `LoadError::MissingName` for a record with no name
/// - `LoadError::Truncated` if a locked record lacks its key or hint line
pub fn parse_items(text: &str) -> Result<Vec<ItemDef>, LoadError> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));
    let mut defs = Vec::new();

    for (line_no, line) in lines.by_ref() {
        if line.trim().is_empty() {
            break;
        }
        defs.push(parse_record(line, line_no)?);
    }

    let mut locked = lines.filter(|(_, line)| !line.trim().is_empty());
    while let Some((line_no, line)) = locked.next() {
        let mut def = parse_record(line, line_no)?;
        let (key_line, key) = locked.next().ok_or(LoadError::Truncated {
            file: ITEMS_FILE,
            line: line_no,
            expected: "a key item name",
        })?;
        let (_, hint) = locked.next().ok_or(LoadError::Truncated {
            file: ITEMS_FILE,
            line: key_line,
            expected: "a hint",
        })?;
        def.lock = Some(LockDef {
            key: key.trim().to_string(),
            hint: hint.trim().to_string(),
        });
        defs.push(def);
    }
    Ok(defs)
}

fn parse_record(line: &str, line_no: usize) -> Result<ItemDef, LoadError> {
    let mut fields = line.split_whitespace();
    let mut next_field = |expected: &'static str| {
        fields.next().ok_or(LoadError::Truncated {
            file: ITEMS_FILE,
            line: line_no,
            expected,
        })
    };
    let home = parse_position(next_field("a home position")?, ITEMS_FILE, line_no)?;
    let target = parse_position(next_field("a target position")?, ITEMS_FILE, line_no)?;
    let points = parse_int(next_field("target points")?, ITEMS_FILE, line_no)?;

    let name = fields.collect::<Vec<_>>().join(" ");
    if name.is_empty() {
        return Err(LoadError::MissingName {
            file: ITEMS_FILE,
            line: line_no,
        });
    }
    Ok(ItemDef {
        name,
        home,
        target,
        points,
        lock: None,
    })
}
