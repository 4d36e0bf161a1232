//! Parsing of the semicolon-separated catalog format.
//!
//! ```text
//! name;slot;group,group;exclusion,exclusion;stat;amount;stat;amount;...
//! ```

use super::types::{Catalog, Item, Stat};
use crate::{OptimizeError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parses one catalog line.
///
/// Returns `Ok(None)` for lines that carry no item worth considering:
/// blank lines, and lines whose group, exclusion, or stat section is
/// missing entirely (an item with no stat modifications can never improve
/// a loadout). Trailing semicolons are ignored.
///
/// Returns an error for structurally broken lines: a missing slot field,
/// a stat name without an amount, or an unparsable amount. `line_number`
/// is 1-based and only used in error messages.
pub fn parse_line(line: &str, line_number: usize) -> Result<Option<Item>> {
    let trimmed = line.trim().trim_end_matches(';');
    if trimmed.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = trimmed.split(';').collect();
    if fields.len() < 2 {
        return Err(OptimizeError::Parse {
            line: line_number,
            message: format!("missing slot field in '{trimmed}'"),
        });
    }
    // Sections after name and slot: groups, exclusions, then stat pairs.
    if fields.len() < 5 {
        return Ok(None);
    }

    let name = fields[0].trim();
    let slot = fields[1].trim();
    let groups = split_labels(fields[2]);
    let exclusions = split_labels(fields[3]);

    let stat_fields = &fields[4..];
    if stat_fields.len() % 2 != 0 {
        return Err(OptimizeError::Parse {
            line: line_number,
            message: format!(
                "stat '{}' has no amount",
                stat_fields.last().unwrap_or(&"").trim()
            ),
        });
    }

    let mut stats = Vec::with_capacity(stat_fields.len() / 2);
    for pair in stat_fields.chunks(2) {
        let stat_name = pair[0].trim();
        let amount: i64 = pair[1].trim().parse().map_err(|_| OptimizeError::Parse {
            line: line_number,
            message: format!("invalid amount '{}' for stat '{stat_name}'", pair[1].trim()),
        })?;
        stats.push(Stat::new(stat_name, amount));
    }

    let group_refs: Vec<&str> = groups.iter().map(String::as_str).collect();
    let exclusion_refs: Vec<&str> = exclusions.iter().map(String::as_str).collect();
    Ok(Some(Item::new(
        name,
        slot,
        &group_refs,
        &exclusion_refs,
        stats,
    )))
}

fn split_labels(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(String::from)
        .collect()
}

impl Catalog {
    /// Reads a catalog from any buffered reader, one item per line.
    ///
    /// Skippable lines (see [`parse_line`]) are dropped silently; the
    /// first malformed line aborts with a [`OptimizeError::Parse`].
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut items = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(item) = parse_line(&line, index + 1)? {
                items.push(item);
            }
        }
        Ok(Self::from_items(items))
    }

    /// Loads a catalog from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    // ---- parse_line ----

    #[test]
    fn test_full_line() {
        let item = parse_line("Longsword;Weapon;Metal;Cursed;str;5;dex;-2;", 1)
            .unwrap()
            .unwrap();
        assert_eq!(item.name(), "Longsword");
        assert_eq!(item.slot(), "Weapon");
        assert_eq!(item.groups(), &["Metal".to_string()]);
        assert_eq!(item.exclusions(), &["Cursed".to_string()]);
        assert_eq!(item.stat("str"), Some(5));
        assert_eq!(item.stat("dex"), Some(-2));
    }

    #[test]
    fn test_multiple_labels() {
        let item = parse_line("Band;Ring;Metal,Jewelry;Cursed,Wood;vit;1", 1)
            .unwrap()
            .unwrap();
        assert_eq!(
            item.groups(),
            &["Metal".to_string(), "Jewelry".to_string()]
        );
        assert_eq!(
            item.exclusions(),
            &["Cursed".to_string(), "Wood".to_string()]
        );
    }

    #[test]
    fn test_empty_label_fields() {
        let item = parse_line("Plain Ring;Ring;;;vit;1", 1).unwrap().unwrap();
        assert!(item.groups().is_empty());
        assert!(item.exclusions().is_empty());
    }

    #[test]
    fn test_blank_line_skipped() {
        assert!(parse_line("", 1).unwrap().is_none());
        assert!(parse_line("   ", 2).unwrap().is_none());
        assert!(parse_line(";;;", 3).unwrap().is_none());
    }

    #[test]
    fn test_statless_item_skipped() {
        // No group section at all.
        assert!(parse_line("Trinket;Ring", 1).unwrap().is_none());
        // Groups but no exclusion section.
        assert!(parse_line("Trinket;Ring;Metal", 1).unwrap().is_none());
        // Groups and exclusions but no stats.
        assert!(parse_line("Trinket;Ring;Metal;Wood", 1).unwrap().is_none());
    }

    #[test]
    fn test_trailing_semicolons_trimmed() {
        let item = parse_line("Club;Weapon;;;str;3;;;", 1).unwrap().unwrap();
        assert_eq!(item.stat("str"), Some(3));
        assert_eq!(item.stats().len(), 1);
    }

    #[test]
    fn test_missing_slot_is_error() {
        let err = parse_line("JustAName", 4).unwrap_err();
        assert!(err.to_string().contains("line 4"));
    }

    #[test]
    fn test_stat_without_amount_is_error() {
        let err = parse_line("Club;Weapon;;;str;3;vit", 2).unwrap_err();
        assert!(err.to_string().contains("'vit'"));
    }

    #[test]
    fn test_bad_amount_is_error() {
        let err = parse_line("Club;Weapon;;;str;lots", 9).unwrap_err();
        assert!(err.to_string().contains("'lots'"));
        assert!(err.to_string().contains("line 9"));
    }

    #[test]
    fn test_negative_amount() {
        let item = parse_line("Cursed Blade;Weapon;Cursed;;str;8;vit;-4", 1)
            .unwrap()
            .unwrap();
        assert_eq!(item.stat("vit"), Some(-4));
    }

    // ---- Catalog::from_reader ----

    #[test]
    fn test_from_reader() {
        let input = "\
Longsword;Weapon;;;str;5
Decorative Hat;Head
Club;Weapon;;;str;3;vit;10

Iron Band;Ring;;;str;2;
";
        let catalog = Catalog::from_reader(Cursor::new(input)).unwrap();
        let names: Vec<&str> = catalog.items().iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["Longsword", "Club", "Iron Band"]);
    }

    #[test]
    fn test_from_reader_reports_line_number() {
        let input = "Longsword;Weapon;;;str;5\nClub;Weapon;;;str;oops\n";
        let err = Catalog::from_reader(Cursor::new(input)).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
