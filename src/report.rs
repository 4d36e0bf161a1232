//! Plain-text rendering and persistence of a search outcome.
//!
//! The layout matches the classic results file: a RESULTS header, one
//! chosen item name per line in slot order, a blank line, then one
//! `stat: amount` line per stat in index order.

use crate::search::SearchOutcome;
use crate::Result;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RESULTS")?;
        writeln!(f, "----------------------------")?;
        for pick in &self.picks {
            writeln!(f, "{}", pick.item)?;
        }
        writeln!(f)?;
        for (name, amount) in &self.totals {
            writeln!(f, "{name}: {amount}")?;
        }
        Ok(())
    }
}

/// Writes the outcome's text report to any writer.
pub fn write_report<W: Write>(outcome: &SearchOutcome, writer: &mut W) -> Result<()> {
    write!(writer, "{outcome}")?;
    Ok(())
}

/// Writes the outcome's text report to a file, replacing any previous
/// contents.
pub fn save_report<P: AsRef<Path>>(outcome: &SearchOutcome, path: P) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_report(outcome, &mut writer)?;
    writer.flush()?;
    Ok(())
}
