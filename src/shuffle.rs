//! Catalog line shuffling.
//!
//! A small companion utility: rewrites a catalog file with its lines in
//! uniformly random order. Useful for checking that a search result does
//! not secretly depend on catalog order beyond the documented
//! first-seen/first-found tie-break rules.

use crate::Result;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Uniformly shuffles lines in place with the given RNG.
pub fn shuffle_lines<R: Rng + ?Sized>(lines: &mut [String], rng: &mut R) {
    lines.shuffle(rng);
}

/// Reads `input` line by line, shuffles, and writes the result to
/// `output`.
pub fn scramble_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let reader = BufReader::new(File::open(input)?);
    let mut lines: Vec<String> = reader.lines().collect::<std::io::Result<_>>()?;
    shuffle_lines(&mut lines, &mut rand::rng());

    let mut writer = BufWriter::new(File::create(output)?);
    for line in &lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}
