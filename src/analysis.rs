//! Post-parse passes over a time-sorted line sequence.


use itertools::Itertools as _;

use crate::line::LrcLine;

/// Group consecutive lines sharing a start time.
///
/// The input is expected to be sorted by time already, as
/// [`parse`](crate::parser::parse) produces it; duplicates that are not
/// contiguous are not detected. Groups with a single member are omitted.
#[must_use]
pub fn find_duplicate(lines: &[LrcLine]) -> Vec<Vec<LrcLine>> {
    let chunks = lines.iter().chunk_by(|line| line.start_time);
    let mut duplicates = Vec::new();
    for (_, group) in &chunks {
        let group: Vec<LrcLine> = group.cloned().collect();
        if group.len() > 1 {
            duplicates.push(group);
        }
    }
    duplicates
}

/// Merge consecutive same-time lines into one primary line carrying the
/// others as translations.
///
/// The first line of each group keeps its text and any translations it
/// already carries (e.g. from divider splitting); every following line
/// contributes its text and then its own translations, in order. Groups of
/// one pass through unchanged. Shares the contiguity precondition of
/// [`find_duplicate`]; the input is never mutated.
#[must_use]
pub fn combine_translation(lines: &[LrcLine]) -> Vec<LrcLine> {
    let chunks = lines.iter().chunk_by(|line| line.start_time);
    let mut combined = Vec::new();
    for (_, mut group) in &chunks {
        // Unwrap: chunk_by never yields an empty group
        let mut primary = group.next().unwrap().clone();
        for line in group {
            primary.translations.push(line.text.clone());
            primary.translations.extend(line.translations.iter().cloned());
        }
        combined.push(primary);
    }
    combined
}
