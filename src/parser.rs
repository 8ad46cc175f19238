//! Document-level parsing: attributes, offset resolution, line extraction
//! and ordering.

#[cfg(test)]
mod tests;

use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    analysis::combine_translation,
    line::{extract_lines, LrcLine},
    tokenizer::{tokenize, LineClass},
};

pub mod error {
    use thiserror::Error;

    pub use crate::time::error::{MalformedTimestamp, NegativeTimestamp};

    /// Failure of a whole [`parse`](crate::parser::parse) call.
    ///
    /// Only timestamps are strict: malformed attribute lines, unrecognized
    /// lines and non-integer `offset` values are skipped or kept as inert
    /// data instead.
    #[derive(Error, Debug)]
    pub enum Parse {
        #[error("malformed timestamp: {0}")]
        MalformedTimestamp(#[from] MalformedTimestamp),
        #[error(transparent)]
        NegativeTimestamp(#[from] NegativeTimestamp),
    }
}

/// Divider between a line's text and its inline translations when
/// [`ParseOptions::translation_divider`] is not overridden.
pub const DEFAULT_TRANSLATION_DIVIDER: &str = "|";

/// Knobs for [`parse`].
#[derive(Clone, Debug)]
pub struct ParseOptions {
    /// Merge same-timestamp lines into a primary line plus translations,
    /// and split individual lines on [`Self::translation_divider`].
    pub parse_translations: bool,
    /// Divider separating a line's text from its inline translations. Only
    /// consulted when `parse_translations` is set.
    pub translation_divider: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            parse_translations: false,
            translation_divider: DEFAULT_TRANSLATION_DIVIDER.to_owned(),
        }
    }
}

/// Everything extracted from one LRC document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParseResult {
    /// Global millisecond adjustment taken from the `offset` attribute,
    /// already applied to every line.
    pub offset: i64,
    /// Timed lines sorted by start time; ties keep document order.
    pub lines: Vec<LrcLine>,
    /// Metadata attributes in first-appearance order; a repeated name
    /// overwrites its value.
    pub attributes: IndexMap<String, String>,
}

/// Parse a whole LRC document.
///
/// Attribute and unrecognized lines never fail the parse. A lyric line
/// whose timestamp cannot be parsed, or an offset driving a line below
/// zero, aborts it with no partial result.
///
/// # Errors
///
/// See [`error::Parse`].
pub fn parse(raw: &str, options: &ParseOptions) -> Result<ParseResult, error::Parse> {
    let mut attributes = IndexMap::new();
    let mut offset = 0i64;
    let mut lines = Vec::new();

    for class in tokenize(raw) {
        match class {
            LineClass::Blank => {}
            LineClass::Attribute { name, value } => {
                if name.eq_ignore_ascii_case("offset") {
                    match value.parse::<i64>() {
                        Ok(parsed) => offset = parsed,
                        Err(e) => tracing::warn!("ignoring non-integer offset {value:?}: {e}"),
                    }
                }
                attributes.insert(name.to_owned(), value.to_owned());
            }
            LineClass::Lyric(line) => lines.extend(extract_lines(line)?),
            LineClass::Unrecognized(line) => tracing::debug!("skipping unrecognized line {line:?}"),
        }
    }

    if offset != 0 {
        for line in &mut lines {
            line.start_time = line.start_time.add_milliseconds(offset)?;
        }
    }

    // Stable, so fan-out and physical-line order survives among equal times.
    lines.sort_by_key(|line| line.start_time.total_millis());

    if options.parse_translations {
        if !options.translation_divider.is_empty() {
            for line in &mut lines {
                split_inline_translation(line, &options.translation_divider);
            }
        }
        lines = combine_translation(&lines);
    }

    tracing::debug!(
        lines = lines.len(),
        attributes = attributes.len(),
        offset,
        "parsed LRC document"
    );
    Ok(ParseResult {
        offset,
        lines,
        attributes,
    })
}

/// Split `text` on the divider, keeping the first trimmed segment as the
/// line's text and the rest as translations.
fn split_inline_translation(line: &mut LrcLine, divider: &str) {
    let mut segments = line.text.split(divider).map(str::trim);
    // Unwrap: split always yields at least one segment
    let text = segments.next().unwrap().to_owned();
    let translations: Vec<String> = segments.map(str::to_owned).collect();
    if !translations.is_empty() {
        line.text = text;
        line.translations.extend(translations);
    }
}
