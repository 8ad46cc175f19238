//! Physical-line splitting and classification.


use std::sync::LazyLock;

use regex::Regex;

/// Matches a whole `[name:value]` attribute line. Names are letters only;
/// values run up to the closing bracket.
static ATTRIBUTE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[([A-Za-z]+)\s*:\s*([^\]]*)\]$").expect("hard-coded regex is valid")
});

/// Matches a leading `[mm:ss.xx]` timestamp tag. Minutes and the fraction
/// take one or more ASCII digits (`\d` would admit Unicode digits the
/// timestamp parser rejects); seconds take exactly two.
pub(crate) static TIMESTAMP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[[0-9]+:[0-9]{2}\.[0-9]+\]").expect("hard-coded regex is valid"));

/// Classification of one physical line of an LRC document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty after trimming; contributes nothing.
    Blank,
    /// A `[name:value]` metadata tag, value already trimmed.
    Attribute { name: &'a str, value: &'a str },
    /// One or more timestamp tags followed by lyric text, trailing
    /// whitespace already stripped.
    Lyric(&'a str),
    /// Anything else; skipped without failing the parse.
    Unrecognized(&'a str),
}

/// Classify a single physical line.
#[must_use]
pub fn classify(line: &str) -> LineClass<'_> {
    let line = line.trim_end();
    if line.trim_start().is_empty() {
        return LineClass::Blank;
    }
    if let Some(captures) = ATTRIBUTE_LINE.captures(line) {
        // Unwrap: both groups always participate in a match
        let name = captures.get(1).unwrap().as_str();
        let value = captures.get(2).unwrap().as_str();
        return LineClass::Attribute {
            name,
            value: value.trim(),
        };
    }
    if TIMESTAMP_TAG.is_match(line) {
        return LineClass::Lyric(line);
    }
    LineClass::Unrecognized(line)
}

/// Split a document into classified physical lines, recognizing both `\n`
/// and `\r\n` terminators.
pub fn tokenize(raw: &str) -> impl Iterator<Item = LineClass<'_>> {
    raw.lines().map(classify)
}
