//! Timed lyric lines and the multi-tag line extractor.


use serde::Serialize;

use crate::{
    time::{error::MalformedTimestamp, LrcTime},
    tokenizer::TIMESTAMP_TAG,
};

/// A single timed lyric line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LrcLine {
    pub start_time: LrcTime,
    /// Trimmed remainder of the physical line after its time tags. May be
    /// empty: a timed but textless line is valid.
    pub text: String,
    /// Secondary renderings of `text` at the same timestamp, in source
    /// order. Empty when the line has none.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub translations: Vec<String>,
}

impl LrcLine {
    #[must_use]
    pub const fn new(start_time: LrcTime, text: String) -> Self {
        Self {
            start_time,
            text,
            translations: Vec::new(),
        }
    }

    /// Renders the line back to LRC text, e.g. `[00:25.47]Line 1`.
    ///
    /// `ms_digits` selects the fraction width as in [`LrcTime::to_tag`].
    /// When `divider` is given, translations are joined onto the line;
    /// otherwise they are dropped.
    #[must_use]
    pub fn to_lrc(&self, ms_digits: u8, divider: Option<&str>) -> String {
        let mut out = format!("[{}]{}", self.start_time.to_tag(ms_digits), self.text);
        if let Some(divider) = divider {
            for translation in &self.translations {
                out.push_str(divider);
                out.push_str(translation);
            }
        }
        out
    }
}

/// Extract every timed line declared by one physical lyric line.
///
/// A line may carry several leading tags (`[00:01.00][00:02.00]Text`); one
/// [`LrcLine`] is emitted per tag, in tag order, all sharing the trimmed
/// remainder as text.
///
/// # Errors
///
/// Returns [`MalformedTimestamp`] when a consumed tag fails to parse as a
/// timestamp.
pub fn extract_lines(line: &str) -> Result<Vec<LrcLine>, MalformedTimestamp> {
    let mut rest = line;
    let mut times = Vec::with_capacity(1);
    while let Some(found) = TIMESTAMP_TAG.find(rest) {
        let tag = &rest[found.start() + 1..found.end() - 1];
        times.push(tag.parse::<LrcTime>()?);
        rest = &rest[found.end()..];
    }
    let text = rest.trim();
    Ok(times
        .into_iter()
        .map(|start_time| LrcLine::new(start_time, text.to_owned()))
        .collect())
}
