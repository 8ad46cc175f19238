//! Parsing and analysis for LRC-format lyric files.
//!
//! The parser turns a whole document into a [`ParseResult`]: its metadata
//! attributes, the global millisecond offset, and the timed lines sorted by
//! start time. Two analysis passes operate on the line sequence afterwards:
//! [`find_duplicate`] groups lines sharing a timestamp, and
//! [`combine_translation`] merges such groups into a primary line plus its
//! translations.
//!
//! ```
//! use lrcparse::{parse, ParseOptions};
//!
//! let result = parse("[offset:250]\n[00:00.02]Line 1", &ParseOptions::default())?;
//! assert_eq!(result.offset, 250);
//! assert_eq!(result.lines[0].start_time.total_millis(), 270);
//! # Ok::<(), lrcparse::parser::error::Parse>(())
//! ```

pub mod analysis;
pub mod line;
pub mod parser;
pub mod time;
pub mod tokenizer;

pub use analysis::{combine_translation, find_duplicate};
pub use line::LrcLine;
pub use parser::{parse, ParseOptions, ParseResult, DEFAULT_TRANSLATION_DIVIDER};
pub use time::LrcTime;
