//! Timestamp values carried by LRC time tags.


use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use serde::Serialize;

pub mod error {
    use thiserror::Error;

    /// A timestamp candidate that does not match the `mm:ss.xx` grammar.
    #[derive(Error, Debug)]
    pub enum MalformedTimestamp {
        #[error("invalid timestamp format: {0}")]
        InvalidFormat(String),
        #[error("invalid integer {0}: {1}")]
        InvalidInteger(String, #[source] std::num::ParseIntError),
    }

    /// An offset drove a timestamp below zero.
    #[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
    #[error("offset of {delta}ms drives timestamp at {total_millis}ms below zero")]
    pub struct NegativeTimestamp {
        /// Total milliseconds of the timestamp before the offset was applied.
        pub total_millis: u64,
        /// The offset that was applied.
        pub delta: i64,
    }
}

/// A time offset from the start of the song, as written in a time tag.
///
/// Fields are kept exactly as parsed: a non-standard encoding such as
/// `[02:83.370]` keeps `seconds: 83` until [`Self::normalize`] is called.
/// Equality, ordering and hashing always go through the total-millisecond
/// equivalent, so `02:83.370` and `03:23.370` compare equal.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct LrcTime {
    pub minutes: u64,
    pub seconds: u64,
    pub milliseconds: u64,
}

impl LrcTime {
    #[must_use]
    pub const fn new(minutes: u64, seconds: u64, milliseconds: u64) -> Self {
        Self {
            minutes,
            seconds,
            milliseconds,
        }
    }

    /// Builds a normalized time from a total-millisecond count.
    #[must_use]
    pub const fn from_total_millis(total: u64) -> Self {
        Self {
            minutes: total / 60_000,
            seconds: total / 1000 % 60,
            milliseconds: total % 1000,
        }
    }

    /// The total-millisecond equivalent:
    /// `minutes * 60000 + seconds * 1000 + milliseconds`.
    ///
    /// Saturates at `u64::MAX`: the minutes grammar places no upper bound
    /// on the field, so absurd values must not wrap the ordering.
    #[must_use]
    pub const fn total_millis(&self) -> u64 {
        self.minutes
            .saturating_mul(60_000)
            .saturating_add(self.seconds.saturating_mul(1000))
            .saturating_add(self.milliseconds)
    }

    /// Rolls overflowing milliseconds into seconds and overflowing seconds
    /// into minutes, so that `seconds < 60` and `milliseconds < 1000`.
    #[must_use]
    pub const fn normalize(&self) -> Self {
        Self::from_total_millis(self.total_millis())
    }

    /// Adds a signed millisecond offset and renormalizes.
    ///
    /// # Errors
    ///
    /// Returns [`error::NegativeTimestamp`] if the result would lie before
    /// the start of the song.
    pub fn add_milliseconds(&self, delta: i64) -> Result<Self, error::NegativeTimestamp> {
        let total = i128::from(self.total_millis()) + i128::from(delta);
        if total < 0 {
            return Err(error::NegativeTimestamp {
                total_millis: self.total_millis(),
                delta,
            });
        }
        // Saturates past u64::MAX, like total_millis.
        Ok(Self::from_total_millis(
            u64::try_from(total).unwrap_or(u64::MAX),
        ))
    }

    /// Renders the text inside an LRC time tag, e.g. `03:23.37`.
    ///
    /// The value is normalized first; `ms_digits` selects a 3-digit fraction
    /// or the conventional 2-digit one (the default for anything else).
    #[must_use]
    pub fn to_tag(&self, ms_digits: u8) -> String {
        let t = self.normalize();
        match ms_digits {
            3 => format!("{:02}:{:02}.{:03}", t.minutes, t.seconds, t.milliseconds),
            _ => format!("{:02}:{:02}.{:02}", t.minutes, t.seconds, t.milliseconds / 10),
        }
    }
}

impl fmt::Display for LrcTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_tag(3))
    }
}

impl PartialEq for LrcTime {
    fn eq(&self, other: &Self) -> bool {
        self.total_millis() == other.total_millis()
    }
}
impl Eq for LrcTime {}
impl PartialOrd for LrcTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for LrcTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_millis().cmp(&other.total_millis())
    }
}
impl Hash for LrcTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.total_millis().hash(state);
    }
}

impl FromStr for LrcTime {
    type Err = error::MalformedTimestamp;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // mm:ss.xx, where seconds may exceed 59 and the fraction may carry
        // anywhere from one digit upwards.
        let [minutes, rest]: [&str; 2] = s
            .split(':')
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|_| error::MalformedTimestamp::InvalidFormat(s.to_owned()))?;
        let [seconds, fraction]: [&str; 2] = rest
            .split('.')
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|_| error::MalformedTimestamp::InvalidFormat(s.to_owned()))?;
        if minutes.is_empty() || seconds.is_empty() || fraction.is_empty() {
            return Err(error::MalformedTimestamp::InvalidFormat(s.to_owned()));
        }
        Ok(Self {
            minutes: parse_field(minutes)?,
            seconds: parse_field(seconds)?,
            milliseconds: scale_fraction(fraction)?,
        })
    }
}

fn parse_field(s: &str) -> Result<u64, error::MalformedTimestamp> {
    // u64::from_str would also take a leading `+`; the grammar is digits only.
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(error::MalformedTimestamp::InvalidFormat(s.to_owned()));
    }
    s.parse::<u64>()
        .map_err(|e| error::MalformedTimestamp::InvalidInteger(s.to_owned(), e))
}

/// Scales a fractional-second field to milliseconds: an N-digit fraction is
/// worth `fraction * 10^(3-N)` ms, and digits past the third are truncated.
fn scale_fraction(s: &str) -> Result<u64, error::MalformedTimestamp> {
    let digits: String = s.chars().take(3).collect();
    let value = parse_field(&digits)?;
    Ok(value * 10u64.pow(3 - digits.len() as u32))
}
