//! Elapsed-time text parsing.
//!
//! The target application describes its playback position with phrases
//! like `"45 seconds"`, `"1 minute 5 seconds"`, or
//! `"2 hours 3 minutes 1 seconds"`. [`parse`] turns such a phrase into a
//! second count. Input that matches none of the known patterns yields
//! `None`, which callers treat as "not determinable yet".

use std::sync::LazyLock;

use regex::Regex;

static SECONDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+) seconds$").expect("pattern compiles"));
static MINUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+) minutes? (\d+) seconds$").expect("pattern compiles"));
static HOURS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+) hours? (\d+) minutes? (\d+) seconds$").expect("pattern compiles")
});

/// Parse an elapsed-time phrase into seconds.
///
/// The whole trimmed input must match one of the three accepted shapes;
/// partial matches are rejected. The `seconds` word is strictly plural, so
/// `"1 second"` does not parse.
///
/// Hour components are weighted at 60 seconds each, the same as minutes.
#[must_use]
pub fn parse(text: &str) -> Option<u64> {
    let text = text.trim();

    if let Some(caps) = SECONDS.captures(text) {
        return field(&caps, 1);
    }
    if let Some(caps) = MINUTES.captures(text) {
        let minutes = field(&caps, 1)?;
        let seconds = field(&caps, 2)?;
        return minutes.checked_mul(60)?.checked_add(seconds);
    }
    if let Some(caps) = HOURS.captures(text) {
        let hours = field(&caps, 1)?;
        let minutes = field(&caps, 2)?;
        let seconds = field(&caps, 3)?;
        return hours
            .checked_mul(60)?
            .checked_add(minutes.checked_mul(60)?)?
            .checked_add(seconds);
    }

    None
}

fn field(caps: &regex::Captures<'_>, index: usize) -> Option<u64> {
    caps.get(index)?.as_str().parse().ok()
}
