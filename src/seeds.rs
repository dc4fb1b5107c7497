//! Seed classification for generation entry points.
//!
//! Callers hand seeds to the generators in whatever shape they have: a
//! number, a sector coordinate string, a free-form query parameter, or
//! nothing at all. Every shape resolves to *some* valid 32-bit seed rather
//! than failing; unrecognizable input behaves exactly like "no seed given".

use serde::{Deserialize, Serialize};

/// A classified seed argument.
///
/// Resolution to a concrete `u32` happens in the generator context, since
/// `Sector` needs the current universe seed and `Absent` draws a fresh
/// value from the live stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeedInput {
    /// An explicit 32-bit seed, used as-is.
    Numeric(u32),
    /// A sector coordinate string, resolved against the universe seed.
    /// The coordinate may be out of range; sector addressing degrades it
    /// to a stable hash offset instead of erroring.
    Sector(String),
    /// No usable seed; the generator draws one from its current stream.
    Absent,
}

impl SeedInput {
    /// Classify a raw string.
    ///
    /// Integer-parsable input (decimal, possibly wider than 32 bits, or
    /// negative) becomes `Numeric` masked to 32 bits. A letter followed by
    /// digits is sector-shaped and becomes `Sector`. Everything else is
    /// `Absent`.
    pub fn classify(raw: &str) -> SeedInput {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return SeedInput::Absent;
        }
        if let Ok(n) = trimmed.parse::<u64>() {
            return SeedInput::Numeric((n & 0xFFFF_FFFF) as u32);
        }
        if let Ok(n) = trimmed.parse::<i64>() {
            return SeedInput::Numeric((n as u64 & 0xFFFF_FFFF) as u32);
        }
        if is_sector_shaped(trimmed) {
            return SeedInput::Sector(trimmed.to_string());
        }
        SeedInput::Absent
    }
}

/// One ASCII letter followed by one or more ASCII digits.
fn is_sector_shaped(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 2
        && bytes[0].is_ascii_alphabetic()
        && bytes[1..].iter().all(|b| b.is_ascii_digit())
}

impl From<u32> for SeedInput {
    fn from(seed: u32) -> Self {
        SeedInput::Numeric(seed)
    }
}

impl From<u64> for SeedInput {
    fn from(seed: u64) -> Self {
        SeedInput::Numeric((seed & 0xFFFF_FFFF) as u32)
    }
}

impl From<&str> for SeedInput {
    fn from(raw: &str) -> Self {
        SeedInput::classify(raw)
    }
}

impl From<String> for SeedInput {
    fn from(raw: String) -> Self {
        SeedInput::classify(&raw)
    }
}

impl<T: Into<SeedInput>> From<Option<T>> for SeedInput {
    fn from(seed: Option<T>) -> Self {
        match seed {
            Some(value) => value.into(),
            None => SeedInput::Absent,
        }
    }
}
