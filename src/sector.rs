//! Sector addressing for the universe grid.
//!
//! Sectors form an 8x8 grid addressed by a column letter (`A`-`H`) and a
//! row number (`0`-`7`), traversed in row-major raster order: index 0 is
//! `A0`, index 1 is `B0`, index 8 is `A1`. Every function here is pure and
//! stateless; no PRNG draws are consumed by addressing.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Number of columns in the sector grid (letters `A`-`H`).
pub const SECTOR_COLS: usize = 8;
/// Number of rows in the sector grid (digits `0`-`7`).
pub const SECTOR_ROWS: usize = 8;
/// Total addressable sectors.
pub const SECTOR_COUNT: usize = SECTOR_COLS * SECTOR_ROWS;

// Odd stride keeps index -> seed-offset bijective mod 2^32 while spreading
// adjacent sectors far apart in seed space.
const SECTOR_SEED_STRIDE: u32 = 104_729;

/// Convert a sector coordinate like `"C1"` to its raster index.
///
/// Returns `None` for anything outside the valid grid: a non-letter
/// column, an out-of-range letter or row, or a malformed string.
pub fn coordinate_to_index(coordinate: &str) -> Option<usize> {
    let mut chars = coordinate.chars();
    let col_char = chars.next()?;
    if !col_char.is_ascii_alphabetic() {
        return None;
    }
    let col = (col_char.to_ascii_uppercase() as u8 - b'A') as usize;
    if col >= SECTOR_COLS {
        return None;
    }
    let row_str = &coordinate[1..];
    if row_str.is_empty() {
        return None;
    }
    let row: usize = row_str.parse().ok()?;
    if row >= SECTOR_ROWS {
        return None;
    }
    Some(row * SECTOR_COLS + col)
}

/// Convert a raster index to its sector coordinate.
///
/// Out-of-range indices wrap around the grid rather than failing, so the
/// mapping is total.
pub fn sector_index_to_coordinate(index: usize) -> String {
    let index = index % SECTOR_COUNT;
    let col = index % SECTOR_COLS;
    let row = index / SECTOR_COLS;
    format!("{}{}", (b'A' + col as u8) as char, row)
}

/// Map a sector coordinate to its deterministic seed offset.
///
/// Valid coordinates map bijectively via `index * stride`. Invalid
/// coordinates degrade to a stable hash of the raw string masked to 32
/// bits, so the same garbage input always yields the same offset and
/// nothing ever panics.
pub fn sector_to_seed(coordinate: &str) -> u32 {
    match coordinate_to_index(coordinate) {
        Some(index) => (index as u32).wrapping_mul(SECTOR_SEED_STRIDE),
        None => fallback_offset(coordinate),
    }
}

/// Stable hash of a raw coordinate string, masked to 32 bits.
fn fallback_offset(raw: &str) -> u32 {
    let mut hasher = DefaultHasher::new();
    raw.hash(&mut hasher);
    (hasher.finish() & 0xFFFF_FFFF) as u32
}
