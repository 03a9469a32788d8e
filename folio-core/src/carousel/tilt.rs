//! Deterministic per-slide tilt.
//!
//! Stacked slides are rotated by a few degrees for a "pile of photos" look.
//! The angle must come out the same wherever the page is rendered, so it is
//! derived from the slide identity instead of a random source. The hash runs
//! over UTF-16 code units with 32-bit wrapping so browser-side rendering of
//! the same seed agrees exactly.

/// Number of distinct tilt values; results fall in `[-10, 10]`.
const TILT_RANGE: u32 = 21;
const TILT_OFFSET: i32 = 10;

/// Multiply-accumulate hash of `seed`, folded into `[-10, 10]`.
pub fn stable_rotate(seed: &str) -> i32 {
    let hash = seed.encode_utf16().fold(0u32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(u32::from(unit))
    });
    (hash % TILT_RANGE) as i32 - TILT_OFFSET
}

/// Tilt for the item with identity `key` at `position` in its list.
pub fn item_tilt(key: &str, position: usize) -> i32 {
    stable_rotate(&format!("{key}-{position}"))
}
