//! Deterministic identifier-to-note mapping.
//!
//! A Git object id is a hex string; summing its digit values and reducing
//! modulo the scale length picks a scale degree. The mapping is pure, so
//! the same repository always produces the same melody.

use crate::scale::Scale;

/// Maps a hex object id to a scale degree index.
///
/// Sums the numeric value of every hex digit in `id` and reduces modulo
/// `scale_len`. Non-hex characters are ignored; an empty id maps to
/// degree 0.
///
/// # Arguments
///
/// * `id` - Hex object identifier (any length)
/// * `scale_len` - Number of pitches in the target scale; must be >= 1
///
/// # Examples
///
/// ```
/// use gitsound_core::pitch::pitch_index;
///
/// assert_eq!(pitch_index("", 7), 0);
/// assert_eq!(pitch_index("ff", 7), 30 % 7);
/// ```
pub fn pitch_index(id: &str, scale_len: usize) -> usize {
    let sum: u64 = id.chars().filter_map(|c| c.to_digit(16)).map(u64::from).sum();
    (sum % scale_len as u64) as usize
}

/// Maps a hex object id to a MIDI note number on a scale.
///
/// Picks the scale degree via [`pitch_index`] and shifts the pitch by
/// `octave` octaves (12 semitones each). The result can leave the 0-127
/// MIDI range for extreme octave settings; callers clamp at the wire
/// boundary.
pub fn scale_note(scale: &Scale, id: &str, octave: i8) -> i32 {
    let pitches = scale.pitches();
    pitches[pitch_index(id, pitches.len())] + i32::from(octave) * 12
}
