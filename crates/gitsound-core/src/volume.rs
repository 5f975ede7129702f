//! Bounded line-change-to-loudness mapping.
//!
//! Loudness starts at the MIDI midpoint (63), is pushed up by insertions
//! and down by deletions, and is clamped into a window derived from the
//! configured volume range. Large diffs saturate instead of wrapping.

/// MIDI volume midpoint, the neutral loudness.
pub const MID_VOLUME: i64 = 63;

/// Derives the clamp deviation from a configured volume range.
///
/// The deviation is the distance from the midpoint to the configured
/// range, capped at 63 so the clamp window stays inside 0-127.
pub fn deviation(volume_range: u8) -> u8 {
    let dev = (MID_VOLUME - i64::from(volume_range)).unsigned_abs();
    dev.min(63) as u8
}

/// Widens a per-file deviation for the commit voice.
///
/// The commit note summarizes a whole diff, so its loudness window is
/// twice as wide, still capped at 63.
pub fn commit_deviation(dev: u8) -> u8 {
    (u16::from(dev) * 2).min(63) as u8
}

/// Computes a bounded MIDI volume from line-change statistics.
///
/// Starts from the midpoint, subtracts deletions, adds insertions and the
/// profile's volume modifier, then clamps to `[deviation, 127 - deviation]`.
///
/// # Arguments
///
/// * `deletions` - Lines removed
/// * `insertions` - Lines added
/// * `modifier` - Per-voice volume offset from the instrument profile
/// * `deviation` - Clamp distance from the 0/127 extremes; at most 63
pub fn volume(deletions: u32, insertions: u32, modifier: i32, deviation: u8) -> u8 {
    let dev = i64::from(deviation.min(63));
    let raw = MID_VOLUME - i64::from(deletions) + i64::from(insertions) + i64::from(modifier);
    raw.clamp(dev, 127 - dev) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deviation_from_default_range() {
        // |63 - 107| = 44
        assert_eq!(deviation(107), 44);
    }

    #[test]
    fn test_deviation_caps_at_63() {
        assert_eq!(deviation(127), 63);
        assert_eq!(deviation(0), 63);
    }

    #[test]
    fn test_deviation_at_midpoint_is_zero() {
        assert_eq!(deviation(63), 0);
    }

    #[test]
    fn test_commit_deviation_doubles_and_caps() {
        assert_eq!(commit_deviation(10), 20);
        assert_eq!(commit_deviation(44), 63);
        assert_eq!(commit_deviation(0), 0);
    }

    #[test]
    fn test_neutral_diff_is_midpoint() {
        assert_eq!(volume(0, 0, 0, 0), 63);
    }

    #[test]
    fn test_insertions_raise_deletions_lower() {
        assert_eq!(volume(0, 10, 0, 0), 73);
        assert_eq!(volume(10, 0, 0, 0), 53);
        assert_eq!(volume(5, 10, 0, 0), 68);
    }

    #[test]
    fn test_modifier_shifts() {
        assert_eq!(volume(0, 0, -13, 0), 50);
        assert_eq!(volume(0, 0, 13, 0), 76);
    }

    #[test]
    fn test_saturates_within_window() {
        assert_eq!(volume(1_000_000, 0, 0, 44), 44);
        assert_eq!(volume(0, 1_000_000, 0, 44), 83);
        // With zero deviation the window is the full 0-127 range.
        assert_eq!(volume(1_000_000, 0, 0, 0), 0);
        assert_eq!(volume(0, 1_000_000, 0, 0), 127);
    }

    #[test]
    fn test_bounds_hold_for_any_input() {
        for (del, ins, md) in [(0, 0, 0), (50, 0, -100), (0, 200, 100), (7, 3, 0)] {
            let dev = 44;
            let v = volume(del, ins, md, dev);
            assert!(v >= dev && v <= 127 - dev, "volume {v} escaped window");
        }
    }
}
