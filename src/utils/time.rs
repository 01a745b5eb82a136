use std::fmt;

use serde::Serialize;

/// Frame rate the game's own clock display assumes.
///
/// The arcade hardware actually ticks at ~61.68Hz, but the game's own time display assumes 60Hz.
/// Times shown here match the game's, not wall-clock time.
pub const FRAMES_PER_SECOND: u32 = 60;

const FRAMES_PER_MINUTE: u32 = FRAMES_PER_SECOND * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct FrameTime {
    pub minutes: u32,
    pub seconds: u32,
    /// Scaled from the leftover frames (`frames * 100 / 60`), not true hundredths.
    pub centiseconds: u32,
}

pub fn frames_to_time(frames: u32) -> FrameTime {
    let minutes = frames / FRAMES_PER_MINUTE;
    let frames = frames % FRAMES_PER_MINUTE;
    let seconds = frames / FRAMES_PER_SECOND;
    let frames = frames % FRAMES_PER_SECOND;

    FrameTime {
        minutes,
        seconds,
        centiseconds: frames * 100 / FRAMES_PER_SECOND,
    }
}

impl From<u32> for FrameTime {
    fn from(frames: u32) -> Self {
        frames_to_time(frames)
    }
}

impl fmt::Display for FrameTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.minutes, self.seconds, self.centiseconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn time(minutes: u32, seconds: u32, centiseconds: u32) -> FrameTime {
        FrameTime {
            minutes,
            seconds,
            centiseconds,
        }
    }

    #[test]
    fn test_converts_whole_units() {
        assert_eq!(frames_to_time(0), time(0, 0, 0));
        assert_eq!(frames_to_time(60), time(0, 1, 0));
        assert_eq!(frames_to_time(3600), time(1, 0, 0));
    }

    #[test]
    fn test_centiseconds_are_scaled_from_sixtieths() {
        assert_eq!(frames_to_time(30), time(0, 0, 50));
        assert_eq!(frames_to_time(59), time(0, 0, 98));
        assert_eq!(frames_to_time(3600 * 8 + 60 * 47 + 1), time(8, 47, 1));
    }

    #[test]
    fn test_largest_twenty_bit_time() {
        // 0xFFFFF frames is the largest value a record can hold.
        assert_eq!(frames_to_time(0xF_FFFF), time(291, 16, 25));
        assert_eq!(frames_to_time(0xF_FFFF).to_string(), "291:16:25");
    }

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(frames_to_time(61).to_string(), "00:01:01");
    }
}
