//! Shift/mask extraction of the packed payload words.
//!
//! Layout of a 32-bit record payload (bit 31 first):
//!
//! ```text
//!  31    27 26 25 24   20 19                  0
//! +--------+--+--+-------+---------------------+
//! | grade  |GL|OL| unused|  score / time       |
//! +--------+--+--+-------+---------------------+
//! ```
//!
//! Score and time share the same 20 bits. Which one applies is decided by the collection being
//! decoded, never by the bit pattern.

use crate::model::{DualLevel, Grade, Medal, MedalCategory, MedalSet, TimedGrade};

pub const GRADE_SHIFT: u32 = 27;
pub const GRADE_MASK: u32 = 0x1F;
pub const GREENLINE_SHIFT: u32 = 26;
pub const ORANGELINE_SHIFT: u32 = 25;
pub const VALUE_MASK: u32 = 0xF_FFFF;

const MEDAL_MASK: u16 = 0b11;

#[inline]
pub fn grade(word: u32) -> Grade {
    Grade(((word >> GRADE_SHIFT) & GRADE_MASK) as u8)
}

#[inline]
pub fn greenline(word: u32) -> bool {
    (word >> GREENLINE_SHIFT) & 1 == 1
}

#[inline]
pub fn orangeline(word: u32) -> bool {
    (word >> ORANGELINE_SHIFT) & 1 == 1
}

/// Low 20 bits, read as points.
#[inline]
pub fn score(word: u32) -> u32 {
    word & VALUE_MASK
}

/// Low 20 bits, read as frames.
#[inline]
pub fn time_frames(word: u32) -> u32 {
    word & VALUE_MASK
}

pub fn timed_grade(word: u32) -> TimedGrade {
    TimedGrade {
        grade: grade(word),
        greenline: greenline(word),
        orangeline: orangeline(word),
        time_frames: time_frames(word),
    }
}

/// Splits a levels word: player 1 in the high half, player 2 in the low half.
pub fn dual_level(word: u32) -> DualLevel {
    DualLevel {
        player1: (word >> 16) as u16,
        player2: (word & 0xFFFF) as u16,
    }
}

pub fn medals(word: u16) -> MedalSet {
    MedalSet::new(
        MedalCategory::ALL
            .map(|category| Medal::from_bits(((word >> category.shift()) & MEDAL_MASK) as u8)),
    )
}

/// Inverse of [`medals`]; only the low 12 bits can be set.
pub fn pack_medals(medals: &MedalSet) -> u16 {
    medals.iter().fold(0, |word, (category, medal)| {
        word | (u16::from(medal.bits()) << category.shift())
    })
}
