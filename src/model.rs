//! Decoded EEPROM records.
//!
//! Each collection in the image stores a different interpretation of the same 32-bit payload
//! word, so every collection gets its own record type instead of a tagged union.

use std::fmt;

use serde::Serialize;

use crate::utils::{FrameTime, frames_to_time};

/// Display names for grades `0..=19`.
pub const GRADE_NAMES: [&str; 20] = [
    "9", "8", "7", "6", "5", "4", "3", "2", "1", "S1", "S2", "S3", "S4", "S5", "S6", "S7", "S8",
    "S9", "M", "Gm",
];

/// Raw grade index as stored in the top 5 bits of a payload word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Grade(pub u8);

impl Grade {
    pub fn name(self) -> Option<&'static str> {
        GRADE_NAMES.get(usize::from(self.0)).copied()
    }

    pub fn is_valid(self) -> bool {
        self.name().is_some()
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("??"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    #[default]
    None,
    Bronze,
    Silver,
    Gold,
}

impl Medal {
    /// Maps the low two bits of `bits` to a medal.
    pub fn from_bits(bits: u8) -> Medal {
        match bits & 0b11 {
            0 => Medal::None,
            1 => Medal::Bronze,
            2 => Medal::Silver,
            _ => Medal::Gold,
        }
    }

    pub fn bits(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> Option<&'static str> {
        match self {
            Medal::None => None,
            Medal::Bronze => Some("bronze"),
            Medal::Silver => Some("silver"),
            Medal::Gold => Some("gold"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MedalCategory {
    AC,
    ST,
    SK,
    RE,
    RO,
    CO,
}

impl MedalCategory {
    /// In bit order, lowest field first.
    pub const ALL: [MedalCategory; 6] = [
        MedalCategory::AC,
        MedalCategory::ST,
        MedalCategory::SK,
        MedalCategory::RE,
        MedalCategory::RO,
        MedalCategory::CO,
    ];

    pub fn code(self) -> &'static str {
        match self {
            MedalCategory::AC => "AC",
            MedalCategory::ST => "ST",
            MedalCategory::SK => "SK",
            MedalCategory::RE => "RE",
            MedalCategory::RO => "RO",
            MedalCategory::CO => "CO",
        }
    }

    /// Bit position of this category's 2-bit field in the medal word.
    pub fn shift(self) -> u32 {
        self as u32 * 2
    }
}

/// Medals awarded for one master record, indexed by `MedalCategory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MedalSet([Medal; 6]);

impl MedalSet {
    pub fn new(medals: [Medal; 6]) -> Self {
        MedalSet(medals)
    }

    pub fn get(&self, category: MedalCategory) -> Medal {
        self.0[category as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (MedalCategory, Medal)> + '_ {
        MedalCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Only the categories with a medal, in `MedalCategory::ALL` order.
    pub fn awarded(&self) -> impl Iterator<Item = (MedalCategory, Medal)> + '_ {
        self.iter().filter(|(_, medal)| *medal != Medal::None)
    }

    pub fn any_awarded(&self) -> bool {
        self.awarded().next().is_some()
    }
}

impl Serialize for MedalSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(MedalCategory::ALL.len()))?;
        for (category, medal) in self.iter() {
            map.serialize_entry(category.code(), &medal)?;
        }
        map.end()
    }
}

/// Grade, line flags and elapsed time packed into one payload word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimedGrade {
    pub grade: Grade,
    pub greenline: bool,
    pub orangeline: bool,
    pub time_frames: u32,
}

impl TimedGrade {
    pub fn time(&self) -> FrameTime {
        frames_to_time(self.time_frames)
    }

    /// The line the record was achieved with; orangeline takes precedence.
    pub fn line(&self) -> Option<&'static str> {
        if self.orangeline {
            Some("Orangeline")
        } else if self.greenline {
            Some("Greenline")
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DualLevel {
    pub player1: u16,
    pub player2: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreRecord {
    pub name: String,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MasterRecord {
    pub name: String,
    pub play: TimedGrade,
    pub medals: MedalSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionTimeRecord {
    pub name: String,
    pub play: TimedGrade,
}

/// Player 1's half of a doubles record. Only player 1's grade is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoublesRecord {
    pub name: String,
    pub play: TimedGrade,
}

/// Player 2's name plus the levels both players reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoublesCompletionRecord {
    pub name: String,
    pub levels: DualLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PlayStatus {
    pub coin_count: u32,
    /// In frames.
    pub demo_wait_time: u32,
    /// In frames.
    pub game_time: u32,
    pub play_count: u16,
    pub twin_count: u16,
    pub versus_count: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SeedAndChecksums {
    pub init_seed: u16,
    pub play_status_checksum: u16,
    pub rankings_checksum: u16,
    pub program_checksum: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_names() {
        assert_eq!(Grade(0).name(), Some("9"));
        assert_eq!(Grade(9).name(), Some("S1"));
        assert_eq!(Grade(19).name(), Some("Gm"));
        assert_eq!(Grade(20).name(), None);
        assert_eq!(Grade(27).to_string(), "??");
        assert!(!Grade(31).is_valid());
    }

    #[test]
    fn test_medal_set_lists_only_awarded_medals() {
        let medals = MedalSet::new([
            Medal::Bronze,
            Medal::None,
            Medal::Gold,
            Medal::None,
            Medal::None,
            Medal::Silver,
        ]);

        let awarded: Vec<_> = medals.awarded().collect();
        assert_eq!(
            awarded,
            vec![
                (MedalCategory::AC, Medal::Bronze),
                (MedalCategory::SK, Medal::Gold),
                (MedalCategory::CO, Medal::Silver),
            ]
        );
        assert!(medals.any_awarded());
        assert!(!MedalSet::default().any_awarded());
    }

    #[test]
    fn test_orangeline_wins_over_greenline() {
        let mut play = TimedGrade {
            grade: Grade(18),
            greenline: true,
            orangeline: true,
            time_frames: 0,
        };
        assert_eq!(play.line(), Some("Orangeline"));
        play.orangeline = false;
        assert_eq!(play.line(), Some("Greenline"));
        play.greenline = false;
        assert_eq!(play.line(), None);
    }
}
