#![deny(unused_must_use)]
#![forbid(unsafe_code)]
//! A decoder for TAP EEPROM images.
//!
//! The image is a fixed 256 byte blob of big-endian, bit-packed ranking records and play
//! counters. Decoding is a single pass over an in-memory buffer:
//!
//! ```
//! use tap_eeprom::{DecoderSettings, EepromBuffer, EepromRecords, Report, ReportSettings};
//!
//! let mut image = [0_u8; 256];
//! image[0xAC..0xB0].copy_from_slice(b"AAA\0");
//! image[0xB0..0xB4].copy_from_slice(&10_000_u32.to_be_bytes());
//!
//! let buffer = EepromBuffer::from_bytes(&image).unwrap();
//! let records = EepromRecords::decode(&buffer, &DecoderSettings::new()).unwrap();
//! assert_eq!(records.normal[0].name, "AAA");
//! assert_eq!(records.normal[0].score, 10_000);
//!
//! let settings = ReportSettings::new();
//! let text = Report::new(&records, &settings).render().unwrap();
//! assert!(text.starts_with("[TAP] Normal:\n"));
//! ```

pub mod bitfield;
pub mod eeprom_buffer;
pub mod err;
pub mod model;
pub mod name_resolver;
pub mod record_decoder;
pub mod report;
pub mod settings;
mod utils;

pub use eeprom_buffer::{EEPROM_SIZE, EepromBuffer};
pub use err::{EepromError, Result, SubstitutionSpecReason};
pub use model::{
    DoublesCompletionRecord, DoublesRecord, DualLevel, GRADE_NAMES, Grade, MasterRecord, Medal,
    MedalCategory, MedalSet, PlayStatus, ScoreRecord, SectionTimeRecord, SeedAndChecksums,
    TimedGrade,
};
pub use name_resolver::{NameResolver, NameSubstitution};
pub use record_decoder::{EepromRecords, MASTER_SECTIONS, RANKING_PLACES};
pub use report::Report;
pub use settings::{DecoderSettings, OutputFormat, ReportSettings};
pub use utils::{FRAMES_PER_SECOND, FrameTime, frames_to_time};
