use log::{debug, trace};

use crate::bitfield;
use crate::eeprom_buffer::EepromBuffer;
use crate::err::{EepromError, Result};
use crate::model::{
    DoublesCompletionRecord, DoublesRecord, MasterRecord, PlayStatus, ScoreRecord,
    SectionTimeRecord, SeedAndChecksums, TimedGrade,
};
use crate::settings::DecoderSettings;

pub const RANKING_PLACES: usize = 3;
pub const MASTER_SECTIONS: usize = 10;

/// Every record is a 4 byte name followed by a 4 byte payload word.
const RECORD_STRIDE: usize = 8;
const NAME_LEN: usize = 4;
const MEDAL_STRIDE: usize = 2;

const NORMAL_OFFSET: usize = 0xAC;
const MASTER_OFFSET: usize = 0x94;
const MASTER_MEDALS_OFFSET: usize = 0xF4;
const MASTER_SECTION_TIMES_OFFSET: usize = 0x44;
const DOUBLES_OFFSET: usize = 0xC4;
const DOUBLES_COMPLETION_OFFSET: usize = 0xDC;

const COIN_COUNT_OFFSET: usize = 0x2C;
const DEMO_WAIT_TIME_OFFSET: usize = 0x30;
const GAME_TIME_OFFSET: usize = 0x34;
const PLAY_COUNT_OFFSET: usize = 0x38;
const TWIN_COUNT_OFFSET: usize = 0x3A;
const VERSUS_COUNT_OFFSET: usize = 0x3C;
const INIT_SEED_OFFSET: usize = 0x3E;
const PLAY_STATUS_CHECKSUM_OFFSET: usize = 0x40;
const RANKINGS_CHECKSUM_OFFSET: usize = 0xFA;
const PROGRAM_CHECKSUM_OFFSET: usize = 0xFC;

/// Everything stored in a TAP EEPROM image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EepromRecords {
    pub normal: [ScoreRecord; RANKING_PLACES],
    pub master: [MasterRecord; RANKING_PLACES],
    pub master_section_times: [SectionTimeRecord; MASTER_SECTIONS],
    pub doubles: [DoublesRecord; RANKING_PLACES],
    pub doubles_completion: [DoublesCompletionRecord; RANKING_PLACES],
    pub play_status: PlayStatus,
    pub seed_and_checksums: SeedAndChecksums,
}

impl EepromRecords {
    pub fn decode(buffer: &EepromBuffer, settings: &DecoderSettings) -> Result<EepromRecords> {
        let decoder = RecordDecoder { buffer, settings };

        let records = EepromRecords {
            normal: decoder.collect(|place| decoder.normal(place))?,
            master: decoder.collect(|place| decoder.master(place))?,
            master_section_times: decoder.collect(|section| decoder.section_time(section))?,
            doubles: decoder.collect(|place| decoder.doubles(place))?,
            doubles_completion: decoder.collect(|place| decoder.doubles_completion(place))?,
            play_status: decoder.play_status()?,
            seed_and_checksums: decoder.seed_and_checksums()?,
        };

        debug!("Play status - {:?}", records.play_status);
        debug!("Seed and checksums - {:?}", records.seed_and_checksums);
        Ok(records)
    }
}

struct RecordDecoder<'a> {
    buffer: &'a EepromBuffer,
    settings: &'a DecoderSettings,
}

impl RecordDecoder<'_> {
    fn collect<T, const N: usize>(
        &self,
        mut decode: impl FnMut(usize) -> Result<T>,
    ) -> Result<[T; N]> {
        let mut records = Vec::with_capacity(N);
        for index in 0..N {
            records.push(decode(index)?);
        }

        Ok(records
            .try_into()
            .unwrap_or_else(|_| unreachable!("exactly {} records were decoded", N)))
    }

    fn record_offset(base: usize, index: usize) -> usize {
        base + index * RECORD_STRIDE
    }

    /// Only the first three bytes of a name are significant, and a NUL ends it early.
    fn name(&self, base: usize, index: usize) -> Result<String> {
        let raw = self
            .buffer
            .read_array::<NAME_LEN>(Self::record_offset(base, index))?;

        Ok(raw[..NAME_LEN - 1]
            .iter()
            .take_while(|&&b| b != 0)
            .map(|&b| char::from(b))
            .collect())
    }

    fn payload(&self, base: usize, index: usize) -> Result<u32> {
        self.buffer
            .read_u32_be(Self::record_offset(base, index) + NAME_LEN)
    }

    fn timed_grade(&self, collection: &'static str, base: usize, index: usize) -> Result<TimedGrade> {
        let word = self.payload(base, index)?;
        let play = bitfield::timed_grade(word);

        if self.settings.should_validate_grades() && !play.grade.is_valid() {
            return Err(EepromError::InvalidGrade {
                collection,
                index,
                value: play.grade.0,
            });
        }

        trace!("{collection} {index} - payload {word:#010x} - {play:?}");
        Ok(play)
    }

    fn normal(&self, place: usize) -> Result<ScoreRecord> {
        let word = self.payload(NORMAL_OFFSET, place)?;

        Ok(ScoreRecord {
            name: self.name(NORMAL_OFFSET, place)?,
            score: bitfield::score(word),
        })
    }

    fn master(&self, place: usize) -> Result<MasterRecord> {
        let medals = self
            .buffer
            .read_u16_be(MASTER_MEDALS_OFFSET + place * MEDAL_STRIDE)?;

        Ok(MasterRecord {
            name: self.name(MASTER_OFFSET, place)?,
            play: self.timed_grade("Master", MASTER_OFFSET, place)?,
            medals: bitfield::medals(medals),
        })
    }

    fn section_time(&self, section: usize) -> Result<SectionTimeRecord> {
        Ok(SectionTimeRecord {
            name: self.name(MASTER_SECTION_TIMES_OFFSET, section)?,
            play: self.timed_grade("Master section time", MASTER_SECTION_TIMES_OFFSET, section)?,
        })
    }

    fn doubles(&self, place: usize) -> Result<DoublesRecord> {
        Ok(DoublesRecord {
            name: self.name(DOUBLES_OFFSET, place)?,
            play: self.timed_grade("Doubles", DOUBLES_OFFSET, place)?,
        })
    }

    fn doubles_completion(&self, place: usize) -> Result<DoublesCompletionRecord> {
        let word = self.payload(DOUBLES_COMPLETION_OFFSET, place)?;

        Ok(DoublesCompletionRecord {
            name: self.name(DOUBLES_COMPLETION_OFFSET, place)?,
            levels: bitfield::dual_level(word),
        })
    }

    fn play_status(&self) -> Result<PlayStatus> {
        Ok(PlayStatus {
            coin_count: self.buffer.read_u32_be(COIN_COUNT_OFFSET)?,
            demo_wait_time: self.buffer.read_u32_be(DEMO_WAIT_TIME_OFFSET)?,
            game_time: self.buffer.read_u32_be(GAME_TIME_OFFSET)?,
            play_count: self.buffer.read_u16_be(PLAY_COUNT_OFFSET)?,
            twin_count: self.buffer.read_u16_be(TWIN_COUNT_OFFSET)?,
            versus_count: self.buffer.read_u16_be(VERSUS_COUNT_OFFSET)?,
        })
    }

    fn seed_and_checksums(&self) -> Result<SeedAndChecksums> {
        Ok(SeedAndChecksums {
            init_seed: self.buffer.read_u16_be(INIT_SEED_OFFSET)?,
            play_status_checksum: self.buffer.read_u16_be(PLAY_STATUS_CHECKSUM_OFFSET)?,
            rankings_checksum: self.buffer.read_u16_be(RANKINGS_CHECKSUM_OFFSET)?,
            program_checksum: self.buffer.read_u16_be(PROGRAM_CHECKSUM_OFFSET)?,
        })
    }
}
