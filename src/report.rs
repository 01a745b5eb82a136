//! Renders decoded records as the classic text report or as JSON.

use std::fmt::Write as _;
use std::io;

use log::debug;
use serde_json::{Value, json};

use crate::err::Result;
use crate::model::{Grade, MedalSet, TimedGrade};
use crate::name_resolver::NameResolver;
use crate::record_decoder::EepromRecords;
use crate::settings::{OutputFormat, ReportSettings};
use crate::utils::frames_to_time;

const NORMAL_NAME_WIDTH: usize = 28;
const MASTER_NAME_WIDTH: usize = 22;
const DOUBLES_NAME_WIDTH: usize = 23;
const GRADE_WIDTH: usize = 3;

/// Dashes padding `text` up to `width` characters, or nothing if it's already wider.
fn dashes(width: usize, text: &str) -> String {
    "-".repeat(width.saturating_sub(text.chars().count()))
}

fn line_suffix(play: &TimedGrade) -> String {
    play.line()
        .map(|line| format!(" - {line}"))
        .unwrap_or_default()
}

fn grade_column(grade: Grade) -> String {
    let name = grade.to_string();
    format!("{}{}", dashes(GRADE_WIDTH, &name), name)
}

fn medal_list(medals: &MedalSet) -> String {
    medals
        .awarded()
        .filter_map(|(category, medal)| Some(format!("{} {}", category.code(), medal.name()?)))
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct Report<'a> {
    records: &'a EepromRecords,
    resolver: NameResolver,
    settings: &'a ReportSettings,
}

impl<'a> Report<'a> {
    pub fn new(records: &'a EepromRecords, settings: &'a ReportSettings) -> Self {
        Report {
            records,
            resolver: NameResolver::new(settings.get_substitutions().to_vec()),
            settings,
        }
    }

    /// Renders in the format selected by the settings.
    pub fn render(&self) -> Result<String> {
        match self.settings.get_format() {
            OutputFormat::Text => self.render_text(),
            OutputFormat::Json => self.render_json(),
        }
    }

    pub fn write_to<W: io::Write>(&self, mut out: W) -> Result<()> {
        let rendered = self.render()?;
        out.write_all(rendered.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    pub fn render_text(&self) -> Result<String> {
        let mut out = String::new();
        let records = self.records;

        writeln!(out, "[TAP] Normal:")?;
        for (place, record) in records.normal.iter().enumerate() {
            let name = self.resolver.resolve(&record.name);
            writeln!(
                out,
                "{:>4}--{}{}{:06} pts @ -:--:--",
                place + 1,
                name,
                dashes(NORMAL_NAME_WIDTH, name),
                record.score
            )?;
        }
        writeln!(out)?;

        writeln!(out, "[TAP] Master:")?;
        for (place, record) in records.master.iter().enumerate() {
            let name = self.resolver.resolve(&record.name);
            write!(
                out,
                "--{}--{}{}{} - --- @ {} - --/--/-- - ***************{}",
                place + 1,
                name,
                dashes(MASTER_NAME_WIDTH, name),
                grade_column(record.play.grade),
                record.play.time(),
                line_suffix(&record.play)
            )?;
            if record.medals.any_awarded() {
                let separator = if record.play.line().is_some() { "; " } else { " - " };
                write!(out, "{separator}Medals: {}", medal_list(&record.medals))?;
            }
            writeln!(out)?;
        }
        writeln!(out)?;

        writeln!(out, "[TAP] Master Section Times:")?;
        for (section, record) in records.master_section_times.iter().enumerate() {
            let name = self.resolver.resolve(&record.name);
            writeln!(
                out,
                "{:03} - {:03}--{}{}{} @ {} - --/--/-- - ***************{}",
                section * 100,
                (section + 1) * 100 - 1,
                name,
                dashes(MASTER_NAME_WIDTH, name),
                grade_column(record.play.grade),
                record.play.time(),
                line_suffix(&record.play)
            )?;
        }
        writeln!(out)?;

        writeln!(out, "[TAP] Doubles:")?;
        for (player1, player2) in records.doubles.iter().zip(&records.doubles_completion) {
            let name1 = self.resolver.resolve(&player1.name);
            let name2 = self.resolver.resolve(&player2.name);
            writeln!(
                out,
                "{}{} {:03} @ {} @ {:03} {}{} - {} (player 1) earned a grade of {}",
                name1,
                dashes(DOUBLES_NAME_WIDTH, name1),
                player2.levels.player1,
                player1.play.time(),
                player2.levels.player2,
                dashes(DOUBLES_NAME_WIDTH, name2),
                name2,
                name1,
                player1.play.grade
            )?;
        }

        let status = &records.play_status;
        writeln!(out)?;
        writeln!(out, "[TAP] Play Status:")?;
        writeln!(out, "Coin Count: {}", status.coin_count)?;
        writeln!(out, "Demo Wait Time: {}", frames_to_time(status.demo_wait_time))?;
        writeln!(out, "Game Time: {}", frames_to_time(status.game_time))?;
        writeln!(out, "Play Count: {}", status.play_count)?;
        writeln!(out, "Twin Count: {}", status.twin_count)?;
        writeln!(out, "Doubles Count: {}", status.versus_count)?;

        let seed = &records.seed_and_checksums;
        writeln!(out)?;
        writeln!(out, "[TAP] Seed And Checksums:")?;
        writeln!(out, "Init Seed: 0x{:04X}", seed.init_seed)?;
        writeln!(out, "Play Status Checksum: 0x{:04X}", seed.play_status_checksum)?;
        writeln!(out, "Rankings Checksum: 0x{:04X}", seed.rankings_checksum)?;
        writeln!(out, "Program Checksum: 0x{:04X}", seed.program_checksum)?;

        debug!("Rendered {} bytes of text report", out.len());
        Ok(out)
    }

    fn timed_grade_json(play: &TimedGrade) -> Value {
        json!({
            "grade": play.grade.name(),
            "grade_index": play.grade,
            "greenline": play.greenline,
            "orangeline": play.orangeline,
            "time": play.time().to_string(),
            "time_frames": play.time_frames,
        })
    }

    pub fn to_json_value(&self) -> Value {
        let records = self.records;

        let normal: Vec<Value> = records
            .normal
            .iter()
            .enumerate()
            .map(|(place, record)| {
                json!({
                    "place": place + 1,
                    "name": self.resolver.resolve(&record.name),
                    "score": record.score,
                })
            })
            .collect();

        let master: Vec<Value> = records
            .master
            .iter()
            .enumerate()
            .map(|(place, record)| {
                json!({
                    "place": place + 1,
                    "name": self.resolver.resolve(&record.name),
                    "play": Self::timed_grade_json(&record.play),
                    "medals": record.medals,
                })
            })
            .collect();

        let section_times: Vec<Value> = records
            .master_section_times
            .iter()
            .enumerate()
            .map(|(section, record)| {
                json!({
                    "levels": format!("{:03}-{:03}", section * 100, (section + 1) * 100 - 1),
                    "name": self.resolver.resolve(&record.name),
                    "play": Self::timed_grade_json(&record.play),
                })
            })
            .collect();

        let doubles: Vec<Value> = records
            .doubles
            .iter()
            .zip(&records.doubles_completion)
            .enumerate()
            .map(|(place, (player1, player2))| {
                json!({
                    "place": place + 1,
                    "player1": {
                        "name": self.resolver.resolve(&player1.name),
                        "level": player2.levels.player1,
                    },
                    "player2": {
                        "name": self.resolver.resolve(&player2.name),
                        "level": player2.levels.player2,
                    },
                    "play": Self::timed_grade_json(&player1.play),
                })
            })
            .collect();

        let status = &records.play_status;
        let seed = &records.seed_and_checksums;

        json!({
            "normal": normal,
            "master": master,
            "master_section_times": section_times,
            "doubles": doubles,
            "play_status": {
                "coin_count": status.coin_count,
                "demo_wait_time": frames_to_time(status.demo_wait_time).to_string(),
                "game_time": frames_to_time(status.game_time).to_string(),
                "play_count": status.play_count,
                "twin_count": status.twin_count,
                "versus_count": status.versus_count,
            },
            "seed_and_checksums": {
                "init_seed": format!("0x{:04X}", seed.init_seed),
                "play_status_checksum": format!("0x{:04X}", seed.play_status_checksum),
                "rankings_checksum": format!("0x{:04X}", seed.rankings_checksum),
                "program_checksum": format!("0x{:04X}", seed.program_checksum),
            },
        })
    }

    pub fn render_json(&self) -> Result<String> {
        let value = self.to_json_value();
        let mut out = if self.settings.should_indent() {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        out.push('\n');
        Ok(out)
    }
}
