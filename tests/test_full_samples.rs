
use fixtures::*;

use pretty_assertions::assert_eq;
use tap_eeprom::{
    DecoderSettings, EepromBuffer, EepromError, EepromRecords, Grade, Medal, MedalCategory,
    NameSubstitution, OutputFormat, Report, ReportSettings,
};

fn decode_regular_sample() -> EepromRecords {
    ensure_env_logger_initialized();
    let buffer = EepromBuffer::from_path(regular_sample()).unwrap();
    EepromRecords::decode(&buffer, &DecoderSettings::new()).unwrap()
}

#[test]
fn test_it_decodes_regular_sample() {
    let records = decode_regular_sample();

    assert_eq!(records.normal[0].name, "AAA");
    assert_eq!(records.normal[0].score, 10_000);
    assert_eq!(records.normal[1].name, "BBB");
    assert_eq!(records.normal[1].score, 123_456);
    assert_eq!(records.normal[2].name, "C");

    let master = &records.master[0];
    assert_eq!(master.name, "ARS");
    assert_eq!(master.play.grade, Grade(19));
    assert!(master.play.greenline);
    assert_eq!(master.play.time().to_string(), "08:47:01");
    assert_eq!(master.medals.get(MedalCategory::AC), Medal::Gold);
    assert_eq!(master.medals.get(MedalCategory::ST), Medal::Bronze);
    assert_eq!(master.medals.get(MedalCategory::CO), Medal::Gold);
    assert!(!records.master[2].medals.any_awarded());

    assert_eq!(records.master_section_times[9].name, "GM!");
    assert_eq!(records.doubles_completion[1].levels.player2, 250);
    assert_eq!(records.play_status.coin_count, 1234);
    assert_eq!(records.seed_and_checksums.program_checksum, 0x0F0F);
}

#[test]
fn test_text_report_matches_reference_output() {
    let records = decode_regular_sample();
    let settings = ReportSettings::new();
    let text = Report::new(&records, &settings).render_text().unwrap();

    assert_eq!(text, regular_sample_report());
}

#[test]
fn test_substituted_text_report_matches_reference_output() {
    let records = decode_regular_sample();
    let settings = ReportSettings::new().substitutions(vec![
        NameSubstitution::new("ARS", "Arika"),
        NameSubstitution::new("KEN", "Kenji"),
    ]);
    let text = Report::new(&records, &settings).render().unwrap();

    assert_eq!(text, regular_sample_substituted_report());
}

#[test]
fn test_json_report_carries_the_same_values() {
    let records = decode_regular_sample();
    let settings = ReportSettings::new()
        .format(OutputFormat::Json)
        .substitutions(vec![NameSubstitution::new("ARS", "Arika")]);
    let json: serde_json::Value =
        serde_json::from_str(&Report::new(&records, &settings).render().unwrap()).unwrap();

    assert_eq!(json["normal"][1]["score"], 123_456);
    assert_eq!(json["master"][0]["name"], "Arika");
    assert_eq!(json["master"][0]["play"]["grade"], "Gm");
    assert_eq!(json["master"][1]["play"]["orangeline"], true);
    assert_eq!(json["master_section_times"][0]["name"], "Arika");
    assert_eq!(json["doubles"][0]["player2"]["name"], "KEN");
    assert_eq!(json["play_status"]["game_time"], "3127:36:25");
    assert_eq!(json["seed_and_checksums"]["rankings_checksum"], "0xABCD");
}

#[test]
fn test_it_rejects_invalid_grade_unless_asked_not_to() {
    let image = sample_with_invalid_grade();
    let buffer = EepromBuffer::from_bytes(&image).unwrap();

    assert!(matches!(
        EepromRecords::decode(&buffer, &DecoderSettings::new()),
        Err(EepromError::InvalidGrade { value: 27, .. })
    ));

    let records =
        EepromRecords::decode(&buffer, &DecoderSettings::new().validate_grades(false)).unwrap();
    let settings = ReportSettings::new();
    let text = Report::new(&records, &settings).render_text().unwrap();
    assert!(
        text.contains("--1--ARS--------------------?? - --- @ 00:00:83"),
        "unexpected report:\n{text}"
    );
}

#[test]
fn test_it_rejects_truncated_image() {
    let image = std::fs::read(regular_sample()).unwrap();

    assert!(matches!(
        EepromBuffer::from_bytes(&image[..128]),
        Err(EepromError::Size {
            expected: 256,
            found: 128
        })
    ));
}
