use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use indoc::indoc;
use log::{LevelFilter, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use tap_eeprom::{
    DecoderSettings, EepromBuffer, EepromRecords, NameSubstitution, OutputFormat, Report,
    ReportSettings,
};

use std::io;
use std::path::PathBuf;
use std::process::exit;

/// File looked up in the working directory when no input is given.
const DEFAULT_INPUT: &str = "eeprom";

struct TapEepromDump {
    input: PathBuf,
    input_is_default: bool,
    decoder_settings: DecoderSettings,
    report_settings: ReportSettings,
    verbosity_level: Option<LevelFilter>,
}

impl TapEepromDump {
    pub fn from_cli_matches(matches: &ArgMatches) -> Result<Self> {
        let (input, input_is_default) = match matches.get_one::<String>("INPUT") {
            Some(path) => (PathBuf::from(path), false),
            None => (PathBuf::from(DEFAULT_INPUT), true),
        };

        let substitutions = matches
            .get_many::<String>("SUBSTITUTIONS")
            .unwrap_or_default()
            .map(|spec| spec.parse::<NameSubstitution>())
            .collect::<Result<Vec<_>, _>>()?;

        let format = match matches.get_one::<String>("output-format").map(String::as_str) {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        };

        let no_indent = match (matches.get_flag("no-indent"), format) {
            (true, OutputFormat::Text) => {
                eprintln!("`--no-indent` only affects JSON output");
                true
            }
            (v, _) => v,
        };

        let verbosity_level = match matches.get_count("verbose") {
            0 => None,
            1 => Some(LevelFilter::Info),
            2 => Some(LevelFilter::Debug),
            3 => Some(LevelFilter::Trace),
            _ => {
                eprintln!("using more than -vvv does not affect verbosity level");
                Some(LevelFilter::Trace)
            }
        };

        Ok(TapEepromDump {
            input,
            input_is_default,
            decoder_settings: DecoderSettings::new()
                .validate_grades(!matches.get_flag("no-validate-grades")),
            report_settings: ReportSettings::new()
                .format(format)
                .indent(!no_indent)
                .substitutions(substitutions),
            verbosity_level,
        })
    }

    /// Main entry point for `TapEepromDump`
    pub fn run(&self) -> Result<()> {
        self.try_to_initialize_logging();

        let buffer = EepromBuffer::from_path(&self.input).with_context(|| {
            format!(
                "Failed opening {}TAP EEPROM file \"{}\"",
                if self.input_is_default { "default " } else { "" },
                self.input.display()
            )
        })?;
        info!("Loaded EEPROM image from {}", self.input.display());

        let records = EepromRecords::decode(&buffer, &self.decoder_settings)
            .context("Failed to decode EEPROM records")?;

        Report::new(&records, &self.report_settings)
            .write_to(io::stdout().lock())
            .context("Failed to write report")?;

        Ok(())
    }

    fn try_to_initialize_logging(&self) {
        if let Some(level) = self.verbosity_level {
            if let Err(e) = TermLogger::init(
                level,
                Config::default(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            ) {
                eprintln!("Failed to initialize logging: {e}");
            }
        }
    }
}

fn main() {
    let matches = Command::new("TAP EEPROM dump")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Utility to display the records stored in a TAP EEPROM image")
        .arg(
            Arg::new("INPUT")
                .value_name("EEPROM")
                .help("Path to a 256 byte TAP EEPROM image [default: ./eeprom]"),
        )
        .arg(
            Arg::new("SUBSTITUTIONS")
                .value_name("NAME:REPLACEMENT")
                .num_args(1..)
                .help("Display REPLACEMENT instead of the record name NAME.")
                .long_help(indoc!(r#"
                    Display REPLACEMENT instead of the record name NAME.
                    Names are matched exactly and case-sensitively, the first matching spec wins.
                    Substitutions only change the report, the image is never modified.
                    Example: `tap_eeprom_dump eeprom "AAA:Alice" "BBB:Bob"`
                "#)),
        )
        .arg(
            Arg::new("output-format")
                .short('o')
                .long("format")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Sets the output format")
                .long_help(indoc!(r#"
                    Sets the output format:
                        "text" - prints the classic text report.
                        "json" - prints the same values as a JSON document.
                "#)),
        )
        .arg(
            Arg::new("no-indent")
                .long("no-indent")
                .action(ArgAction::SetTrue)
                .help("When set, JSON output will not be indented."),
        )
        .arg(
            Arg::new("no-validate-grades")
                .long("no-validate-grades")
                .action(ArgAction::SetTrue)
                .help("When set, grades outside of 9..Gm are shown as `??` instead of failing."),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help(indoc!("
                    -v - info, -vv - debug, -vvv - trace.
                    trace output is only available in debug builds, as it is extremely verbose")),
        )
        .get_matches();

    let result = TapEepromDump::from_cli_matches(&matches).and_then(|app| app.run());

    if let Err(e) = result {
        eprintln!("ERROR: {e:#}");
        exit(1);
    }
}
