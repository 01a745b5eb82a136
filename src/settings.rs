use crate::name_resolver::NameSubstitution;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderSettings {
    validate_grades: bool,
}

impl Default for DecoderSettings {
    fn default() -> Self {
        DecoderSettings {
            validate_grades: true,
        }
    }
}

impl DecoderSettings {
    pub fn new() -> Self {
        DecoderSettings::default()
    }

    /// When set (the default), a grade outside `0..=19` fails decoding.
    /// Otherwise the raw grade is kept and rendered as `??`.
    pub fn validate_grades(mut self, validate_grades: bool) -> Self {
        self.validate_grades = validate_grades;
        self
    }

    pub fn should_validate_grades(&self) -> bool {
        self.validate_grades
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    format: OutputFormat,
    indent: bool,
    substitutions: Vec<NameSubstitution>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        ReportSettings {
            format: OutputFormat::Text,
            indent: true,
            substitutions: Vec::new(),
        }
    }
}

impl ReportSettings {
    pub fn new() -> Self {
        ReportSettings::default()
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Pretty-print JSON output. Has no effect on the text report.
    pub fn indent(mut self, indent: bool) -> Self {
        self.indent = indent;
        self
    }

    pub fn substitutions(mut self, substitutions: Vec<NameSubstitution>) -> Self {
        self.substitutions = substitutions;
        self
    }

    pub fn get_format(&self) -> OutputFormat {
        self.format
    }

    pub fn should_indent(&self) -> bool {
        self.indent
    }

    pub fn get_substitutions(&self) -> &[NameSubstitution] {
        &self.substitutions
    }
}
