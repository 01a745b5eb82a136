use std::str::FromStr;

use crate::err::{EepromError, SubstitutionSpecReason};

/// Show `replacement` wherever a record name is exactly `original`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSubstitution {
    pub original: String,
    pub replacement: String,
}

impl NameSubstitution {
    pub fn new(original: impl Into<String>, replacement: impl Into<String>) -> Self {
        NameSubstitution {
            original: original.into(),
            replacement: replacement.into(),
        }
    }
}

impl FromStr for NameSubstitution {
    type Err = EepromError;

    /// Parses `NAME:REPLACEMENT`. The name ends at the first colon, so the replacement may
    /// itself contain colons.
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let reject = |reason| EepromError::SubstitutionSpec {
            spec: spec.to_owned(),
            reason,
        };

        let (original, replacement) = match spec.split_once(':') {
            Some(parts) => parts,
            None => (spec, ""),
        };

        if original.is_empty() {
            return Err(reject(SubstitutionSpecReason::MissingName));
        }
        if replacement.is_empty() {
            return Err(reject(SubstitutionSpecReason::MissingReplacement));
        }

        Ok(NameSubstitution::new(original, replacement))
    }
}

/// Applies substitutions in order; the first exact (case-sensitive) match wins.
#[derive(Debug, Clone, Default)]
pub struct NameResolver {
    substitutions: Vec<NameSubstitution>,
}

impl NameResolver {
    pub fn new(substitutions: Vec<NameSubstitution>) -> Self {
        NameResolver { substitutions }
    }

    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.substitutions
            .iter()
            .find(|substitution| substitution.original == name)
            .map_or(name, |substitution| substitution.replacement.as_str())
    }
}
