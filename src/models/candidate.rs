use super::{CheckRule, Symbology};
use serde::Serialize;

/// Payload and declared check digit pulled out of a code whose shape fits a
/// symbology
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCandidate {
    /// Symbology whose grammar matched
    pub symbology: Symbology,
    /// Digit values subject to weighting, in reading order
    pub payload: Vec<u8>,
    /// Check digit as written in the code
    pub declared_check: u32,
}

/// An accepted tracking code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidCode {
    code: String,
    symbology: Symbology,
    rule: CheckRule,
}

impl ValidCode {
    pub(crate) fn new(code: String, symbology: Symbology, rule: CheckRule) -> Self {
        Self {
            code,
            symbology,
            rule,
        }
    }

    /// Normalized code (whitespace removed, casing preserved)
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Consume into the normalized code
    pub fn into_string(self) -> String {
        self.code
    }

    /// Symbology that accepted the code
    pub fn symbology(&self) -> Symbology {
        self.symbology
    }

    /// Rule whose check digit matched
    pub fn rule(&self) -> CheckRule {
        self.rule
    }
}

impl std::fmt::Display for ValidCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}
