use serde::Serialize;

/// Barcode symbologies a tracking code can be checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Symbology {
    /// USS Code 128 Subset C: 20-22 digits, last one is the check digit
    #[serde(rename = "USS128")]
    Uss128,
    /// USS Code 39: 2 alphanumerics, 8 digits, check digit, "US"
    #[serde(rename = "USS39")]
    Uss39,
}

impl Symbology {
    /// Order in which the validator tries each symbology
    pub const VALIDATION_ORDER: [Symbology; 2] = [Symbology::Uss39, Symbology::Uss128];

    /// Check rules this symbology accepts, primary rule first
    pub fn rules(&self) -> &'static [CheckRule] {
        match self {
            Symbology::Uss128 => &[CheckRule::Mod10],
            Symbology::Uss39 => &[CheckRule::Mod11, CheckRule::Mod10],
        }
    }

    /// Rule used when generating a check digit
    pub fn primary_rule(&self) -> CheckRule {
        self.rules()[0]
    }

    /// Short display name
    pub fn name(&self) -> &'static str {
        match self {
            Symbology::Uss128 => "USS128",
            Symbology::Uss39 => "USS39",
        }
    }
}

impl std::fmt::Display for Symbology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Symbology {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "uss128" | "128" => Ok(Symbology::Uss128),
            "uss39" | "39" => Ok(Symbology::Uss39),
            other => Err(format!("unknown symbology: {other}")),
        }
    }
}

/// Check digit derivation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CheckRule {
    /// Weights [3, 1] from the rightmost digit, (10 - sum % 10) % 10
    Mod10,
    /// Weights [8, 6, 4, 2, 3, 5, 9, 7] from the leftmost digit, folded mod 11
    Mod11,
}

impl std::fmt::Display for CheckRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckRule::Mod10 => f.write_str("mod10"),
            CheckRule::Mod11 => f.write_str("mod11"),
        }
    }
}
