//! Validation orchestration
//!
//! Tries each symbology in [`Symbology::VALIDATION_ORDER`] (USS-39 first,
//! then USS-128). Shape and checksum mismatches are recorded per symbology
//! and swallowed; only a code no symbology accepts becomes an error.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::config::ValidatorConfig;
use crate::error::{PayloadError, Rejection, TrackingValidationError};
use crate::grammar::{match_shape, uss128, uss39};
use crate::models::{CheckRule, NormalizedCode, Symbology, ValidCode};
use crate::normalizer::normalize;

/// Outcome of checking one symbology
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    /// Symbology tried
    pub symbology: Symbology,
    /// Matching rule, or why it was rejected
    pub outcome: Result<CheckRule, Rejection>,
}

/// Every attempt made for one input, in validation order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Input as given
    pub input: String,
    /// Input after whitespace removal
    pub normalized: NormalizedCode,
    /// One entry per symbology
    pub attempts: Vec<Attempt>,
}

impl ValidationReport {
    /// First accepting symbology and rule, matching what `validate` returns
    pub fn accepted(&self) -> Option<(Symbology, CheckRule)> {
        self.attempts.iter().find_map(|a| match a.outcome {
            Ok(rule) => Some((a.symbology, rule)),
            Err(_) => None,
        })
    }

    /// True if any symbology accepted the code
    pub fn is_valid(&self) -> bool {
        self.accepted().is_some()
    }
}

/// Tracking code validator
///
/// Holds only configuration; every call is independent, so one validator can
/// be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Validator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator with explicit settings
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Validator configured from the environment
    pub fn from_env() -> Self {
        Self::with_config(ValidatorConfig::from_env())
    }

    /// Active settings
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    fn rules_for(&self, symbology: Symbology) -> impl Iterator<Item = CheckRule> + '_ {
        symbology.rules().iter().copied().filter(move |rule| {
            symbology != Symbology::Uss39
                || *rule != CheckRule::Mod10
                || self.config.uss39_mod10_fallback
        })
    }

    /// Check a normalized code against one symbology
    pub fn attempt(
        &self,
        code: &NormalizedCode,
        symbology: Symbology,
    ) -> Result<CheckRule, Rejection> {
        let Some(candidate) = match_shape(code, symbology) else {
            trace!(%symbology, code = %code, "shape mismatch");
            return Err(Rejection::ShapeMismatch);
        };

        let mut computed = Vec::with_capacity(2);
        for rule in self.rules_for(symbology) {
            let check = rule.check_digit(&candidate.payload);
            if check == candidate.declared_check {
                trace!(%symbology, %rule, check, "check digit matched");
                return Ok(rule);
            }
            computed.push((rule, check));
        }

        trace!(
            %symbology,
            declared = candidate.declared_check,
            ?computed,
            "checksum mismatch"
        );
        Err(Rejection::ChecksumMismatch {
            declared: candidate.declared_check,
            computed,
        })
    }

    /// Accept or reject a raw tracking code
    pub fn validate(&self, raw: &str) -> Result<ValidCode, TrackingValidationError> {
        let code = normalize(raw);

        for symbology in Symbology::VALIDATION_ORDER {
            if let Ok(rule) = self.attempt(&code, symbology) {
                debug!(code = %code, %symbology, %rule, "tracking code accepted");
                return Ok(ValidCode::new(code.into_string(), symbology, rule));
            }
        }

        debug!(input = raw, "tracking code rejected");
        Err(TrackingValidationError::InvalidTrackingNumber {
            value: raw.to_string(),
        })
    }

    /// Run every symbology and keep all outcomes
    pub fn explain(&self, raw: &str) -> ValidationReport {
        let normalized = normalize(raw);
        let attempts = Symbology::VALIDATION_ORDER
            .iter()
            .map(|&symbology| Attempt {
                symbology,
                outcome: self.attempt(&normalized, symbology),
            })
            .collect();

        ValidationReport {
            input: raw.to_string(),
            normalized,
            attempts,
        }
    }

    /// Validate many codes, preserving input order
    ///
    /// Runs on the rayon pool once the batch reaches
    /// `parallel_min_batch`.
    pub fn validate_batch<S>(
        &self,
        inputs: &[S],
    ) -> Vec<Result<ValidCode, TrackingValidationError>>
    where
        S: AsRef<str> + Sync,
    {
        if inputs.len() >= self.config.parallel_min_batch {
            debug!(count = inputs.len(), "validating batch in parallel");
            inputs.par_iter().map(|s| self.validate(s.as_ref())).collect()
        } else {
            debug!(count = inputs.len(), "validating batch sequentially");
            inputs.iter().map(|s| self.validate(s.as_ref())).collect()
        }
    }
}

/// Check digit for `payload` under the symbology's primary rule
///
/// USS-128 uses mod10, USS-39 uses mod11.
pub fn check_digit(symbology: Symbology, payload: &[u8]) -> u32 {
    symbology.primary_rule().check_digit(payload)
}

/// Append the check digit (and `US` for USS-39) to a partial code
///
/// The partial is whitespace-tolerant: 19-21 digits for USS-128, or two
/// alphanumerics followed by eight digits for USS-39.
pub fn complete(symbology: Symbology, partial: &str) -> Result<String, PayloadError> {
    let code = normalize(partial);
    let value = code.as_str();

    match symbology {
        Symbology::Uss128 => {
            let bad = value.chars().enumerate().find(|(_, c)| !c.is_ascii_digit());
            if let Some((position, found)) = bad {
                return Err(PayloadError::InvalidCharacter {
                    symbology,
                    position,
                    found,
                });
            }
            let (min, max) = (uss128::MIN_LEN - 1, uss128::MAX_LEN - 1);
            if !(min..=max).contains(&code.len()) {
                return Err(PayloadError::InvalidLength {
                    symbology,
                    expected: format!("{min}-{max}"),
                    actual: code.len(),
                });
            }
        }
        Symbology::Uss39 => {
            let expected = 2 + uss39::PAYLOAD_LEN;
            let bad = value.chars().enumerate().find(|&(i, c)| {
                if i < 2 {
                    !c.is_ascii_alphanumeric()
                } else {
                    !c.is_ascii_digit()
                }
            });
            if let Some((position, found)) = bad {
                return Err(PayloadError::InvalidCharacter {
                    symbology,
                    position,
                    found,
                });
            }
            if code.len() != expected {
                return Err(PayloadError::InvalidLength {
                    symbology,
                    expected: expected.to_string(),
                    actual: code.len(),
                });
            }
        }
    }
    let payload_start = match symbology {
        Symbology::Uss128 => 0,
        Symbology::Uss39 => 2,
    };
    let payload: Vec<u8> = value.as_bytes()[payload_start..]
        .iter()
        .map(|b| b - b'0')
        .collect();
    let check = check_digit(symbology, &payload);

    Ok(match symbology {
        Symbology::Uss128 => format!("{value}{check}"),
        Symbology::Uss39 => format!("{value}{check}{}", uss39::SUFFIX),
    })
}
