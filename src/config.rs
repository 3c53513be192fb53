//! Validator settings
//!
//! Defaults are fixed; `ValidatorConfig::from_env` lets a deployment override
//! them through environment variables, read once per process.

use std::sync::OnceLock;

/// Default minimum batch size before `validate_batch` goes parallel
pub const DEFAULT_PARALLEL_MIN_BATCH: usize = 64;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

static USS39_MOD10_FALLBACK: OnceLock<bool> = OnceLock::new();

pub(crate) fn env_uss39_mod10_fallback() -> bool {
    *USS39_MOD10_FALLBACK.get_or_init(|| parse_env_bool_u8("TRACK_USS39_MOD10_FALLBACK", true))
}

static PARALLEL_MIN_BATCH: OnceLock<usize> = OnceLock::new();

pub(crate) fn env_parallel_min_batch() -> usize {
    *PARALLEL_MIN_BATCH.get_or_init(|| {
        parse_env_usize("TRACK_PARALLEL_MIN_BATCH", DEFAULT_PARALLEL_MIN_BATCH).max(1)
    })
}

/// Settings for a [`crate::Validator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Accept USS-39 codes whose check digit matches the mod10 rule
    pub uss39_mod10_fallback: bool,
    /// Batches at least this large are validated on the rayon pool
    pub parallel_min_batch: usize,
}

impl ValidatorConfig {
    /// Defaults overridden by `TRACK_USS39_MOD10_FALLBACK` (0/1) and
    /// `TRACK_PARALLEL_MIN_BATCH`
    pub fn from_env() -> Self {
        Self {
            uss39_mod10_fallback: env_uss39_mod10_fallback(),
            parallel_min_batch: env_parallel_min_batch(),
        }
    }

    /// Toggle the USS-39 mod10 fallback
    pub fn with_uss39_mod10_fallback(mut self, enabled: bool) -> Self {
        self.uss39_mod10_fallback = enabled;
        self
    }

    /// Set the parallel batch threshold (clamped to at least 1)
    pub fn with_parallel_min_batch(mut self, min_batch: usize) -> Self {
        self.parallel_min_batch = min_batch.max(1);
        self
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            uss39_mod10_fallback: true,
            parallel_min_batch: DEFAULT_PARALLEL_MIN_BATCH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ValidatorConfig::default();
        assert!(config.uss39_mod10_fallback);
        assert_eq!(config.parallel_min_batch, DEFAULT_PARALLEL_MIN_BATCH);
    }

    #[test]
    fn test_builders() {
        let config = ValidatorConfig::default()
            .with_uss39_mod10_fallback(false)
            .with_parallel_min_batch(0);
        assert!(!config.uss39_mod10_fallback);
        assert_eq!(config.parallel_min_batch, 1);
    }

    #[test]
    fn test_parse_env_missing_uses_default() {
        assert_eq!(parse_env_usize("TRACK_TEST_UNSET_VARIABLE", 7), 7);
        assert!(parse_env_bool_u8("TRACK_TEST_UNSET_VARIABLE", true));
    }
}
