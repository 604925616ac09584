use crate::error::PlannerResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default title for synthesized filler blocks
pub const DEFAULT_FILLER_TITLE: &str = "Break & Transition";

/// Options controlling day-schedule normalization
///
/// Constructed by the caller and passed by value into every call; there is
/// no shared defaults object at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Clock time the day starts at (HH:MM)
    pub start_time: String,
    /// Clock time the day ends at (HH:MM)
    pub end_time: String,
    /// Smallest duration any block is allowed to keep, in minutes
    pub min_block_minutes: u32,
    /// Title given to synthesized filler blocks
    pub filler_title: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            start_time: "09:00".to_string(),
            end_time: "17:00".to_string(),
            min_block_minutes: 5,
            filler_title: DEFAULT_FILLER_TITLE.to_string(),
        }
    }
}

impl NormalizeOptions {
    /// Load options from a TOML file, merging the file's fields over the
    /// defaults. A missing file yields the defaults unchanged.
    pub fn load_from_file(path: impl AsRef<Path>) -> PlannerResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let options = toml::from_str(&content)?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = NormalizeOptions::default();
        assert_eq!(options.start_time, "09:00");
        assert_eq!(options.end_time, "17:00");
        assert_eq!(options.min_block_minutes, 5);
        assert_eq!(options.filler_title, "Break & Transition");
    }

    #[test]
    fn test_partial_toml_merges_over_defaults() {
        let options: NormalizeOptions =
            toml::from_str("end_time = \"16:00\"\nmin_block_minutes = 10\n").unwrap();
        assert_eq!(options.start_time, "09:00");
        assert_eq!(options.end_time, "16:00");
        assert_eq!(options.min_block_minutes, 10);
        assert_eq!(options.filler_title, "Break & Transition");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let options = NormalizeOptions::load_from_file("config/does-not-exist.toml").unwrap();
        assert_eq!(options.end_time, "17:00");
    }
}
