// WHY: The noun tables are the only runtime configuration surface; load extensions from JSON
// Options structs follow the Default-rules pattern so callers can override single fields

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::nouns::NounRegistry;

/// Extra noun exceptions, e.g.
/// `{"irregular": {"octopus": "octopodes"}, "defective": ["pokemon"]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NounConfig {
    #[serde(default)]
    pub irregular: BTreeMap<String, String>,
    #[serde(default)]
    pub defective: Vec<String>,
}

/// Outcome of applying a `NounConfig` to a registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigReport {
    pub added: usize,
    pub rejected: Vec<String>,
}

impl NounConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse noun config JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read noun config: {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("Invalid noun config: {}", path.display()))?;
        info!(
            path = %path.display(),
            irregular = config.irregular.len(),
            defective = config.defective.len(),
            "Loaded noun config"
        );
        Ok(config)
    }

    /// Register every entry; rejected entries are reported, not fatal
    pub fn apply(&self, registry: &NounRegistry) -> ConfigReport {
        let mut report = ConfigReport::default();
        for (singular, plural) in &self.irregular {
            if registry.add_irregular(singular, plural) {
                report.added += 1;
            } else {
                report.rejected.push(format!("{singular} -> {plural}"));
            }
        }
        for noun in &self.defective {
            if registry.add_defective(noun) {
                report.added += 1;
            } else {
                report.rejected.push(noun.clone());
            }
        }
        report
    }
}

/// Tuning for fractional quantity rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityOptions {
    /// Absolute tolerance for the fractional part, inside (0, 1)
    pub accuracy: f64,
}

impl Default for QuantityOptions {
    fn default() -> Self {
        Self { accuracy: 1e-4 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_and_apply() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(
            file,
            r#"{{"irregular": {{"octopus": "octopodes", "goose": "gooses"}}, "defective": ["pokemon", "two words"]}}"#
        )
        .expect("Failed to write config");

        let config = NounConfig::load(file.path()).expect("Config should load");
        assert_eq!(config.irregular.len(), 2);

        let registry = NounRegistry::english();
        let report = config.apply(&registry);
        assert_eq!(report.added, 2);
        assert_eq!(report.rejected, vec!["goose -> gooses".to_string(), "two words".to_string()]);
        assert_eq!(registry.plural_of("octopus").as_deref(), Some("octopodes"));
        assert!(registry.is_defective("pokemon"));
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let config = NounConfig::from_json(r#"{"defective": ["sheep"]}"#).unwrap();
        assert!(config.irregular.is_empty());
        assert_eq!(config.defective, vec!["sheep"]);
    }

    #[test]
    fn test_load_errors_carry_context() {
        let err = NounConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read noun config"));

        let err = NounConfig::from_json(r#"{"plural": {}}"#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse noun config JSON"));
    }

    #[test]
    fn test_default_quantity_options() {
        assert_eq!(QuantityOptions::default().accuracy, 1e-4);
    }
}
