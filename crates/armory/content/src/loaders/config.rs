//! Build configuration loader.
//!
//! ```toml
//! limit = 10
//! compare = "Current"
//! unused = true
//!
//! [weights]
//! mob = 0.8
//! int = 0.0
//!
//! [minimums]
//! res = 30
//! ```
//!
//! Every key is optional. A value that is present overrides whatever the armory file
//! declared; a missing one leaves it alone.

use std::path::Path;

use armory_core::{ArmoryError, Criteria, Stat, Stats, validate_limit};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Optional per-stat values, keyed by short stat name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatTable<T> {
    #[serde(default, alias = "mobility", skip_serializing_if = "Option::is_none")]
    pub mob: Option<T>,
    #[serde(default, alias = "resilience", skip_serializing_if = "Option::is_none")]
    pub res: Option<T>,
    #[serde(default, alias = "recovery", skip_serializing_if = "Option::is_none")]
    pub rec: Option<T>,
    #[serde(default, alias = "discipline", skip_serializing_if = "Option::is_none")]
    pub dis: Option<T>,
    #[serde(default, alias = "intellect", skip_serializing_if = "Option::is_none")]
    pub int: Option<T>,
    #[serde(default, alias = "strength", skip_serializing_if = "Option::is_none")]
    pub str: Option<T>,
}

impl<T: Copy> StatTable<T> {
    pub fn get(&self, stat: Stat) -> Option<T> {
        match stat {
            Stat::Mob => self.mob,
            Stat::Res => self.res,
            Stat::Rec => self.rec,
            Stat::Dis => self.dis,
            Stat::Int => self.int,
            Stat::Str => self.str,
        }
    }

    pub fn set(&mut self, stat: Stat, value: Option<T>) {
        let slot = match stat {
            Stat::Mob => &mut self.mob,
            Stat::Res => &mut self.res,
            Stat::Rec => &mut self.rec,
            Stat::Dis => &mut self.dis,
            Stat::Int => &mut self.int,
            Stat::Str => &mut self.str,
        };
        *slot = value;
    }

    /// Stats that have a value, in display order.
    pub fn entries(&self) -> impl Iterator<Item = (Stat, T)> + '_ {
        Stat::all()
            .into_iter()
            .filter_map(|stat| self.get(stat).map(|value| (stat, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }

    /// Values from `other` replace ours where present.
    #[must_use]
    pub fn overlay(mut self, other: &Self) -> Self {
        for (stat, value) in other.entries() {
            self.set(stat, Some(value));
        }
        self
    }
}

/// Settings for the `build` command.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Maximum number of results. Negative values are rejected when applied.
    #[serde(default)]
    pub limit: Option<i64>,
    /// Name of the declared suit to compare results against.
    #[serde(default)]
    pub compare: Option<String>,
    /// Report pieces unused by every result.
    #[serde(default)]
    pub unused: Option<bool>,
    #[serde(default)]
    pub weights: StatTable<f64>,
    #[serde(default)]
    pub minimums: StatTable<i32>,
}

impl BuildConfig {
    /// Layers `other` on top of `self`.
    #[must_use]
    pub fn overlay(self, other: &BuildConfig) -> BuildConfig {
        BuildConfig {
            limit: other.limit.or(self.limit),
            compare: other.compare.clone().or(self.compare),
            unused: other.unused.or(self.unused),
            weights: self.weights.overlay(&other.weights),
            minimums: self.minimums.overlay(&other.minimums),
        }
    }

    /// Applies the configured values to `criteria`, validating each one.
    pub fn apply(&self, criteria: &mut Criteria) -> Result<(), ArmoryError> {
        if let Some(limit) = self.limit {
            criteria.limit = validate_limit(limit)?;
        }
        for (stat, weight) in self.weights.entries() {
            criteria.weights.set(stat, weight)?;
        }
        if !self.minimums.is_empty() {
            let mut minimums = criteria.minimums;
            for (stat, value) in self.minimums.entries() {
                minimums.set(stat, value);
            }
            criteria.minimums = Stats::bounded(*minimums.values())?;
        }
        Ok(())
    }

    pub fn show_unused(&self) -> bool {
        self.unused.unwrap_or(false)
    }
}

/// Loader for build configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load build config from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing BuildConfig
    ///
    /// # Returns
    ///
    /// Returns a BuildConfig.
    pub fn load(path: &Path) -> LoadResult<BuildConfig> {
        let content = read_file(path)?;
        let config: BuildConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML {}: {}", path.display(), e))?;

        tracing::debug!(path = %path.display(), "loaded build config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use armory_core::Weights;

    use super::*;

    const SAMPLE: &str = r#"
limit = 10
compare = "Current"

[weights]
mob = 0.8
intellect = 0.0

[minimums]
res = 30
"#;

    #[test]
    fn parses_partial_tables() {
        let config: BuildConfig = toml::from_str(SAMPLE).unwrap();
        assert_eq!(config.limit, Some(10));
        assert_eq!(config.compare.as_deref(), Some("Current"));
        assert_eq!(config.unused, None);
        assert_eq!(config.weights.get(Stat::Mob), Some(0.8));
        assert_eq!(config.weights.get(Stat::Int), Some(0.0));
        assert_eq!(config.weights.get(Stat::Res), None);
        assert_eq!(config.minimums.entries().collect::<Vec<_>>(), [(Stat::Res, 30)]);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<BuildConfig>("limt = 3").is_err());
        assert!(toml::from_str::<BuildConfig>("[weights]\nspeed = 1.0").is_err());
    }

    #[test]
    fn apply_overrides_only_present_values() {
        let config: BuildConfig = toml::from_str(SAMPLE).unwrap();
        let mut criteria = Criteria {
            weights: Weights::new([1.0, 0.5, 1.0, 1.0, 1.0, 1.0]).unwrap(),
            minimums: Stats::new([20; 6]),
            limit: 5,
        };
        config.apply(&mut criteria).unwrap();

        assert_eq!(criteria.limit, 10);
        assert_eq!(criteria.weights.values(), &[0.8, 0.5, 1.0, 1.0, 0.0, 1.0]);
        assert_eq!(criteria.minimums, Stats::new([20, 30, 20, 20, 20, 20]));
    }

    #[test]
    fn apply_validates_values() {
        let mut criteria = Criteria::default();

        let config = BuildConfig {
            limit: Some(-1),
            ..BuildConfig::default()
        };
        assert_eq!(
            config.apply(&mut criteria),
            Err(ArmoryError::InvalidLimit(-1))
        );

        let mut config = BuildConfig::default();
        config.minimums.dis = Some(-5);
        assert_eq!(
            config.apply(&mut criteria),
            Err(ArmoryError::NegativeStat {
                stat: Stat::Dis,
                value: -5
            })
        );

        let mut config = BuildConfig::default();
        config.minimums.mob = Some(Stats::MAX_VALUE + 1);
        assert!(matches!(
            config.apply(&mut criteria),
            Err(ArmoryError::StatTooLarge { stat: Stat::Mob, .. })
        ));

        let mut config = BuildConfig::default();
        config.weights.str = Some(-0.5);
        assert!(matches!(
            config.apply(&mut criteria),
            Err(ArmoryError::InvalidWeight { stat: Stat::Str, .. })
        ));
    }

    #[test]
    fn overlay_prefers_the_upper_layer() {
        let file: BuildConfig = toml::from_str(SAMPLE).unwrap();
        let mut flags = BuildConfig {
            unused: Some(true),
            ..BuildConfig::default()
        };
        flags.weights.mob = Some(2.0);

        let merged = file.overlay(&flags);
        assert_eq!(merged.limit, Some(10));
        assert!(merged.show_unused());
        assert_eq!(merged.weights.get(Stat::Mob), Some(2.0));
        assert_eq!(merged.weights.get(Stat::Int), Some(0.0));
        assert_eq!(merged.minimums.get(Stat::Res), Some(30));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{SAMPLE}").unwrap();
        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.limit, Some(10));

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        write!(bad, "limit = \"many\"").unwrap();
        let err = ConfigLoader::load(bad.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config TOML"));
    }
}
