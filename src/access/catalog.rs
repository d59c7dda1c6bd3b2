//! Per-tier feature flags and numeric limits.
//!
//! The tables are configuration, not code: a default set is compiled in from
//! `config/packages.toml` and an operator may point at their own file. Either
//! way the catalog is built once and only read afterwards.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::LazyLock;

use serde::Deserialize;
use tracing::{debug, error};

use crate::types::{CatalogError, Feature, Limit, PackageTier, UNLIMITED};

const BUILTIN_CATALOG: &str = include_str!("../../config/packages.toml");

static BUILTIN: LazyLock<PackageCatalog> = LazyLock::new(|| {
    PackageCatalog::from_toml_str(BUILTIN_CATALOG).unwrap_or_else(|err| {
        // An empty catalog denies everything, which is the safe failure.
        error!(error = %err, "built-in package catalog is invalid");
        PackageCatalog::default()
    })
});

/// Feature flags and limits of a single tier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierEntry {
    features: HashMap<Feature, bool>,
    limits: HashMap<Limit, i64>,
}

impl TierEntry {
    pub fn feature(&self, feature: Feature) -> bool {
        self.features.get(&feature).copied().unwrap_or(false)
    }

    pub fn limit(&self, limit: Limit) -> i64 {
        self.limits.get(&limit).copied().unwrap_or(0)
    }
}

/// Immutable lookup table keyed by tier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageCatalog {
    tiers: HashMap<PackageTier, TierEntry>,
}

/// On-disk shape: `[tier.features]` and `[tier.limits]` tables.
#[derive(Debug, Deserialize)]
struct RawTier {
    #[serde(default)]
    features: BTreeMap<String, bool>,
    #[serde(default)]
    limits: BTreeMap<String, i64>,
}

impl PackageCatalog {
    /// The catalog shipped with the binary.
    pub fn builtin() -> &'static PackageCatalog {
        &BUILTIN
    }

    /// Parse a catalog from TOML text.
    ///
    /// Unknown tiers, feature names or limit names are rejected rather than
    /// ignored so a typo cannot silently turn a feature off.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let raw: BTreeMap<String, RawTier> = toml::from_str(content)?;

        let mut tiers = HashMap::with_capacity(raw.len());
        for (tier_name, raw_tier) in raw {
            let tier: PackageTier = tier_name
                .parse()
                .map_err(|_| CatalogError::UnknownTier(tier_name.clone()))?;

            let mut entry = TierEntry::default();

            for (name, enabled) in raw_tier.features {
                let feature: Feature =
                    name.parse().map_err(|_| CatalogError::UnknownFeature {
                        tier: tier_name.clone(),
                        feature: name.clone(),
                    })?;
                entry.features.insert(feature, enabled);
            }

            for (name, value) in raw_tier.limits {
                let limit: Limit = name.parse().map_err(|_| CatalogError::UnknownLimit {
                    tier: tier_name.clone(),
                    limit: name.clone(),
                })?;
                if value < 0 && value != UNLIMITED {
                    return Err(CatalogError::InvalidLimit {
                        tier: tier_name.clone(),
                        limit: name,
                        value,
                    });
                }
                entry.limits.insert(limit, value);
            }

            tiers.insert(tier, entry);
        }

        debug!(tiers = tiers.len(), "loaded package catalog");
        Ok(Self { tiers })
    }

    /// Load a catalog file from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn tier(&self, tier: PackageTier) -> Option<&TierEntry> {
        self.tiers.get(&tier)
    }

    /// Flag for `feature` on `tier`; undefined flags read as false.
    pub fn feature(&self, tier: PackageTier, feature: Feature) -> bool {
        self.tier(tier).is_some_and(|entry| entry.feature(feature))
    }

    /// Raw configured value, including the `-1` sentinel. Undefined reads as 0.
    pub fn limit(&self, tier: PackageTier, limit: Limit) -> i64 {
        self.tier(tier).map(|entry| entry.limit(limit)).unwrap_or(0)
    }

    pub fn is_unlimited(&self, tier: PackageTier, limit: Limit) -> bool {
        self.limit(tier, limit) == UNLIMITED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_parses() {
        let parsed = PackageCatalog::from_toml_str(BUILTIN_CATALOG).unwrap();
        assert_eq!(&parsed, PackageCatalog::builtin());
        for tier in PackageTier::ALL {
            assert!(parsed.tier(tier).is_some(), "missing tier {}", tier);
        }
    }

    #[test]
    fn test_is_unlimited_matches_raw_value() {
        let catalog = PackageCatalog::builtin();
        for tier in PackageTier::ALL {
            for limit in Limit::ALL {
                assert_eq!(
                    catalog.is_unlimited(tier, limit),
                    catalog.limit(tier, limit) == -1,
                    "{}.{}",
                    tier,
                    limit
                );
            }
        }
    }

    #[test]
    fn test_missing_entries_default_closed() {
        let catalog = PackageCatalog::from_toml_str(
            r#"
            [free.limits]
            maxForms = 3
            "#,
        )
        .unwrap();

        assert_eq!(catalog.limit(PackageTier::Free, Limit::MaxForms), 3);
        assert_eq!(catalog.limit(PackageTier::Free, Limit::MaxUsers), 0);
        assert!(!catalog.feature(PackageTier::Free, Feature::BasicAi));
        assert_eq!(catalog.limit(PackageTier::Premium, Limit::MaxForms), 0);
    }

    #[test]
    fn test_unknown_names_rejected() {
        let err = PackageCatalog::from_toml_str("[gold.limits]\nmaxForms = 1\n").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownTier(t) if t == "gold"));

        let err = PackageCatalog::from_toml_str("[free.features]\nteleport = true\n").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownFeature { .. }));

        let err = PackageCatalog::from_toml_str("[free.limits]\nmaxWidgets = 1\n").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownLimit { .. }));
    }

    #[test]
    fn test_negative_limit_other_than_sentinel_rejected() {
        let err = PackageCatalog::from_toml_str("[free.limits]\nmaxForms = -5\n").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidLimit { value: -5, .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("packages.toml");
        std::fs::write(&path, "[standard.limits]\nmaxForms = 40\n").unwrap();

        let catalog = PackageCatalog::load(&path).unwrap();
        assert_eq!(catalog.limit(PackageTier::Standard, Limit::MaxForms), 40);
    }
}
