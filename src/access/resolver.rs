//! Feature and limit checks for a signed-in user.

use serde::Serialize;
use tracing::debug;

use super::PackageCatalog;
use crate::types::{Feature, Limit, PackageTier, UNLIMITED, User};

/// Answers "may this user do X?" for the dashboard.
///
/// Never fails: a missing user or package resolves to no features and zero
/// capacity.
#[derive(Debug, Clone, Copy)]
pub struct PackageAccess<'a> {
    user: Option<&'a User>,
    catalog: &'a PackageCatalog,
}

impl<'a> PackageAccess<'a> {
    pub fn new(user: Option<&'a User>, catalog: &'a PackageCatalog) -> Self {
        Self { user, catalog }
    }

    /// Resolve against the compiled-in catalog.
    pub fn with_builtin(user: Option<&'a User>) -> Self {
        Self::new(user, PackageCatalog::builtin())
    }

    fn package(&self) -> Option<PackageTier> {
        self.user.and_then(|u| u.package)
    }

    pub fn package_type(&self) -> Option<PackageTier> {
        self.package()
    }

    /// Custom packages use the user's own feature list instead of the tier table.
    pub fn has_feature(&self, feature: Feature) -> bool {
        let Some(package) = self.package() else {
            return false;
        };

        if package == PackageTier::Custom {
            return self
                .user
                .and_then(|u| u.package_features.as_ref())
                .is_some_and(|features| features.iter().any(|f| f == feature.as_str()));
        }

        self.catalog.feature(package, feature)
    }

    /// Package value for `limit`, `-1` for unlimited, 0 without a package.
    pub fn get_limit(&self, limit: Limit) -> i64 {
        match self.package() {
            Some(package) => self.catalog.limit(package, limit),
            None => 0,
        }
    }

    pub fn is_unlimited(&self, limit: Limit) -> bool {
        self.package().is_some() && self.get_limit(limit) == UNLIMITED
    }

    /// Purchased add-on capacity for the resource behind `limit`.
    pub fn pay_as_you_go_capacity(&self, limit: Limit) -> i64 {
        let Some(kind) = limit.resource_kind() else {
            return 0;
        };
        self.user
            .and_then(|u| u.pay_as_you_go_resources.as_ref())
            .map(|resources| resources.get(kind))
            .unwrap_or(0)
    }

    /// Package limit plus add-ons. An unlimited package stays unlimited.
    pub fn total_limit(&self, limit: Limit) -> i64 {
        let package_limit = self.get_limit(limit);
        if package_limit == UNLIMITED {
            return UNLIMITED;
        }
        package_limit.saturating_add(self.pay_as_you_go_capacity(limit))
    }

    /// Whether one more item may be created given `current` existing items.
    pub fn check_limit(&self, limit: Limit, current: i64) -> bool {
        if self.package().is_none() {
            return false;
        }
        if self.is_unlimited(limit) {
            return true;
        }
        current < self.total_limit(limit)
    }

    pub fn can_create_form(&self, current_count: i64) -> bool {
        let allowed = self.check_limit(Limit::MaxForms, current_count);
        debug!(
            current_count,
            package = ?self.package(),
            package_limit = self.get_limit(Limit::MaxForms),
            pay_as_you_go = self.pay_as_you_go_capacity(Limit::MaxForms),
            total = self.total_limit(Limit::MaxForms),
            allowed,
            "form creation check"
        );
        allowed
    }

    pub fn can_create_dashboard(&self, current_count: i64) -> bool {
        self.check_limit(Limit::MaxDashboards, current_count)
    }

    pub fn can_add_user(&self, current_count: i64) -> bool {
        self.check_limit(Limit::MaxUsers, current_count)
    }

    pub fn monthly_tokens(&self) -> i64 {
        self.get_limit(Limit::MonthlyTokens)
    }

    pub fn has_unlimited_tokens(&self) -> bool {
        self.is_unlimited(Limit::MonthlyTokens)
    }

    /// Either AI flag unlocks the advanced assistant.
    pub fn can_use_advanced_ai(&self) -> bool {
        self.has_feature(Feature::AdvancedAi) || self.has_feature(Feature::PredictiveAi)
    }

    pub fn can_use_custom_branding(&self) -> bool {
        self.has_feature(Feature::CustomBranding)
    }

    pub fn can_use_custom_integrations(&self) -> bool {
        self.has_feature(Feature::CustomIntegrations)
    }

    pub fn additional_user_cost(&self) -> i64 {
        self.get_limit(Limit::AdditionalUserCost)
    }

    /// Snapshot of every feature and limit, for display.
    pub fn entitlement_report(&self) -> EntitlementReport {
        EntitlementReport {
            package: self.package(),
            features: Feature::ALL
                .into_iter()
                .map(|feature| FeatureEntitlement {
                    feature,
                    enabled: self.has_feature(feature),
                })
                .collect(),
            limits: Limit::ALL
                .into_iter()
                .map(|limit| LimitEntitlement {
                    limit,
                    package: self.get_limit(limit),
                    pay_as_you_go: self.pay_as_you_go_capacity(limit),
                    total: self.total_limit(limit),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitlementReport {
    pub package: Option<PackageTier>,
    pub features: Vec<FeatureEntitlement>,
    pub limits: Vec<LimitEntitlement>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureEntitlement {
    pub feature: Feature,
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitEntitlement {
    pub limit: Limit,
    pub package: i64,
    pub pay_as_you_go: i64,
    pub total: i64,
}
