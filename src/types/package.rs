use serde::{Deserialize, Serialize};

/// Subscription level a user is on.
///
/// # Tier Capabilities
/// | Tier     | Forms | Dashboards | Users | Tokens/mo | AI          |
/// |----------|-------|------------|-------|-----------|-------------|
/// | Free     | 3     | 1          | 2     | 1k        | basic       |
/// | Standard | 25    | 5          | 10    | 50k       | advanced    |
/// | Premium  | ∞     | ∞          | 50    | ∞         | predictive  |
/// | Custom   | per contract, features listed on the user |
///
/// The numbers above are the built-in catalog; operators can ship their own
/// table (see [`crate::access::PackageCatalog`]).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PackageTier {
    Free,
    Standard,
    Premium,
    Custom,
}

impl PackageTier {
    pub const ALL: [PackageTier; 4] = [
        PackageTier::Free,
        PackageTier::Standard,
        PackageTier::Premium,
        PackageTier::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageTier::Free => "free",
            PackageTier::Standard => "standard",
            PackageTier::Premium => "premium",
            PackageTier::Custom => "custom",
        }
    }
}

impl std::fmt::Display for PackageTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PackageTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" => Ok(PackageTier::Free),
            "standard" => Ok(PackageTier::Standard),
            "premium" => Ok(PackageTier::Premium),
            "custom" => Ok(PackageTier::Custom),
            _ => Err(format!("unknown package tier: {}", s)),
        }
    }
}

/// A boolean capability gated by package tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Feature {
    #[serde(rename = "basicAI")]
    BasicAi,
    #[serde(rename = "advancedAI")]
    AdvancedAi,
    #[serde(rename = "predictiveAI")]
    PredictiveAi,
    #[serde(rename = "customBranding")]
    CustomBranding,
    #[serde(rename = "customIntegrations")]
    CustomIntegrations,
    #[serde(rename = "apiAccess")]
    ApiAccess,
    #[serde(rename = "dataExport")]
    DataExport,
    #[serde(rename = "prioritySupport")]
    PrioritySupport,
}

impl Feature {
    pub const ALL: [Feature; 8] = [
        Feature::BasicAi,
        Feature::AdvancedAi,
        Feature::PredictiveAi,
        Feature::CustomBranding,
        Feature::CustomIntegrations,
        Feature::ApiAccess,
        Feature::DataExport,
        Feature::PrioritySupport,
    ];

    /// Name used in catalog files and in a custom user's feature list.
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::BasicAi => "basicAI",
            Feature::AdvancedAi => "advancedAI",
            Feature::PredictiveAi => "predictiveAI",
            Feature::CustomBranding => "customBranding",
            Feature::CustomIntegrations => "customIntegrations",
            Feature::ApiAccess => "apiAccess",
            Feature::DataExport => "dataExport",
            Feature::PrioritySupport => "prioritySupport",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Feature {
    type Err = String;

    // Names are matched exactly: custom feature lists compare literally.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("unknown feature: {}", s))
    }
}

/// Sentinel limit value meaning "no ceiling".
pub const UNLIMITED: i64 = -1;

/// A numeric allowance gated by package tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Limit {
    #[serde(rename = "maxForms")]
    MaxForms,
    #[serde(rename = "maxDashboards")]
    MaxDashboards,
    #[serde(rename = "maxUsers")]
    MaxUsers,
    #[serde(rename = "monthlyTokens")]
    MonthlyTokens,
    /// Price of one seat beyond `maxUsers`, not a capacity.
    #[serde(rename = "additionalUserCost")]
    AdditionalUserCost,
}

impl Limit {
    pub const ALL: [Limit; 5] = [
        Limit::MaxForms,
        Limit::MaxDashboards,
        Limit::MaxUsers,
        Limit::MonthlyTokens,
        Limit::AdditionalUserCost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Limit::MaxForms => "maxForms",
            Limit::MaxDashboards => "maxDashboards",
            Limit::MaxUsers => "maxUsers",
            Limit::MonthlyTokens => "monthlyTokens",
            Limit::AdditionalUserCost => "additionalUserCost",
        }
    }

    /// The pay-as-you-go resource that tops up this limit, if any.
    pub fn resource_kind(&self) -> Option<ResourceKind> {
        RESOURCE_LIMITS
            .iter()
            .find(|(_, limit)| limit == self)
            .map(|(kind, _)| *kind)
    }
}

impl std::fmt::Display for Limit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Limit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Limit::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| format!("unknown limit: {}", s))
    }
}

/// Resource kinds that can be bought on top of a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Forms,
    Dashboards,
    Users,
    Tokens,
}

/// Pay-as-you-go resource ↔ package limit. Must agree with [`ResourceKind::limit`].
const RESOURCE_LIMITS: [(ResourceKind, Limit); 4] = [
    (ResourceKind::Forms, Limit::MaxForms),
    (ResourceKind::Dashboards, Limit::MaxDashboards),
    (ResourceKind::Users, Limit::MaxUsers),
    (ResourceKind::Tokens, Limit::MonthlyTokens),
];

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Forms => "forms",
            ResourceKind::Dashboards => "dashboards",
            ResourceKind::Users => "users",
            ResourceKind::Tokens => "tokens",
        }
    }

    /// The package limit this resource adds capacity to.
    pub fn limit(&self) -> Limit {
        match self {
            ResourceKind::Forms => Limit::MaxForms,
            ResourceKind::Dashboards => Limit::MaxDashboards,
            ResourceKind::Users => Limit::MaxUsers,
            ResourceKind::Tokens => Limit::MonthlyTokens,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
