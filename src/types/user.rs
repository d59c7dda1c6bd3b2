use serde::{Deserialize, Serialize};

use super::{PackageTier, ResourceKind};

/// Which dashboard a signed-in user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Owns the organization: builds forms, reviews every employee's responses.
    #[serde(alias = "directeur")]
    Director,
    /// Fills in forms and may amend their own recent responses.
    #[serde(alias = "employe")]
    Employee,
}

/// The session user as handed over by the authentication layer.
///
/// Only the fields that drive entitlements and views are modelled; everything
/// else in the session document is ignored on deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub role: Option<Role>,

    /// None when the account has no subscription yet.
    #[serde(default)]
    pub package: Option<PackageTier>,

    /// Explicit feature list, only read for [`PackageTier::Custom`].
    #[serde(default)]
    pub package_features: Option<Vec<String>>,

    #[serde(default)]
    pub pay_as_you_go_resources: Option<PayAsYouGoResources>,
}

impl User {
    pub fn with_package(package: PackageTier) -> Self {
        Self {
            package: Some(package),
            ..Self::default()
        }
    }
}

/// Extra capacity bought on top of the package, per resource kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayAsYouGoResources {
    #[serde(default)]
    pub forms: Option<i64>,
    #[serde(default)]
    pub dashboards: Option<i64>,
    #[serde(default)]
    pub users: Option<i64>,
    #[serde(default)]
    pub tokens: Option<i64>,
}

impl PayAsYouGoResources {
    /// Purchased amount for `kind`, 0 when nothing was bought.
    ///
    /// Add-ons only ever add capacity; negative amounts read as 0.
    pub fn get(&self, kind: ResourceKind) -> i64 {
        let value = match kind {
            ResourceKind::Forms => self.forms,
            ResourceKind::Dashboards => self.dashboards,
            ResourceKind::Users => self.users,
            ResourceKind::Tokens => self.tokens,
        };
        value.unwrap_or(0).max(0)
    }
}
