//! Package entitlements: which features a user may use and how much they
//! may create.

mod catalog;
mod resolver;

pub use catalog::{PackageCatalog, TierEntry};
pub use resolver::{EntitlementReport, FeatureEntitlement, LimitEntitlement, PackageAccess};
