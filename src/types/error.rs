use thiserror::Error;

/// Errors loading the package catalog tables.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("unknown package tier: {0}")]
    UnknownTier(String),

    #[error("unknown feature `{feature}` for tier {tier}")]
    UnknownFeature { tier: String, feature: String },

    #[error("unknown limit `{limit}` for tier {tier}")]
    UnknownLimit { tier: String, limit: String },

    #[error("invalid value {value} for {tier}.{limit} (use -1 for unlimited)")]
    InvalidLimit {
        tier: String,
        limit: String,
        value: i64,
    },

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors loading users and dashboard snapshots.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
