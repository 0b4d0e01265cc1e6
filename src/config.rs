use std::{env, fmt::Display, str::FromStr, sync::LazyLock};

use thiserror::Error;
use tracing::{info, warn};

use crate::content::Collection;

pub static SITE_CONFIG: LazyLock<SiteConfig> = LazyLock::new(SiteConfig::from_env);

const FIRESTORE_BASE: &str = "https://firestore.googleapis.com/v1";
const DEFAULT_DATABASE: &str = "(default)";
const DEFAULT_PAGE_SIZE: u32 = 300;
const MAX_PAGE_SIZE: u32 = 1000;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error("{key} must be between {min} and {max}, got {value}")]
    OutOfRange {
        key: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirestoreConfig {
    pub project_id: String,
    pub database: String,
    pub api_key: Option<String>,
    pub page_size: u32,
    pub timeout_secs: u64,
}

impl FirestoreConfig {
    pub fn collection_url(&self, collection: Collection) -> String {
        format!(
            "{FIRESTORE_BASE}/projects/{}/databases/{}/documents/{}",
            self.project_id,
            self.database,
            collection.name()
        )
    }
}

/// Server-side settings read once from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    /// `None` serves the content bundled into the binary.
    pub firestore: Option<FirestoreConfig>,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let Some(project_id) = lookup("PORTFOLIO_FIRESTORE_PROJECT") else {
            info!("PORTFOLIO_FIRESTORE_PROJECT not set, serving embedded content");
            return Self::default();
        };

        let database = lookup("PORTFOLIO_FIRESTORE_DATABASE").unwrap_or_else(|| {
            info!("PORTFOLIO_FIRESTORE_DATABASE not set, using default: {DEFAULT_DATABASE}");
            DEFAULT_DATABASE.to_string()
        });

        let page_size = or_default(
            parse::<u32>(&lookup, "PORTFOLIO_FIRESTORE_PAGE_SIZE").and_then(|v| {
                v.map(|v| in_range("PORTFOLIO_FIRESTORE_PAGE_SIZE", v, 1, MAX_PAGE_SIZE))
                    .transpose()
            }),
            "PORTFOLIO_FIRESTORE_PAGE_SIZE",
            DEFAULT_PAGE_SIZE,
        );

        let timeout_secs = or_default(
            parse::<u64>(&lookup, "PORTFOLIO_FETCH_TIMEOUT_SECS"),
            "PORTFOLIO_FETCH_TIMEOUT_SECS",
            DEFAULT_TIMEOUT_SECS,
        );

        info!("Reading content from Firestore project {project_id}");
        Self {
            firestore: Some(FirestoreConfig {
                project_id,
                database,
                api_key: lookup("PORTFOLIO_FIRESTORE_API_KEY"),
                page_size,
                timeout_secs,
            }),
        }
    }
}

fn parse<T: FromStr>(
    lookup: impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T::Err: Display,
{
    lookup(key)
        .map(|value| {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|e| ConfigError::Invalid {
                key,
                value,
                reason: e.to_string(),
            })
        })
        .transpose()
}

fn in_range(key: &'static str, value: u32, min: u32, max: u32) -> Result<u32, ConfigError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange {
            key,
            value,
            min,
            max,
        })
    }
}

fn or_default<T: Display + Copy>(
    parsed: Result<Option<T>, ConfigError>,
    key: &str,
    default: T,
) -> T {
    match parsed {
        Ok(Some(value)) => value,
        Ok(None) => {
            info!("{key} not set, using default: {default}");
            default
        }
        Err(e) => {
            warn!("{e}, using default: {default}");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> SiteConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SiteConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_no_project_means_embedded() {
        assert_eq!(config(&[]).firestore, None);
        assert_eq!(config(&[("PORTFOLIO_FIRESTORE_PROJECT", "  ")]).firestore, None);
    }

    #[test]
    fn test_defaults() {
        let fs = config(&[("PORTFOLIO_FIRESTORE_PROJECT", "my-site")])
            .firestore
            .unwrap();
        assert_eq!(fs.project_id, "my-site");
        assert_eq!(fs.database, "(default)");
        assert_eq!(fs.api_key, None);
        assert_eq!(fs.page_size, 300);
        assert_eq!(fs.timeout_secs, 10);
        assert_eq!(
            fs.collection_url(Collection::Projects),
            "https://firestore.googleapis.com/v1/projects/my-site/databases/(default)/documents/Projects"
        );
    }

    #[test]
    fn test_explicit_values() {
        let fs = config(&[
            ("PORTFOLIO_FIRESTORE_PROJECT", "my-site"),
            ("PORTFOLIO_FIRESTORE_DATABASE", "content"),
            ("PORTFOLIO_FIRESTORE_API_KEY", "k"),
            ("PORTFOLIO_FIRESTORE_PAGE_SIZE", "50"),
            ("PORTFOLIO_FETCH_TIMEOUT_SECS", " 3 "),
        ])
        .firestore
        .unwrap();
        assert_eq!(fs.database, "content");
        assert_eq!(fs.api_key.as_deref(), Some("k"));
        assert_eq!(fs.page_size, 50);
        assert_eq!(fs.timeout_secs, 3);
        assert!(fs.collection_url(Collection::Experience).ends_with("/content/documents/Experience"));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let fs = config(&[
            ("PORTFOLIO_FIRESTORE_PROJECT", "my-site"),
            ("PORTFOLIO_FIRESTORE_PAGE_SIZE", "5000"),
            ("PORTFOLIO_FETCH_TIMEOUT_SECS", "soon"),
        ])
        .firestore
        .unwrap();
        assert_eq!(fs.page_size, 300);
        assert_eq!(fs.timeout_secs, 10);

        let fs = config(&[
            ("PORTFOLIO_FIRESTORE_PROJECT", "my-site"),
            ("PORTFOLIO_FIRESTORE_PAGE_SIZE", "0"),
        ])
        .firestore
        .unwrap();
        assert_eq!(fs.page_size, 300);
    }

    #[test]
    fn test_errors() {
        let lookup = |_: &str| Some("abc".to_string());
        assert!(matches!(
            parse::<u32>(lookup, "X"),
            Err(ConfigError::Invalid { key: "X", .. })
        ));
        assert_eq!(
            in_range("Y", 0, 1, 10),
            Err(ConfigError::OutOfRange {
                key: "Y",
                value: 0,
                min: 1,
                max: 10
            })
        );
    }
}
