use thiserror::Error;

pub const SOURCE_BUCKET_VAR: &str = "SOURCE_BUCKET";
pub const DESTINATION_BUCKET_VAR: &str = "DESTINATION_BUCKET";
pub const REGION_VAR: &str = "RELAY_REGION";
pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must be configured")]
    Missing(&'static str),
}

/// Bucket relay settings, resolved once at cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub source_bucket: String,
    pub destination_bucket: String,
    pub region: String,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            non_blank(lookup(name)).ok_or(ConfigError::Missing(name))
        };

        Ok(Self {
            source_bucket: required(SOURCE_BUCKET_VAR)?,
            destination_bucket: required(DESTINATION_BUCKET_VAR)?,
            region: non_blank(lookup(REGION_VAR)).unwrap_or_else(|| DEFAULT_REGION.to_string()),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        move |name| values.get(name).cloned()
    }

    #[test]
    fn loads_buckets_and_defaults_region() {
        let config = RelayConfig::from_lookup(lookup_from(&[
            ("SOURCE_BUCKET", "incoming"),
            ("DESTINATION_BUCKET", "outgoing"),
        ]))
        .expect("config should load");

        assert_eq!(config.source_bucket, "incoming");
        assert_eq!(config.destination_bucket, "outgoing");
        assert_eq!(config.region, "us-east-1");
    }

    #[test]
    fn region_override_is_trimmed() {
        let config = RelayConfig::from_lookup(lookup_from(&[
            ("SOURCE_BUCKET", " incoming "),
            ("DESTINATION_BUCKET", "outgoing"),
            ("RELAY_REGION", " eu-west-1 "),
        ]))
        .expect("config should load");

        assert_eq!(config.source_bucket, "incoming");
        assert_eq!(config.region, "eu-west-1");
    }

    #[test]
    fn missing_source_bucket_fails_fast() {
        let error = RelayConfig::from_lookup(lookup_from(&[("DESTINATION_BUCKET", "outgoing")]))
            .expect_err("source bucket is required");
        assert_eq!(error, ConfigError::Missing("SOURCE_BUCKET"));
        assert_eq!(error.to_string(), "SOURCE_BUCKET must be configured");
    }

    #[test]
    fn blank_destination_bucket_is_rejected() {
        let error = RelayConfig::from_lookup(lookup_from(&[
            ("SOURCE_BUCKET", "incoming"),
            ("DESTINATION_BUCKET", "   "),
        ]))
        .expect_err("blank destination bucket is rejected");
        assert_eq!(error, ConfigError::Missing("DESTINATION_BUCKET"));
    }
}
