use crate::constants::{defaults, env as env_vars};
use crate::engine::synthesizer::RiskPolicy;
use crate::error::{PlaybookError, Result};

/// Engine configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Hard cap on traversal length; exceeding it is a graph defect
    pub max_traversal_depth: u32,
    /// Whether submissions must carry a non-empty rationale
    pub require_rationale: bool,
    /// Confidence-to-risk mapping used at synthesis time
    pub risk_policy: RiskPolicy,
    /// Capacity of the lifecycle event broadcast channel
    pub event_channel_capacity: usize,
    /// Bind address for the bundled web server
    pub bind_address: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_traversal_depth: defaults::MAX_TRAVERSAL_DEPTH,
            require_rationale: defaults::REQUIRE_RATIONALE,
            risk_policy: RiskPolicy::default(),
            event_channel_capacity: defaults::EVENT_CHANNEL_CAPACITY,
            bind_address: defaults::BIND_ADDRESS.to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(depth) = std::env::var(env_vars::MAX_TRAVERSAL_DEPTH) {
            config.max_traversal_depth = depth.parse().map_err(|e| {
                PlaybookError::ConfigurationError(format!("Invalid max_traversal_depth: {e}"))
            })?;
        }

        if let Ok(required) = std::env::var(env_vars::REQUIRE_RATIONALE) {
            config.require_rationale = required.parse().map_err(|e| {
                PlaybookError::ConfigurationError(format!("Invalid require_rationale: {e}"))
            })?;
        }

        if let Ok(low) = std::env::var(env_vars::RISK_LOW_THRESHOLD) {
            config.risk_policy.low_threshold = low.parse().map_err(|e| {
                PlaybookError::ConfigurationError(format!("Invalid risk low threshold: {e}"))
            })?;
        }

        if let Ok(medium) = std::env::var(env_vars::RISK_MEDIUM_THRESHOLD) {
            config.risk_policy.medium_threshold = medium.parse().map_err(|e| {
                PlaybookError::ConfigurationError(format!("Invalid risk medium threshold: {e}"))
            })?;
        }

        if let Ok(factor) = std::env::var(env_vars::RISK_FACTOR_THRESHOLD) {
            config.risk_policy.factor_threshold = factor.parse().map_err(|e| {
                PlaybookError::ConfigurationError(format!("Invalid risk factor threshold: {e}"))
            })?;
        }

        if let Ok(capacity) = std::env::var(env_vars::EVENT_CHANNEL_CAPACITY) {
            config.event_channel_capacity = capacity.parse().map_err(|e| {
                PlaybookError::ConfigurationError(format!("Invalid event channel capacity: {e}"))
            })?;
        }

        if let Ok(bind) = std::env::var(env_vars::BIND_ADDRESS) {
            config.bind_address = bind;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject threshold combinations that would make risk classification
    /// unreachable or nonsensical.
    pub fn validate(&self) -> Result<()> {
        let policy = &self.risk_policy;
        for (name, value) in [
            ("low_threshold", policy.low_threshold),
            ("medium_threshold", policy.medium_threshold),
            ("factor_threshold", policy.factor_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) || value.is_nan() {
                return Err(PlaybookError::ConfigurationError(format!(
                    "risk {name} must be within [0, 1], got {value}"
                )));
            }
        }

        if policy.medium_threshold > policy.low_threshold {
            return Err(PlaybookError::ConfigurationError(format!(
                "risk medium_threshold ({}) must not exceed low_threshold ({})",
                policy.medium_threshold, policy.low_threshold
            )));
        }

        if self.max_traversal_depth == 0 {
            return Err(PlaybookError::ConfigurationError(
                "max_traversal_depth must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_traversal_depth, 128);
        assert!(config.require_rationale);
    }

    #[test]
    fn test_inverted_thresholds_are_rejected() {
        let mut config = EngineConfig::default();
        config.risk_policy.medium_threshold = 0.9;
        config.risk_policy.low_threshold = 0.5;
        assert!(matches!(
            config.validate(),
            Err(PlaybookError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_out_of_range_threshold_is_rejected() {
        let mut config = EngineConfig::default();
        config.risk_policy.factor_threshold = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_depth_is_rejected() {
        let config = EngineConfig {
            max_traversal_depth: 0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
