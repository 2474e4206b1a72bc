use crate::types::{Amount, JurisdictionCode};
use serde::{Deserialize, Serialize};

/// A static informational warning attached to every evaluation of one
/// jurisdiction, e.g. an exchange-rate caveat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JurisdictionNotice {
    pub jurisdiction_code: JurisdictionCode,
    pub message:           String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Multiplier applied to a scheme's limit for joint accounts.
    pub joint_account_multiplier: f64,
    /// Deposits above this raw amount get a higher-limit jurisdiction
    /// recommendation when the scheme's own limit is lower.
    pub high_balance_threshold: Amount,
    /// Upper bound of the temporary high balance eligibility window.
    pub temporary_high_balance_ceiling: Amount,
    #[serde(default)]
    pub jurisdiction_notices: Vec<JurisdictionNotice>,
}

impl ValidatorConfig {
    /// Load from the data/ directory.
    /// Without a data directory, use ValidatorConfig::default().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = format!("{data_dir}/validator/validator_config.json");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: ValidatorConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        config.check()?;
        log::info!(
            "config: loaded validator config from {path} ({} jurisdiction notices)",
            config.jurisdiction_notices.len()
        );
        Ok(config)
    }

    /// Reject multipliers below 1 and thresholds that are negative or not finite.
    pub fn check(&self) -> anyhow::Result<()> {
        if !self.joint_account_multiplier.is_finite() || self.joint_account_multiplier < 1.0 {
            anyhow::bail!(
                "joint_account_multiplier must be at least 1, got {}",
                self.joint_account_multiplier
            );
        }
        for (name, value) in [
            ("high_balance_threshold", self.high_balance_threshold),
            ("temporary_high_balance_ceiling", self.temporary_high_balance_ceiling),
        ] {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("{name} must be a finite, non-negative amount, got {value}");
            }
        }
        Ok(())
    }

    /// Notices configured for `code`, in configuration order.
    pub fn notices_for<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.jurisdiction_notices
            .iter()
            .filter(move |n| n.jurisdiction_code == code)
            .map(|n| n.message.as_str())
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            joint_account_multiplier:       2.0,
            high_balance_threshold:         250_000.0,
            temporary_high_balance_ceiling: 500_000.0,
            jurisdiction_notices: vec![JurisdictionNotice {
                jurisdiction_code: "GB".into(),
                message:           "GBP protection limit may vary with exchange rates".into(),
            }],
        }
    }
}
