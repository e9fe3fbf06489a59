use anyhow::Result;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a month's budget is turned into a per-day amount for partial months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DailyRatePolicy {
    /// Truncate `amount / days_in_month` toward zero to whole units before
    /// multiplying by the day count. Matches the historical figures.
    #[default]
    Truncate,
    /// Price a segment as `amount * days / days_in_month` without truncation
    Exact,
}

impl fmt::Display for DailyRatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DailyRatePolicy::Truncate => write!(f, "truncate"),
            DailyRatePolicy::Exact => write!(f, "exact"),
        }
    }
}

/// Configuration for proration queries
#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
pub struct AccountingConfig {
    /// Daily rate policy applied to partial months
    #[clap(long, env, value_enum, default_value_t = DailyRatePolicy::Truncate)]
    pub daily_rate_policy: DailyRatePolicy,
}

impl Default for AccountingConfig {
    fn default() -> Self {
        Self {
            daily_rate_policy: DailyRatePolicy::Truncate,
        }
    }
}

impl AccountingConfig {
    pub fn new(daily_rate_policy: DailyRatePolicy) -> Self {
        Self { daily_rate_policy }
    }

    /// Read settings from the environment only (DAILY_RATE_POLICY)
    pub fn from_env() -> Result<Self> {
        Ok(Self::try_parse_from(["accounting"])?)
    }
}
