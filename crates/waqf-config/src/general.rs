//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default number of institutions in the portfolio ranking.
const fn default_top_institutions() -> u32 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Cycle year to evaluate. `None` means the current UTC year.
    #[serde(default)]
    pub cycle_year: Option<i32>,

    /// Number of institutions shown in the portfolio ranking.
    #[serde(default = "default_top_institutions")]
    pub top_institutions: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            cycle_year: None,
            top_institutions: default_top_institutions(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.cycle_year, None);
        assert_eq!(config.top_institutions, 5);
    }
}
