use std::time::Duration;

/// Slot labels, checked in this order.
pub const SLOT_NAMES: [&str; 3] = ["RPC_1", "RPC_2", "RPC_3"];

/// A configured endpoint position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Label such as `RPC_1`.
    pub name: String,
    /// Raw URL as configured, empty if unset.
    pub url: String,
}

/// Configuration errors that stop the run before any endpoint is checked.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("APTOS_ACCOUNT is required")]
    MissingAccount,
}

#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// Account to check on every endpoint.
    pub account: String,
    pub slots: [Slot; 3],
    /// Per-request timeout, `None` for no timeout.
    pub timeout: Option<Duration>,
    /// Whether to query the endpoints concurrently.
    pub concurrent: bool,
}

/// Trims a value, treating empty ones as unset.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl CompareConfig {
    /// Creates the configuration from raw (possibly untrimmed) values.
    ///
    /// - `account` is required
    /// - `legacy_url` (`APTOS_RPC_URL`) is only used for the first slot, and only if it is unset
    pub fn new(
        account: Option<&str>,
        urls: [Option<&str>; 3],
        legacy_url: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let account = non_empty(account)
            .ok_or(ConfigError::MissingAccount)?
            .to_string();

        let mut urls = urls.map(non_empty);
        urls[0] = urls[0].or_else(|| non_empty(legacy_url));

        let slots = std::array::from_fn(|i| Slot {
            name: SLOT_NAMES[i].to_string(),
            url: urls[i].unwrap_or_default().to_string(),
        });

        Ok(Self {
            account,
            slots,
            timeout: None,
            concurrent: false,
        })
    }

    /// Sets a request timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enables concurrent checks.
    pub fn with_concurrency(mut self, concurrent: bool) -> Self {
        self.concurrent = concurrent;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_account() {
        let err = CompareConfig::new(None, [Some("https://a/v1"), None, None], None).unwrap_err();
        assert_eq!(err, ConfigError::MissingAccount);
        assert_eq!(err.to_string(), "APTOS_ACCOUNT is required");

        let err = CompareConfig::new(Some("   "), [None, None, None], None).unwrap_err();
        assert_eq!(err, ConfigError::MissingAccount);
    }

    #[test]
    fn test_slots_in_order() {
        let config = CompareConfig::new(
            Some(" 0x1 "),
            [Some(" https://a/v1 "), Some(""), Some("https://c/v1")],
            None,
        )
        .unwrap();

        assert_eq!(config.account, "0x1");
        let names: Vec<_> = config.slots.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, SLOT_NAMES);
        assert_eq!(config.slots[0].url, "https://a/v1");
        assert_eq!(config.slots[1].url, "");
        assert_eq!(config.slots[2].url, "https://c/v1");
        assert!(config.timeout.is_none());
        assert!(!config.concurrent);
    }

    #[test]
    fn test_legacy_url_only_backs_first_slot() {
        let config =
            CompareConfig::new(Some("0x1"), [None, None, None], Some("https://legacy/v1")).unwrap();
        assert_eq!(config.slots[0].url, "https://legacy/v1");
        assert_eq!(config.slots[1].url, "");
        assert_eq!(config.slots[2].url, "");

        let config = CompareConfig::new(
            Some("0x1"),
            [Some("https://one/v1"), None, None],
            Some("https://legacy/v1"),
        )
        .unwrap();
        assert_eq!(config.slots[0].url, "https://one/v1");

        // empty counts as unset
        let config = CompareConfig::new(
            Some("0x1"),
            [Some("  "), None, None],
            Some("https://legacy/v1"),
        )
        .unwrap();
        assert_eq!(config.slots[0].url, "https://legacy/v1");
    }
}
