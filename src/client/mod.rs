mod traits;
pub use traits::BalanceQuery;

pub use aptos_sdk::types::AccountAddress;

use aptos_sdk::{Aptos, AptosConfig};
use async_trait::async_trait;
use eyre::{eyre, Context, Result};
use std::{str::FromStr, time::Duration};

/// Hex characters in a full-length address.
const ADDRESS_HEX_LENGTH: usize = 64;

/// Balance queries through the Aptos SDK client.
#[derive(Debug, Clone, Default)]
pub struct AptosRest {
    /// Per-request timeout, `None` keeps the SDK default.
    timeout: Option<Duration>,
}

impl AptosRest {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

/// Parses an account leniently, the `0x` prefix and leading zeroes are optional.
///
/// The address is padded to its long form before handing it to the SDK parser.
pub fn parse_account_relaxed(value: &str) -> Result<AccountAddress> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    if digits.is_empty() || digits.len() > ADDRESS_HEX_LENGTH {
        return Err(eyre!(
            "address must have between 1 and {} hex characters, got {}",
            ADDRESS_HEX_LENGTH,
            digits.len()
        ));
    }

    let long_form = format!("0x{:0>width$}", digits, width = ADDRESS_HEX_LENGTH);
    AccountAddress::from_str(&long_form).wrap_err_with(|| format!("could not parse {}", value))
}

#[async_trait]
impl BalanceQuery for AptosRest {
    type Client = Aptos;

    fn connect(&self, base_url: &str) -> Result<Aptos> {
        let mut config = AptosConfig::custom(base_url).wrap_err("could not parse node URL")?;
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }

        Aptos::new(config).wrap_err("could not create Aptos client")
    }

    fn parse_account(&self, account: &str) -> Result<AccountAddress> {
        parse_account_relaxed(account)
    }

    async fn apt_balance(&self, client: &Aptos, account: &AccountAddress) -> Result<u64> {
        log::debug!("Querying APT balance of {}", account);
        client.get_balance(*account).await.map_err(Into::into)
    }
}
