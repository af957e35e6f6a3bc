use super::AccountAddress;
use async_trait::async_trait;
use eyre::Result;

/// A balance-query capability against some node.
///
/// A client is constructed per endpoint, accounts are parsed leniently,
/// and the APT balance is returned in octas.
#[async_trait]
pub trait BalanceQuery: Send + Sync {
    /// Client bound to a single endpoint.
    type Client: Send + Sync;

    /// Constructs a client for the given base URL, e.g. `https://host/v1`.
    fn connect(&self, base_url: &str) -> Result<Self::Client>;

    /// Parses an account identifier.
    fn parse_account(&self, account: &str) -> Result<AccountAddress>;

    /// Returns the APT balance of `account`, in octas.
    async fn apt_balance(&self, client: &Self::Client, account: &AccountAddress) -> Result<u64>;
}
