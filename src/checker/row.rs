use std::time::Duration;

/// Octas per APT, the chain has 8 decimals.
pub const OCTAS_PER_APT: f64 = 100_000_000.0;

/// Converts octas to APT.
#[inline(always)]
pub fn octas_to_apt(octas: u64) -> f64 {
    octas as f64 / OCTAS_PER_APT
}

/// Why a single endpoint check did not produce a balance.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// No usable URL configured for the slot.
    #[error("missing RPC URL (set {env_key})")]
    MissingEndpoint { env_key: String },
    /// The endpoint URL was rejected when constructing the client.
    #[error("NewClient: {0:#}")]
    ClientConstruction(eyre::Report),
    /// The account failed lenient parsing.
    #[error("invalid APTOS_ACCOUNT: {0:#}")]
    InvalidAccount(eyre::Report),
    /// The balance query itself failed, message is the provider's verbatim.
    #[error("{0:#}")]
    Query(eyre::Report),
}

/// A successful balance reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balance {
    pub octas: u64,
    pub apt: f64,
}

impl From<u64> for Balance {
    fn from(octas: u64) -> Self {
        Self {
            octas,
            apt: octas_to_apt(octas),
        }
    }
}

/// Result of checking one endpoint.
#[derive(Debug)]
pub struct ResultRow {
    /// Slot label, e.g. `RPC_1`.
    pub name: String,
    /// Normalized base URL, may be empty.
    pub base_url: String,
    /// Time spent in the balance query, zero if it was never sent.
    pub latency: Duration,
    pub outcome: Result<Balance, CheckError>,
}

impl ResultRow {
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn octas(&self) -> Option<u64> {
        self.outcome.as_ref().ok().map(|b| b.octas)
    }

    pub fn apt(&self) -> Option<f64> {
        self.outcome.as_ref().ok().map(|b| b.apt)
    }

    pub fn error(&self) -> Option<&CheckError> {
        self.outcome.as_ref().err()
    }
}
