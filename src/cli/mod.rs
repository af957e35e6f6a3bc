mod parsers;
use parsers::*;

use crate::{check_all, report, AptosRest, CompareConfig};
use clap::Parser;
use eyre::{Context, Result};
use std::time::Duration;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Account to check on every endpoint, with or without `0x` and leading zeroes.
    #[arg(short, long, env = "APTOS_ACCOUNT")]
    account: Option<String>,

    /// First RPC endpoint, e.g. `https://fullnode.mainnet.aptoslabs.com/v1`.
    #[arg(long = "rpc-url-1", env = "APTOS_RPC_URL_1")]
    rpc_url_1: Option<String>,

    /// Second RPC endpoint.
    #[arg(long = "rpc-url-2", env = "APTOS_RPC_URL_2")]
    rpc_url_2: Option<String>,

    /// Third RPC endpoint.
    #[arg(long = "rpc-url-3", env = "APTOS_RPC_URL_3")]
    rpc_url_3: Option<String>,

    /// Used as the first endpoint when it is not given.
    #[arg(long = "rpc-url", env = "APTOS_RPC_URL")]
    rpc_url: Option<String>,

    /// Request timeout in seconds, no timeout by default.
    #[arg(long, env = "APTOS_RPC_TIMEOUT_SECS", value_parser = parse_timeout_secs)]
    timeout: Option<Duration>,

    /// Query all endpoints at the same time.
    #[arg(long)]
    concurrent: bool,
}

/// Main CLI entry point.
pub async fn cli() -> Result<()> {
    let cli = Cli::parse();

    let config = CompareConfig::new(
        cli.account.as_deref(),
        [
            cli.rpc_url_1.as_deref(),
            cli.rpc_url_2.as_deref(),
            cli.rpc_url_3.as_deref(),
        ],
        cli.rpc_url.as_deref(),
    )?
    .with_timeout(cli.timeout)
    .with_concurrency(cli.concurrent);
    log::info!(
        "Checking {} on {} endpoints",
        config.account,
        config.slots.len()
    );

    let query = AptosRest::new(config.timeout);
    let rows = check_all(&query, &config.slots, &config.account, config.concurrent).await;

    let failed = rows.iter().filter(|row| !row.is_ok()).count();
    if failed > 0 {
        log::warn!("{} of {} endpoints failed", failed, rows.len());
    }

    let mut stdout = std::io::stdout().lock();
    report::render(&mut stdout, &config.account, &rows).wrap_err("could not write report")?;

    Ok(())
}
