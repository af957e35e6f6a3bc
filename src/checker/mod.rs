mod normalize;
pub use normalize::normalize_node_url;

mod row;
pub use row::{octas_to_apt, Balance, CheckError, ResultRow, OCTAS_PER_APT};

use crate::{client::BalanceQuery, configurations::Slot};
use futures_util::future::join_all;
use std::time::{Duration, Instant};

/// Environment variable suggested when a slot has no URL, e.g. `RPC_2` becomes `APTOS_RPC_URL_2`.
pub fn slot_env_key(name: &str) -> String {
    format!("APTOS_RPC_URL_{}", name.strip_prefix("RPC_").unwrap_or(name))
}

/// Checks the APT balance of `account` at a single endpoint.
///
/// Never fails, any error ends up within the returned row.
pub async fn check_one<Q: BalanceQuery>(query: &Q, name: &str, url: &str, account: &str) -> ResultRow {
    let base_url = normalize_node_url(url);
    let (latency, outcome) = match run_check(query, name, &base_url, account).await {
        Ok((latency, octas)) => (latency, Ok(Balance::from(octas))),
        Err((latency, err)) => {
            log::warn!("{} failed: {:#}", name, err);
            (latency, Err(err))
        }
    };

    ResultRow {
        name: name.to_string(),
        base_url,
        latency,
        outcome,
    }
}

/// Steps of a check, each returning early. Latency is zero unless the query was sent.
async fn run_check<Q: BalanceQuery>(
    query: &Q,
    name: &str,
    base_url: &str,
    account: &str,
) -> Result<(Duration, u64), (Duration, CheckError)> {
    if base_url.is_empty() {
        return Err((
            Duration::ZERO,
            CheckError::MissingEndpoint {
                env_key: slot_env_key(name),
            },
        ));
    }

    log::debug!("{}: connecting to {}", name, base_url);
    let client = query
        .connect(base_url)
        .map_err(|e| (Duration::ZERO, CheckError::ClientConstruction(e)))?;

    let address = query
        .parse_account(account)
        .map_err(|e| (Duration::ZERO, CheckError::InvalidAccount(e)))?;

    let start = Instant::now();
    let result = query.apt_balance(&client, &address).await;
    let latency = start.elapsed();
    log::debug!("{}: query took {:?}", name, latency);

    match result {
        Ok(octas) => Ok((latency, octas)),
        Err(e) => Err((latency, CheckError::Query(e))),
    }
}

/// Checks every slot and returns the rows in slot order.
///
/// With `concurrent` the checks run at the same time, otherwise one after another.
pub async fn check_all<Q: BalanceQuery>(
    query: &Q,
    slots: &[Slot],
    account: &str,
    concurrent: bool,
) -> Vec<ResultRow> {
    if concurrent {
        // join_all yields in input order, regardless of completion order
        join_all(
            slots
                .iter()
                .map(|slot| check_one(query, &slot.name, &slot.url, account)),
        )
        .await
    } else {
        let mut rows = Vec::with_capacity(slots.len());
        for slot in slots {
            rows.push(check_one(query, &slot.name, &slot.url, account).await);
        }
        rows
    }
}
