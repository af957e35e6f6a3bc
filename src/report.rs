use crate::checker::ResultRow;
use std::{borrow::Cow, io::Write, time::Duration};

/// Longest URL shown as is.
const MAX_URL_WIDTH: usize = 70;
const ELLIPSIS: &str = "...";

const TITLE: &str = "Aptos APT Balance (via aptos-sdk Aptos::get_balance)";
const RULE: &str = "--------------------------------------------------------------------------";

/// Shortens URLs longer than 70 characters to their first 67 characters and an ellipsis.
pub fn short_url(url: &str) -> Cow<'_, str> {
    let url = url.trim();
    if url.chars().count() <= MAX_URL_WIDTH {
        return Cow::Borrowed(url);
    }

    let head: String = url.chars().take(MAX_URL_WIDTH - ELLIPSIS.len()).collect();
    Cow::Owned(head + ELLIPSIS)
}

/// Rounds to whole milliseconds and renders compactly, e.g. `87ms`, `1.25s` or `1m2.5s`.
pub fn format_latency(latency: Duration) -> String {
    let millis = (latency.as_micros() + 500) / 1000;
    if millis == 0 {
        return "0s".to_string();
    }
    if millis < 1000 {
        return format!("{}ms", millis);
    }

    let hours = millis / 3_600_000;
    let minutes = millis / 60_000 % 60;
    let secs = millis / 1000 % 60;
    let frac = millis % 1000;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{}h", hours));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{}m", minutes));
    }
    out.push_str(&secs.to_string());
    if frac > 0 {
        let frac = format!("{:03}", frac);
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
    out.push('s');
    out
}

/// Writes the comparison table, one line per row plus an error line for failed rows.
pub fn render<W: Write>(w: &mut W, account: &str, rows: &[ResultRow]) -> std::io::Result<()> {
    writeln!(w, "{}", TITLE)?;
    writeln!(w, "{}", RULE)?;
    writeln!(w, "Account: {}\n", account)?;
    writeln!(
        w,
        "{:<6}  {:<10}  {:<14}  {:<12}  {}",
        "NAME", "LATENCY", "OCTAS", "APT", "RPC (base /v1)"
    )?;
    writeln!(
        w,
        "{:<6}  {:<10}  {:<14}  {:<12}  {}",
        "-".repeat(6),
        "-".repeat(10),
        "-".repeat(14),
        "-".repeat(12),
        "-".repeat(30)
    )?;

    for row in rows {
        match &row.outcome {
            Ok(balance) => writeln!(
                w,
                "{:<6}  {:<10}  {:<14}  {:<12.8}  {}",
                row.name,
                format_latency(row.latency),
                balance.octas,
                balance.apt,
                short_url(&row.base_url)
            )?,
            Err(err) => {
                writeln!(
                    w,
                    "{:<6}  {:<10}  {:<14}  {:<12}  {}",
                    row.name,
                    "-",
                    "ERROR",
                    "-",
                    short_url(&row.base_url)
                )?;
                writeln!(w, "        ↳ {}", err)?;
            }
        }
    }

    Ok(())
}
