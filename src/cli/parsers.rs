use eyre::{eyre, Result};
use std::time::Duration;

/// `value_parser` to parse a number of seconds to a `Duration`, zero is rejected.
pub fn parse_timeout_secs(value: &str) -> Result<Duration> {
    let secs = value.trim().parse::<f64>()?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(eyre!("timeout must be a positive number of seconds"));
    }

    Ok(Duration::from_secs_f64(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timeout_secs() {
        let result = parse_timeout_secs("5");
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), Duration::from_secs(5));

        let result = parse_timeout_secs("0.5");
        assert_eq!(result.unwrap(), Duration::from_millis(500));

        assert!(parse_timeout_secs("0").is_err());
        assert!(parse_timeout_secs("-1").is_err());
        assert!(parse_timeout_secs("soon").is_err());
    }
}
