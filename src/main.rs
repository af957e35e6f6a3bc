use aptos_rpc_compare::ConfigError;
use color_eyre::config::HookBuilder;
use eyre::{Context, Result};
use std::{io::IsTerminal, process::ExitCode};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // process environment takes precedence, dotenvy never overrides
    let dotenv_result = dotenvy::dotenv();
    env_logger::try_init().wrap_err("could not initialize env_logger")?;

    let hooks = if std::io::stderr().is_terminal() {
        HookBuilder::default()
    } else {
        HookBuilder::blank()
    };
    hooks.install().wrap_err("could not install color_eyre")?;

    if let Err(err) = dotenv_result {
        log::warn!("Could not load .env file: {}", err);
    }

    match aptos_rpc_compare::cli().await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        // configuration mistakes get a plain one-line message
        Err(err) if err.downcast_ref::<ConfigError>().is_some() => {
            eprintln!("{}", err);
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err),
    }
}
