mod cli;
pub use cli::cli;

mod configurations;
pub use configurations::{CompareConfig, ConfigError, Slot, SLOT_NAMES};

pub mod client;
pub use client::{AccountAddress, AptosRest, BalanceQuery};

pub mod checker;
pub use checker::{check_all, check_one, CheckError, ResultRow};

pub mod report;
