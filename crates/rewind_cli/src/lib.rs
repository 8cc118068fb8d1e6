//! Command-line front end for `rewind_tictactoe`.
//!
//! - **Cli**: argument parsing
//! - **Config**: optional TOML settings
//! - **Logging**: tracing subscriber with a reloadable filter
//! - **Presenter**: plain-text frames, redrawn on change notifications
//! - **Repl**: stdin command loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod presenter;
mod repl;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, RewindConfig};
pub use logging::{DEFAULT_LOG_FILTER, FilterHandle, apply_config_filter, env_filter_set, init_tracing};
pub use presenter::{Presenter, render};
pub use repl::{ParseError, ReplCommand, run};
