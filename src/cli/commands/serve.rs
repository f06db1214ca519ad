use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::http;
use std::sync::Arc;

/// Handle the `serve` command: blocks until Ctrl-C.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let bind = match cmd {
        Commands::Serve { bind: Some(addr) } => addr.clone(),
        _ => cfg.bind_address.clone(),
    };

    let service = Arc::new(crate::open_service(cfg)?);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| AppError::Config(format!("failed to create tokio runtime: {e}")))?;
    runtime.block_on(http::serve(service, &bind))
}
