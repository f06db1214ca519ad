use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::PauseOutcome;
use crate::ui::messages::{success, warning};
use crate::utils::time::to_local_display;

/// Handle the `pause` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Pause { badge } = cmd else {
        return Ok(());
    };

    let service = crate::open_service(cfg)?;
    let outcome = service.toggle(badge)?;

    match &outcome {
        PauseOutcome::Started { start, .. } => {
            success(format!("☕ {} at {}", outcome.message(), to_local_display(start)));
        }
        PauseOutcome::Ended {
            end,
            classification,
            ..
        } => {
            let line = format!("⏱️ {} (ended {})", outcome.message(), to_local_display(end));
            if classification.is_over() {
                warning(format!(
                    "{line}, over the {} min limit",
                    service.policy().threshold_minutes
                ));
            } else {
                success(line);
            }
        }
    }
    Ok(())
}
