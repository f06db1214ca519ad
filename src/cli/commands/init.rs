use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::{EmployeeDirectory, PauseStore};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (and config file, unless `--test`)
///  - an empty pause document
///  - an empty employee directory file
///
/// Existing files are never overwritten.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    cfg.init_all(cli.test)?;

    let pauses = cfg.pauses_path();
    let employees = cfg.employees_path();

    info("Initializing rPauseLogger…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Pauses     : {}", pauses.display());
    println!("👥 Employees  : {}", employees.display());

    if PauseStore::new(&pauses).init()? {
        success(format!("Pause document created at {}", pauses.display()));
    } else {
        info(format!("Pause document already present at {}", pauses.display()));
    }

    if EmployeeDirectory::init_file(&employees)? {
        success(format!(
            "Employee directory created at {} (add {{\"badgeId\", \"name\"}} entries)",
            employees.display()
        ));
    } else {
        info(format!(
            "Employee directory already present at {}",
            employees.display()
        ));
    }

    success("rPauseLogger initialization completed!");
    Ok(())
}
