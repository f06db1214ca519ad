use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};
use crate::utils::time::to_local_display;

/// Handle the `active` command
pub fn handle(cfg: &Config) -> AppResult<()> {
    let service = crate::open_service(cfg)?;
    let open = service.active()?;

    if open.is_empty() {
        info("Nobody is on break.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("Badge", 6),
        Column::new("Name", 20),
        Column::new("Since", 19),
    ]);
    for (employee, since) in &open {
        table.add_row(vec![
            employee.badge_id.to_string(),
            employee.name.clone(),
            to_local_display(since),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
