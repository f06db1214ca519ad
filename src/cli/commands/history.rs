use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{color_for_break, colorize};
use crate::utils::formatting::mins2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::to_local_display;

/// Handle the `history` command
pub fn handle(cfg: &Config) -> AppResult<()> {
    let service = crate::open_service(cfg)?;
    let records = service.history()?;

    if records.is_empty() {
        info("No completed breaks yet.");
        return Ok(());
    }

    header(format!("Break history ({} entries)", records.len()));

    let mut table = Table::new(vec![
        Column::new("Badge", 6),
        Column::new("Name", 20),
        Column::new("Start", 19),
        Column::new("End", 19),
        Column::new("Duration", 9),
        Column::new("Limit", 5),
    ]);

    for r in &records {
        let color = color_for_break(r.classification.is_over());
        table.add_row(vec![
            r.badge_id.to_string(),
            r.name.clone(),
            to_local_display(&r.start),
            to_local_display(&r.end),
            mins2readable(r.duration_minutes, false),
            colorize(r.classification.as_str(), color),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
