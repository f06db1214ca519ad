//! rPauseLogger main entrypoint.

use rpauselogger::run;
use rpauselogger::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
