pub mod history;
pub mod machine;
pub mod pause;

pub use history::HistoryLogic;
pub use machine::{BreakPolicy, PauseMachine};
pub use pause::PauseService;
