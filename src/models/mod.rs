pub mod badge;
pub mod classification;
pub mod employee;
pub mod outcome;
pub mod pause;

pub use badge::BadgeId;
pub use classification::Classification;
pub use employee::EmployeeRecord;
pub use outcome::PauseOutcome;
pub use pause::{BreakState, PauseDocument, PauseRecord};
