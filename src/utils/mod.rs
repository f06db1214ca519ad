pub mod colors;
pub mod formatting;
pub mod logging;
pub mod path;
pub mod table;
pub mod time;
pub mod validation;
