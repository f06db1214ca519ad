pub mod active;
pub mod config;
pub mod history;
pub mod init;
pub mod pause;
pub mod serve;
