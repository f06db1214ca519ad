use clap::{Parser, Subcommand};

/// Command-line interface definition for rPauseLogger
#[derive(Parser)]
#[command(
    name = "rpauselogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Badge-driven break timer: toggle breaks by badge id over HTTP or from the terminal",
    long_about = None
)]
pub struct Cli {
    /// Override the pause document path (useful for tests or a custom location)
    #[arg(global = true, long = "db", value_name = "FILE")]
    pub db: Option<String>,

    /// Override the employee directory path
    #[arg(global = true, long = "employees", value_name = "FILE")]
    pub employees: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, the pause document and the employee directory
    Init,

    /// Run the HTTP service
    Serve {
        /// Address to listen on (overrides bind_address and PORT)
        #[arg(long = "bind", value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Start or end the break of a badge
    Pause {
        /// 4-digit badge identifier
        badge: String,
    },

    /// Print completed breaks, newest first
    History,

    /// Print badges currently on break
    Active,

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },
}
