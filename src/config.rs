//! Configuration and CLI argument handling

use clap::Parser;

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "rustodoro")]
#[command(about = "A Pomodoro timer with a console countdown and a live web mode")]
#[command(version)]
pub struct Config {
    /// Focus duration in minutes
    #[arg(short, long, default_value_t = 25)]
    pub focus: i64,

    /// Break duration in minutes
    #[arg(short = 'b', long = "break", default_value_t = 5)]
    pub break_minutes: i64,

    /// Number of focus/break cycles to run
    #[arg(short, long, default_value_t = 1)]
    pub repeat: i64,

    /// Also take a break after the final focus period
    #[arg(short = 'c', long = "continue")]
    pub continue_through_breaks: bool,

    /// Serve the web timer instead of the console countdown
    #[arg(short, long)]
    pub web: bool,

    /// Port to bind the web server to
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Host address to bind the web server to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
