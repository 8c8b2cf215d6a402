//! Plain console countdown mode

use std::io::{self, Write};
use std::time::Duration;

use tokio::time::sleep;

use crate::config::Config;
use crate::error::SessionError;
use crate::notify::Notifier;
use crate::state::validate_durations;

const BANNER: &str = r#"
 ___  _   _  ___  _____   ___   ___    ___   ___   ___
| _ \| | | |/ __||_   _| / _ \ |   \  / _ \ | _ \ / _ \
|   /| |_| |\__ \  | |  | (_) || |) || (_) ||   /| (_) |
|_|_\ \___/ |___/  |_|   \___/ |___/  \___/ |_|_\ \___/
"#;

/// Run the configured focus/break cycles directly in the terminal.
///
/// Same bounded semantics as the web engine: `--continue` only adds a
/// break after the final focus period, every run ends after the requested
/// number of cycles.
pub async fn run(config: &Config, notifier: &dyn Notifier) -> Result<(), SessionError> {
    validate_durations(config.focus, config.break_minutes, config.repeat)?;

    println!("{BANNER}");

    for cycle in 1..=config.repeat {
        if config.repeat > 1 {
            println!("Starting Pomodoro session {cycle}/{}...", config.repeat);
        }

        println!("Focus for {} minutes.", config.focus);
        countdown(config.focus as u32 * 60).await;
        notifier.focus_complete();

        if cycle < config.repeat || config.continue_through_breaks {
            println!("Time for a break! Rest for {} minutes.", config.break_minutes);
            countdown(config.break_minutes as u32 * 60).await;
            notifier.break_complete();
        }

        if cycle < config.repeat {
            println!("Get ready for the next Pomodoro!");
        }
    }

    println!("All Pomodoros completed. Time for a well-deserved long break!");
    Ok(())
}

async fn countdown(total_seconds: u32) {
    for remaining in (1..=total_seconds).rev() {
        print!("\r{:02}:{:02} remaining", remaining / 60, remaining % 60);
        let _ = io::stdout().flush();
        sleep(Duration::from_secs(1)).await;
    }
    println!("\rDone!              ");
}
