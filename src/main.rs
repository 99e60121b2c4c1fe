//! Address Book - summary report.
//!
//! Loads the configured snapshot and logs how many contacts it holds, how many
//! pages they span, and whose birthday is coming up.

use address_book::observability::init_tracing;
use address_book::{Config, Directory};
use anyhow::{Context, Result};
use chrono::Local;
use tracing::{error, info, warn};

fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can take effect
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    init_tracing(&log_level);

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let path = &config.address_book_path;
    let mut directory = Directory::new();
    if path.exists() {
        directory
            .load_from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?;
    } else {
        warn!("No snapshot at {}, starting empty", path.display());
    }

    let pages = directory.page_count(config.page_size)?;
    println!(
        "{} contacts in {} ({} pages of {})",
        directory.len(),
        path.display(),
        pages,
        config.page_size
    );

    let today = Local::now().date_naive();
    for (record, days) in directory.upcoming_birthdays(today, config.birthday_window_days) {
        match days {
            0 => println!("  {} - birthday today", record.name()),
            1 => println!("  {} - birthday tomorrow", record.name()),
            n => println!("  {} - birthday in {} days", record.name(), n),
        }
    }

    info!("Report complete");
    Ok(())
}
