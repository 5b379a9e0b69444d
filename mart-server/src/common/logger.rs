//! Logging Infrastructure
//!
//! Structured logging setup for development and production:
//! - Daily rotating application logs (deleted after 14 days)
//! - Permanent security logs (never deleted)

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, filter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Retention window for rotated application logs
const APP_LOG_RETENTION_DAYS: i64 = 14;

/// Initialize console-only logging (development)
pub fn init_logger(level: &str) -> anyhow::Result<()> {
    init_logger_with_file(level, false, None)
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level fallback when `RUST_LOG` is not set
/// * `json_format` - JSON output (production) instead of human-readable
/// * `log_dir` - Optional directory for file logging
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(env_filter);

    // Console layer
    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer().with_target(true).boxed()
    };

    match log_dir {
        Some(dir) => {
            let log_dir = Path::new(dir);
            let app_log_dir = log_dir.join("app");
            let security_log_dir = log_dir.join("security");
            fs::create_dir_all(&app_log_dir)?;
            fs::create_dir_all(&security_log_dir)?;

            // Daily rotating application log; security events go to their
            // own permanent file instead.
            let app_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("app")
                .filename_suffix("log")
                .build(&app_log_dir)?;
            let app_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_writer(app_appender)
                .with_filter(filter::filter_fn(|meta| meta.target() != "security"));

            let security_appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix("security")
                .filename_suffix("log")
                .build(&security_log_dir)?;
            let security_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_writer(security_appender)
                .with_filter(filter::filter_fn(|meta| meta.target() == "security"));

            registry
                .with(console_layer)
                .with(app_layer)
                .with(security_layer)
                .try_init()?;
        }
        None => {
            registry.with(console_layer).try_init()?;
        }
    }

    Ok(())
}

/// Clean up rotated application log files older than the retention window
///
/// Call periodically (e.g. at startup) to bound log growth. Security logs
/// are never touched.
pub fn cleanup_old_logs(log_dir: &Path) -> anyhow::Result<()> {
    use chrono::{Local, TimeZone};

    let cutoff = Local::now() - chrono::Duration::days(APP_LOG_RETENTION_DAYS);

    let app_log_dir = log_dir.join("app");
    if !app_log_dir.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(app_log_dir)? {
        let entry = entry?;
        let path = entry.path();

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        // Rotated files are named app.YYYY-MM-DD.log
        let Some(date_part) = name
            .strip_prefix("app.")
            .and_then(|rest| rest.strip_suffix(".log"))
        else {
            continue;
        };

        let Ok(naive_date) = chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d") else {
            continue;
        };
        let Some(midnight) = naive_date.and_hms_opt(0, 0, 0) else {
            continue;
        };

        if let Some(file_day) = Local.from_local_datetime(&midnight).single()
            && file_day < cutoff
        {
            fs::remove_file(&path)?;
            tracing::info!(file = %name, "Deleted old log file");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};

    #[test]
    fn test_cleanup_removes_only_stale_app_logs() {
        let dir = tempfile::tempdir().unwrap();
        let app_dir = dir.path().join("app");
        fs::create_dir_all(&app_dir).unwrap();

        let stale_date = (Local::now() - Duration::days(30)).format("%Y-%m-%d");
        let fresh_date = Local::now().format("%Y-%m-%d");
        let stale = app_dir.join(format!("app.{}.log", stale_date));
        let fresh = app_dir.join(format!("app.{}.log", fresh_date));
        let unrelated = app_dir.join("notes.txt");
        fs::write(&stale, "old").unwrap();
        fs::write(&fresh, "new").unwrap();
        fs::write(&unrelated, "keep").unwrap();

        cleanup_old_logs(dir.path()).unwrap();

        assert!(!stale.exists());
        assert!(fresh.exists());
        assert!(unrelated.exists());
    }

    #[test]
    fn test_cleanup_without_log_dir_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        cleanup_old_logs(dir.path()).unwrap();
    }
}
