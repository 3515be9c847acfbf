use colored::{ColoredString, Colorize};
use env_logger::{Builder, Env};
use log::info;
use std::fmt;
use std::io::Write;
use std::time::Duration;

pub struct FormatElapsedTimeOptions {
    pub(crate) sec_yellow_threshold: u64,
    pub(crate) sec_red_threshold: u64,
    pub(crate) millis_yellow_threshold: Option<u128>,
    pub(crate) millis_red_threshold: Option<u128>,
}

impl Default for FormatElapsedTimeOptions {
    fn default() -> Self {
        Self {
            sec_yellow_threshold: 1,
            sec_red_threshold: 2,
            millis_yellow_threshold: Some(100),
            millis_red_threshold: Some(500),
        }
    }
}

/// Log target whose records are printed as-is, without timestamp or target.
pub const RAW_TARGET: &str = "SKIP_FORMAT";

/// Installs the global logger. `RUST_LOG` overrides the default `info` filter.
pub fn init_logging() {
    let logging_env = Env::default().filter_or("RUST_LOG", "info");
    Builder::from_env(logging_env)
        .format(|buf, record| writeln!(buf, "{}", format_record(record.target(), record.args())))
        .init();
}

/// Formats a log line as `HH:MM:SS target message`.
fn format_record(target: &str, message: &fmt::Arguments) -> String {
    if target == RAW_TARGET {
        return message.to_string();
    }

    format!(
        "{} {} {}",
        chrono::Local::now().format("%H:%M:%S").to_string().dimmed(),
        target.to_ascii_lowercase().bold().bright_yellow(),
        message
    )
}

pub fn format_elapsed_time(elapsed: Duration, options: &FormatElapsedTimeOptions) -> ColoredString {
    match elapsed.as_secs() {
        secs if secs > options.sec_red_threshold => format!("{}s", secs).red(),
        secs if secs > options.sec_yellow_threshold => format!("{}s", secs).yellow(),
        secs if secs > 0 => format!("{}s", secs).normal(),
        _ => match elapsed.as_millis() {
            millis
                if options
                    .millis_red_threshold
                    .is_some_and(|threshold| millis > threshold) =>
            {
                format!("{}ms", millis).red()
            }
            millis
                if options
                    .millis_yellow_threshold
                    .is_some_and(|threshold| millis > threshold) =>
            {
                format!("{}ms", millis).yellow()
            }
            millis if millis > 0 => format!("{}ms", millis).normal(),
            _ => format!("{}μs", elapsed.as_micros()).normal(),
        },
    }
}

pub fn print_title(title: &str) {
    info!(target: RAW_TARGET, "{}", "");
    info!(target: RAW_TARGET, "{}", format!(" {} ", title).on_green().bold());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed_time_units() {
        let options = FormatElapsedTimeOptions::default();

        let micros = format_elapsed_time(Duration::from_micros(250), &options);
        assert_eq!(micros.input, "250μs");

        let millis = format_elapsed_time(Duration::from_millis(42), &options);
        assert_eq!(millis.input, "42ms");

        let secs = format_elapsed_time(Duration::from_secs(5), &options);
        assert_eq!(secs.input, "5s");
    }

    #[test]
    fn test_format_record() {
        colored::control::set_override(false);

        assert_eq!(format_record(RAW_TARGET, &format_args!("raw line")), "raw line");

        let line = format_record("Pages", &format_args!("/ -> dist/index.html"));
        let (timestamp, rest) = line.split_once(' ').unwrap();
        assert_eq!(timestamp.len(), "00:00:00".len());
        assert_eq!(rest, "pages / -> dist/index.html");
    }
}
