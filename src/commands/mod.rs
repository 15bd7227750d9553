use colored::Colorize as _;

pub mod browse;
pub mod list;
pub mod login_cmd;
pub mod show;

/// Produce a standardized styled error line. *Does not* add a trailing newline.
#[inline]
pub fn styled_error_line<T: AsRef<str>>(msg: T) -> String {
    format!("  {} - {}", "Error".red().bold(), msg.as_ref())
}
