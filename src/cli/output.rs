//! Output formatting and progress indicators
//!
//! Progress and summaries go to stdout, everything that describes a problem
//! goes to stderr.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::Level;

/// Console output settings for one invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Suppress progress and summary lines
    pub quiet: bool,
    /// Verbosity count from `-v`
    pub verbose: u8,
}

impl OutputConfig {
    /// Create output settings from CLI flags
    pub fn new(quiet: bool, verbose: u8) -> Self {
        Self { quiet, verbose }
    }

    /// Most detailed log level to show
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }

    /// Print a progress or summary line unless quiet
    pub fn line(&self, message: impl AsRef<str>) {
        if !self.quiet {
            println!("{}", message.as_ref());
        }
    }

    /// Progress bar for board detail fetching, hidden when quiet
    pub fn board_bar(&self) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(0);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} boards ({eta})")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    }
}

/// Print an error and its causes to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} Error: {}", status::ERROR, error);
    for cause in error.chain().skip(1) {
        eprintln!("    caused by: {cause}");
    }
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";
}
