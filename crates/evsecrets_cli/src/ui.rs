//! UI helpers for consistent output formatting.

/// Single-character Unicode glyphs used as status indicators.
pub mod indicators {
    /// Error indicator (✖).
    pub const ERROR: &str = "✖";
    /// Warning indicator (⚠).
    pub const WARNING: &str = "⚠";
    /// Informational indicator (ℹ).
    pub const INFO: &str = "ℹ";
    /// Addition indicator (+).
    pub const ADDED: &str = "+";
}

/// Semantic colour palette for terminal output.
pub mod colors {
    use console::Style;

    /// Red - errors.
    pub const fn error() -> Style {
        Style::new().red()
    }

    /// Yellow - warnings and findings.
    pub const fn warning() -> Style {
        Style::new().yellow()
    }

    /// Cyan - informational messages.
    pub const fn info() -> Style {
        Style::new().cyan()
    }

    /// Green - success messages.
    pub const fn success() -> Style {
        Style::new().green()
    }

    /// Light grey - secondary descriptive text.
    pub const fn secondary() -> Style {
        Style::new().color256(252)
    }

    /// Dark grey - muted/contextual text.
    pub const fn muted() -> Style {
        Style::new().color256(243)
    }

    /// Cyan - accent highlights (commands, filenames).
    pub const fn accent() -> Style {
        Style::new().cyan()
    }
}

/// Process exit codes.
pub mod exit {
    /// An unrecoverable error occurred.
    pub const ERROR: i32 = 2;
}

/// Prints a styled `evsecrets <command>` header with surrounding blank lines.
pub fn print_command_header(command: &str) {
    println!();
    println!(
        "{} {}",
        colors::accent().bold().apply_to("evsecrets"),
        colors::muted().apply_to(command)
    );
    println!();
}

/// Prints a command hint line (`command  description`).
pub fn print_hint(command: &str, description: &str) {
    const CMD_WIDTH: usize = 24;

    println!(
        "  {}  {}",
        colors::accent().apply_to(format!("{command:<CMD_WIDTH$}")),
        colors::muted().apply_to(description)
    );
}

/// Prints a red error message to stderr.
pub fn print_error(message: &str) {
    eprintln!(
        "{} {}",
        colors::error().apply_to(indicators::ERROR),
        colors::secondary().apply_to(message)
    );
}

/// Prints a yellow warning message to stderr.
pub fn print_warning(message: &str) {
    eprintln!(
        "{} {}",
        colors::warning().apply_to(indicators::WARNING),
        colors::secondary().apply_to(message)
    );
}

/// Prints a cyan informational message to stdout.
pub fn print_info(message: &str) {
    println!(
        "{} {}",
        colors::info().apply_to(indicators::INFO),
        colors::secondary().apply_to(message)
    );
}

/// Returns `singular` when `count` is 1, otherwise `plural`.
#[must_use]
pub const fn pluralise_word<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

/// Returns the shared clap colour theme used by all CLI subcommands.
#[must_use]
pub fn clap_styles() -> clap::builder::Styles {
    use clap::builder::styling::{AnsiColor, Effects, Style};

    clap::builder::Styles::styled()
        .header(
            Style::new()
                .fg_color(Some(AnsiColor::Cyan.into()))
                .effects(Effects::BOLD),
        )
        .usage(
            Style::new()
                .fg_color(Some(AnsiColor::Cyan.into()))
                .effects(Effects::BOLD),
        )
        .literal(Style::new().fg_color(Some(AnsiColor::Cyan.into())))
        .placeholder(Style::new().fg_color(Some(AnsiColor::BrightBlack.into())))
        .error(
            Style::new()
                .fg_color(Some(AnsiColor::Red.into()))
                .effects(Effects::BOLD),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicators_are_single_chars() {
        assert_eq!(indicators::ERROR.chars().count(), 1);
        assert_eq!(indicators::WARNING.chars().count(), 1);
        assert_eq!(indicators::INFO.chars().count(), 1);
        assert_eq!(indicators::ADDED.chars().count(), 1);
    }

    #[test]
    fn pluralise_word_picks_by_count() {
        assert_eq!(pluralise_word(0, "match", "matches"), "matches");
        assert_eq!(pluralise_word(1, "match", "matches"), "match");
        assert_eq!(pluralise_word(2, "match", "matches"), "matches");
    }
}
