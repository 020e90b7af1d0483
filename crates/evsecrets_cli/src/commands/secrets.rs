//! Secrets command - lists environment-variable names matched by the
//! configured patterns. Names only; values are never printed.

use std::path::Path;

use evsecrets_core::{ConfigSource, DOTENV_FILENAME, DotEnvFile, SecretScanner};

use crate::CONFIG_FILENAME;
use crate::ui::{colors, pluralise_word, print_command_header, print_info};

/// Executes the `evsecrets secrets` command.
pub fn run(verbose: bool) -> super::Result {
    print_command_header("secrets");

    let (scanner, source) = SecretScanner::from_cwd();

    if verbose {
        print_context(&scanner, source);
    }

    let names = scanner.secret_env_var_names();

    if names.is_empty() {
        print_info("no environment variables match the configured patterns");
        return Ok(());
    }

    for name in &names {
        println!("{name}");
    }

    println!();
    println!(
        "{}",
        colors::muted().apply_to(format!(
            "{} matched {}",
            names.len(),
            pluralise_word(names.len(), "name", "names")
        ))
    );

    Ok(())
}

fn print_context(scanner: &SecretScanner, source: ConfigSource) {
    let origin = match source {
        ConfigSource::File => CONFIG_FILENAME,
        ConfigSource::Defaults => "built-in defaults",
    };
    println!("{}", colors::muted().apply_to(format!("config: {origin}")));
    println!(
        "{}",
        colors::muted().apply_to(format!(
            "patterns: {}",
            scanner.config().env_var_patterns.join(", ")
        ))
    );

    // The .env file is reported read-only; its values never join the
    // environment snapshot used for scanning.
    let dotenv = DotEnvFile::read(Path::new(DOTENV_FILENAME));
    if dotenv.exists() {
        println!(
            "{}",
            colors::muted().apply_to(format!(".env defines: {}", dotenv.names().join(", ")))
        );
    } else {
        println!("{}", colors::muted().apply_to("no .env file present"));
    }
    println!();
}
