//! Scan command - searches the filtered file set for occurrences of the
//! resolved secret values.

use std::path::Path;

use evsecrets_core::{ConfigSource, SecretScanner};

use crate::CONFIG_FILENAME;
use crate::artifacts;
use crate::ui::{colors, pluralise_word, print_command_header, print_info, print_warning};

/// Result lines per match: counter, warning, content echo.
const LINES_PER_MATCH: usize = 3;

/// Executes the `evsecrets scan` command.
pub fn run(dir: Option<&Path>, verbose: bool, tmp_file_outputs: bool) -> super::Result {
    print_command_header("scan");

    let (scanner, source) = SecretScanner::from_cwd();

    if verbose {
        print_context(&scanner, source, dir);
    }

    if tmp_file_outputs {
        let files = scanner.filtered_files(dir);
        if !artifacts::write_path_list(Path::new(artifacts::ARTIFACT_DIR), artifacts::FILTERED_FILES, &files) {
            print_warning("could not write filtered-files artifact");
        }
    }

    // The scanner prints each result line itself; the returned list is only
    // needed for the summary.
    let results = scanner.scan(dir, false);
    let matches = results.len() / LINES_PER_MATCH;

    println!();
    if matches == 0 {
        print_info("no secret values found");
    } else {
        print_warning(&format!(
            "{matches} secret {} found",
            pluralise_word(matches, "occurrence", "occurrences")
        ));
    }

    Ok(())
}

fn print_context(scanner: &SecretScanner, source: ConfigSource, dir: Option<&Path>) {
    let origin = match source {
        ConfigSource::File => CONFIG_FILENAME,
        ConfigSource::Defaults => "built-in defaults",
    };
    let names = scanner.secret_env_var_names();
    let files = scanner.filtered_files(dir);

    println!("{}", colors::muted().apply_to(format!("config: {origin}")));
    println!(
        "{}",
        colors::muted().apply_to(format!("candidate env vars: {}", names.len()))
    );
    println!(
        "{}",
        colors::muted().apply_to(format!("files to scan: {}", files.len()))
    );
    println!();
}
