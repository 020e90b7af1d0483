//! Files command - lists the filtered, sorted scannable file set.

use std::path::Path;

use evsecrets_core::SecretScanner;

use crate::artifacts;
use crate::ui::{colors, pluralise_word, print_command_header, print_warning};

/// Executes the `evsecrets files` command.
pub fn run(dir: Option<&Path>, tmp_file_outputs: bool) -> super::Result {
    print_command_header("files");

    let (scanner, _source) = SecretScanner::from_cwd();
    let files = scanner.filtered_files(dir);

    for file in &files {
        println!("{}", file.display());
    }

    println!();
    println!(
        "{}",
        colors::muted().apply_to(format!(
            "{} {} eligible for scanning",
            files.len(),
            pluralise_word(files.len(), "file", "files")
        ))
    );

    if tmp_file_outputs
        && !artifacts::write_path_list(Path::new(artifacts::ARTIFACT_DIR), artifacts::FILTERED_FILES, &files)
    {
        print_warning("could not write filtered-files artifact");
    }

    Ok(())
}
