//! Walk command - lists every regular file under the root, before any
//! filtering, mostly useful for diagnosing exclusion rules.

use std::path::Path;

use evsecrets_core::SecretScanner;

use crate::artifacts;
use crate::ui::{colors, pluralise_word, print_command_header, print_warning};

/// Executes the `evsecrets walk` command.
pub fn run(dir: Option<&Path>, tmp_file_outputs: bool) -> super::Result {
    print_command_header("walk");

    let (scanner, _source) = SecretScanner::from_cwd();

    let mut files = scanner.walked_files(dir);
    // The walk itself is unordered; sort for stable console output.
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    for file in &files {
        println!("{}", file.display());
    }

    println!();
    println!(
        "{}",
        colors::muted().apply_to(format!(
            "{} {} walked",
            files.len(),
            pluralise_word(files.len(), "file", "files")
        ))
    );

    if tmp_file_outputs
        && !artifacts::write_path_list(Path::new(artifacts::ARTIFACT_DIR), artifacts::WALKED_FILES, &files)
    {
        print_warning("could not write walked-files artifact");
    }

    Ok(())
}
