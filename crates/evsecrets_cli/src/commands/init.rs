//! Init command - creates the `.evsecrets.json` configuration file.

use std::path::Path;

use console::style;
use evsecrets_core::Config;

use crate::CONFIG_FILENAME;
use crate::ui::{colors, indicators, print_command_header, print_info, print_warning};

/// Executes the `evsecrets init` command, writing the built-in default
/// configuration (stamped with version and generation timestamp) to the
/// current working directory.
///
/// A write failure is reported as a console warning, not a process error.
pub fn run() -> super::Result {
    print_command_header("init");

    let path = Path::new(CONFIG_FILENAME);

    if Config::write_defaults(path) {
        println!(
            "{} {}",
            colors::success().apply_to(indicators::ADDED),
            style(path.display()).bold()
        );
        println!();
        print_info("Run `evsecrets scan` to scan your project");
    } else {
        print_warning(&format!("could not write {}", path.display()));
    }

    Ok(())
}
