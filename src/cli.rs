// SPDX-License-Identifier: MPL-2.0
//! Command-line parsing for the launcher.
//!
//! ```text
//! iced_photoview [--lang <LANG>] [--config-dir <DIR>] [FILE]
//! ```

use crate::app::Flags;
use pico_args::Arguments;
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: iced_photoview [OPTIONS] [FILE]

Arguments:
  [FILE]  Image file to open at startup

Options:
      --lang <LANG>       UI language (e.g. en-US, fr)
      --config-dir <DIR>  Directory holding settings.toml
  -h, --help              Print this help
";

/// What the launcher should do after parsing its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Flags),
    Help,
    /// Unrecognized argument count; print usage and exit normally.
    Usage,
}

/// Parses the process arguments.
pub fn parse(mut args: Arguments) -> Result<Command, pico_args::Error> {
    if args.contains(["-h", "--help"]) {
        return Ok(Command::Help);
    }

    let lang: Option<String> = args.opt_value_from_str("--lang")?;
    let config_dir: Option<PathBuf> = args.opt_value_from_os_str("--config-dir", |value| {
        Ok::<_, std::convert::Infallible>(PathBuf::from(value))
    })?;

    let mut positional = args.finish();
    if positional.len() > 1 {
        return Ok(Command::Usage);
    }

    Ok(Command::Run(Flags {
        lang,
        config_dir,
        file_path: positional.pop().map(PathBuf::from),
    }))
}
