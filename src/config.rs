//! Command-line configuration for the `declcheck` binary
//!
//! ```text
//! declcheck [INPUT] [-o|--output OUTPUT] [--view] [--pause]
//! ```

use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_INPUT: &str = "input.txt";
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Settings for one run of the binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Open the terminal viewer after writing the report
    pub view: bool,
    /// Wait for Enter before exiting
    pub pause: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            view: false,
            pause: false,
        }
    }
}

/// Problems with the command line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown option '{0}'")]
    UnknownOption(String),

    #[error("Option '{0}' requires a value")]
    MissingValue(String),

    #[error("Unexpected argument '{0}'")]
    UnexpectedArgument(String),

    /// `-h` / `--help` was given; not a failure, but ends parsing
    #[error("help requested")]
    HelpRequested,
}

impl Config {
    /// Parse arguments, excluding the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Config::default();
        let mut input_seen = false;
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Err(ConfigError::HelpRequested),
                "--view" => config.view = true,
                "--pause" => config.pause = true,
                "-o" | "--output" => {
                    let value = args.next().ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    config.output = PathBuf::from(value);
                }
                opt if opt.starts_with('-') && opt.len() > 1 => {
                    return Err(ConfigError::UnknownOption(arg.clone()));
                }
                _ if input_seen => return Err(ConfigError::UnexpectedArgument(arg.clone())),
                _ => {
                    config.input = PathBuf::from(&arg);
                    input_seen = true;
                }
            }
        }

        Ok(config)
    }
}

/// Usage text for `program_name`.
pub fn usage(program_name: &str) -> String {
    format!(
        "Usage: {program} [INPUT] [-o|--output OUTPUT] [--view] [--pause]\n\
         \n\
         Checks that INPUT (default: {input}) contains only variable declarations\n\
         of the form `type name;` or `type name = expression;` and writes the\n\
         verdict to OUTPUT (default: {output}) and stdout.\n\
         \n\
         Options:\n\
         \x20 -o, --output FILE  where to write the report\n\
         \x20 --view             browse the result in a terminal viewer\n\
         \x20 --pause            wait for Enter before exiting\n\
         \x20 -h, --help         show this message\n\
         \n\
         Set RUST_LOG=debug (or trace) to follow the scanner.",
        program = program_name,
        input = DEFAULT_INPUT,
        output = DEFAULT_OUTPUT,
    )
}
