//! Command-line interface.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

/// Configuration file looked up beside the executable when `-c` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "config.ini";

pub const USAGE: &str = "compress [-c|--config <config_file>] [-w|--watch]";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "compress")]
#[command(about = "Build an archive from the files listed in a configuration file.")]
#[command(override_usage = USAGE)]
pub struct Cli {
    /// Configuration file [default: config.ini next to the executable]
    #[arg(short, long, value_name = "config_file")]
    pub config: Option<PathBuf>,

    /// Also reload the configuration whenever the file changes on disk
    #[arg(short, long)]
    pub watch: bool,
}

/// What the binary should do after argument parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Run(Cli),
    /// Print the text and exit successfully.
    Exit(String),
}

/// Parse arguments. Help and every parse error end in `CliAction::Exit`;
/// unknown arguments get the usage line rather than an error status.
pub fn parse_args<I, T>(args: I) -> CliAction
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => CliAction::Run(cli),
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => CliAction::Exit(e.render().to_string()),
            _ => CliAction::Exit(Cli::command().render_usage().to_string()),
        },
    }
}

impl Cli {
    /// The configuration file to load.
    pub fn config_path(&self) -> io::Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => {
                let exe = std::env::current_exe()?;
                let dir = exe.parent().ok_or_else(|| {
                    io::Error::new(io::ErrorKind::NotFound, "executable has no parent directory")
                })?;
                Ok(dir.join(DEFAULT_CONFIG_FILE))
            }
        }
    }
}
