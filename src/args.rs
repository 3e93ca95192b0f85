use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Command-line arguments for the repack tool
#[derive(Debug)]
pub struct Args {
    /// Enable verbose output
    pub verbose: bool,

    /// Create a .tar.gz archive instead of the default .zip
    pub tar: bool,

    /// Directory to package (defaults to the directory containing the executable)
    pub path: Option<PathBuf>,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        let matches = Command::new("repack")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Packages a directory tree into a distributable archive")
            .arg(
                Arg::new("path")
                    .short('p')
                    .long("path")
                    .value_name("DIR")
                    .help("Directory to package (defaults to the directory containing this executable)")
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("Enable verbose output")
            )
            .arg(
                Arg::new("tar")
                    .long("tar")
                    .action(ArgAction::SetTrue)
                    .help("Create a .tar.gz archive instead of .zip")
            )
            .get_matches();

        Self {
            verbose: matches.get_flag("verbose"),
            tar: matches.get_flag("tar"),
            path: matches.get_one::<String>("path").map(PathBuf::from),
        }
    }
}
