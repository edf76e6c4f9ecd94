use clap::Parser;
use std::path::PathBuf;

use clipswap::logging::LogLevel;

const ABOUT: &str = "Relink clips in a Final Cut Pro XML or Premiere Pro project to finished media";

const LONG_ABOUT: &str = "\
Reads a Final Cut Pro XML or Premiere Pro project file and switches existing
clip references to files found in the finals directory.

Replacements are matched by prefix; case and extension are ignored.

Example:

'PetroPics-873123292-640_adpp.mov' is replaced by 'petropics-873123292.mp4'
because the clip name starts with the stem 'petropics-873123292'.";

#[derive(Parser)]
#[command(name = "clipswap")]
#[command(author, version, about = ABOUT, long_about = LONG_ABOUT)]
pub struct Cli {
    /// Directory holding the replacement media
    #[arg(long, value_name = "DIR")]
    pub finals_dir: PathBuf,

    /// File name for the output project (default: <project>_replaced.<ext>)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Log level (trace, debug, info, warning, error, critical)
    #[arg(long, value_enum, ignore_case = true, value_name = "LEVEL")]
    pub log: Option<LogLevel>,

    /// Path to config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Answer yes to every prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Premiere: use each replacement file for at most one Media entry
    #[arg(long)]
    pub no_reuse: bool,

    /// Show the replacements that would be made without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Final Cut Pro XML or Premiere Pro project file
    #[arg(value_name = "PROJECT")]
    pub project: PathBuf,
}
