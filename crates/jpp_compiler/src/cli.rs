use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use target_lexicon::Triple;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// How much to log. `RUST_LOG` takes precedence when set.
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compile a `.jpp` file into an executable.
    Compile {
        /// The source file.
        source: PathBuf,

        /// Name of the executable. Artifacts are written to
        /// `<build-dir>/<output-name>/`.
        output_name: String,

        /// Directory build outputs are placed under.
        #[arg(long, default_value = "build")]
        build_dir: PathBuf,

        /// Target triple to compile for. Defaults to the host.
        #[arg(long)]
        target: Option<Triple>,

        /// Linker command to use instead of the default for the target.
        #[arg(long)]
        linker: Option<String>,

        /// Extra argument passed to `--linker`. Can be repeated.
        #[arg(long = "link-arg", requires = "linker")]
        link_args: Vec<String>,

        /// Only emit the object file.
        #[arg(long, action)]
        no_link: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
