mod cli;
mod compilation;
mod logging;


use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as _;
use cli::{Cli, Command};
use jpp_backend::linker::{Linker, LinkerError};
use jpp_backend::{object, BackendError};
use jpp_frontend::ParseError;
use jpp_middle::{EntryPointError, TypeError};
use target_lexicon::Triple;

use crate::compilation::BuildOptions;

const SOURCE_EXTENSION: &str = "jpp";

#[derive(thiserror::Error, Debug)]
enum CompilerError {
    #[error("`{}` is not a `.jpp` file", .0.display())]
    InvalidExtension(PathBuf),

    #[error("couldn't read `{}`: {source}", .path.display())]
    ReadSource {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("syntax error: {0}")]
    Parse(#[from] ParseError),

    #[error("program has {} type error(s)", .0.len())]
    Type(Vec<TypeError>),

    #[error(transparent)]
    EntryPoint(#[from] EntryPointError),

    #[error("error during codegen: {0}")]
    Backend(#[from] BackendError),

    #[error("error emitting object: {0}")]
    Emit(#[from] object::write::Error),

    #[error("error linking: {0}")]
    Linker(#[from] LinkerError),
}

type CompilerResult<T> = Result<T, CompilerError>;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_level.into());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CompilerResult<()> {
    match cli.command {
        Command::Compile {
            source,
            output_name,
            build_dir,
            target,
            linker,
            link_args,
            no_link,
        } => {
            if source.extension().and_then(OsStr::to_str) != Some(SOURCE_EXTENSION) {
                return Err(CompilerError::InvalidExtension(source));
            }

            let text = std::fs::read_to_string(&source).map_err(|err| {
                CompilerError::ReadSource {
                    path: source.clone(),
                    source: err,
                }
            })?;

            log::info!("compiling {}", source.display());

            let target = target.unwrap_or_else(Triple::host);

            let linker = match linker {
                _ if no_link => None,
                Some(cmd) => Some(Linker::Custom(cmd, link_args)),
                None => {
                    let detected = Linker::detect(&target);
                    if detected.is_none() {
                        log::warn!(
                            "no known linker for target `{target}`, only emitting an object file"
                        );
                    }
                    detected
                }
            };

            let options = BuildOptions {
                output_name,
                build_dir,
                target,
                linker,
            };

            let artifacts = compilation::build(&text, &options)?;

            match artifacts.executable {
                Some(executable) => log::info!("executable generated: {}", executable.display()),
                None => log::info!("object generated: {}", artifacts.object.display()),
            }

            Ok(())
        }
    }
}
