use std::{io::ErrorKind as IoErrorKind, path::PathBuf};

use clap::{
    CommandFactory, FromArgMatches,
    error::{ErrorKind as ClapErrorKind, Result as ClapResult},
};
use ksonnet_gen::EmitOptions;
use serde::Deserialize;

/// The name of the optional config file in the output directory.
const CONFIG_FILE_NAME: &str = ".ksonnet-gen.toml";

#[derive(Debug)]
pub struct Main {
    pub verbose: bool,
    pub command: Command,
}

impl Main {
    pub fn parse() -> ClapResult<Main> {
        let mut cmd = MainArgs::command();
        let mut matches = cmd
            .try_get_matches_from_mut(std::env::args_os())
            .map_err(|err| err.format(&mut cmd))?;
        let args =
            MainArgs::from_arg_matches_mut(&mut matches).map_err(|err| err.format(&mut cmd))?;

        let command = match args.command {
            CommandArgs::Codegen(CodegenArgs {
                input,
                output,
                emit,
            }) => {
                let file: Option<ConfigFile> = {
                    let path = output.join(CONFIG_FILE_NAME);
                    match std::fs::read_to_string(&path) {
                        Ok(contents) => Some(toml::from_str(&contents).map_err(|err| {
                            cmd.error(
                                ClapErrorKind::ValueValidation,
                                format!("Failed to parse `{}`: {err}", path.display()),
                            )
                        })?),
                        Err(err) if err.kind() == IoErrorKind::NotFound => None,
                        Err(err) => {
                            return Err(cmd.error(
                                ClapErrorKind::Io,
                                format!("Failed to read `{}`: {err}", path.display()),
                            ));
                        }
                    }
                };

                let options = match file {
                    Some(file) => file.merge(emit),
                    None => emit.into(),
                };
                if options.indent == 0 {
                    return Err(cmd.error(
                        ClapErrorKind::ValueValidation,
                        "indentation width must be at least 1",
                    ));
                }

                Command::Codegen(Codegen {
                    input,
                    output,
                    options,
                })
            }
        };

        Ok(Main {
            verbose: args.verbose,
            command,
        })
    }
}

#[derive(Debug)]
pub enum Command {
    Codegen(Codegen),
}

#[derive(Debug)]
pub struct Codegen {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: EmitOptions,
}

#[derive(Debug, clap::Parser)]
#[command(version, about, long_about = None)]
struct MainArgs {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: CommandArgs,
}

#[derive(Debug, clap::Subcommand)]
enum CommandArgs {
    /// Generate a Jsonnet library from a Kubernetes API schema.
    Codegen(CodegenArgs),
}

#[derive(Debug, clap::Args)]
struct CodegenArgs {
    /// The path to the Swagger document (`.json` or `.yaml`).
    input: PathBuf,

    /// The output directory for the generated library.
    output: PathBuf,

    #[command(flatten)]
    emit: EmitArgs,
}

#[derive(Debug, Default, clap::Args)]
#[command(next_help_heading = "Generated library options")]
struct EmitArgs {
    /// The name of the generated file, relative to the output directory.
    /// Defaults to `k8s.libsonnet`.
    #[arg(long)]
    file_name: Option<String>,

    /// The number of spaces per indentation level. Defaults to 2.
    #[arg(long)]
    indent: Option<usize>,
}

impl From<EmitArgs> for EmitOptions {
    fn from(args: EmitArgs) -> Self {
        let defaults = EmitOptions::default();
        Self {
            file_name: args.file_name.unwrap_or(defaults.file_name),
            indent: args.indent.unwrap_or(defaults.indent),
        }
    }
}

/// The contents of `.ksonnet-gen.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    file_name: Option<String>,
    #[serde(default)]
    indent: Option<usize>,
}

impl ConfigFile {
    /// Fills in options that weren't passed on the command line.
    fn merge(self, args: EmitArgs) -> EmitOptions {
        EmitArgs {
            file_name: args.file_name.or(self.file_name),
            indent: args.indent.or(self.indent),
        }
        .into()
    }
}
