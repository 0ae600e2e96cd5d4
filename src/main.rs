mod commands;
mod config;
mod error;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use scene::error::ErrorCode;
use scene::math::Vec3;

use crate::commands::{Format, format_vec3, parse_vec3};
use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "designer", about = "Inspect, price, and normalize automation-cell layouts")]
struct Cli {
    /// Editor config (models, prices, room). Built-in config when omitted.
    #[arg(long, env = "DESIGNER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the cost list and total for a layout document.
    Report {
        #[arg(default_value = "-", help = "Input file path, or - for stdin")]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Validate a layout document and list records that would be skipped.
    Check {
        #[arg(default_value = "-", help = "Input file path, or - for stdin")]
        input: PathBuf,
        /// Fail if any record would be skipped.
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Re-encode a layout document in canonical form.
    Normalize {
        #[arg(default_value = "-", help = "Input file path, or - for stdin")]
        input: PathBuf,
    },
    /// List the configured model types.
    Catalog {
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Preview where a click at `--point` would place a model.
    Snap {
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        point: Vec3,
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true, default_value = "0,1,0")]
        normal: Vec3,
        #[arg(long)]
        model: Option<String>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            println!("{}", output.trim_end());
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(code = err.error_code(), error = %err, "command failed");
            eprintln!("{}", crate::error::render(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, CliError> {
    let config = config::load(cli.config.as_deref())?;

    let output = match cli.command {
        Command::Report { input, format } => commands::report(&config, &read_input(&input)?, format)?,
        Command::Check { input, strict } => commands::check(&config, &read_input(&input)?, strict)?,
        Command::Normalize { input } => commands::normalize(&config, &read_input(&input)?)?,
        Command::Catalog { format } => commands::catalog(&config, format)?,
        Command::Snap { point, normal, model } => {
            format_vec3(commands::snap(&config, point, normal, model.as_deref())?)
        }
    };
    Ok(output)
}

fn read_input(path: &Path) -> Result<String, CliError> {
    let read = if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        std::fs::read_to_string(path)
    };
    read.map_err(|source| CliError::Read { path: path.to_path_buf(), source })
}
