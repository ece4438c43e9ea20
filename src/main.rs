use std::process::ExitCode;

use ast_gen::cli::CommandLineInterface;
use ast_gen::GenError;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let command_line_interface = match CommandLineInterface::load() {
        Ok(cli) => cli,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::from(error.exit_code());
        }
    };
    init_tracing(command_line_interface.verbose());

    match command_line_interface.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{} {error:#}", "error:".red().bold());
            let code = error.downcast_ref::<GenError>().map_or(1, GenError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}
