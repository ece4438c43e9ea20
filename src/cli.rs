//! Minimal CLI: built-in grammar → one `.rs` artifact per family
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use colored::Colorize;

use crate::error::GenError;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate visitor-style AST node types (one module per node family)
#[derive(Parser, Debug)]
#[command(name = "ast-gen", version)]
pub struct CommandLineInterface {
    /// directory the family artifacts are written into (must already exist)
    output_dir: PathBuf,

    /// print the resolved grammar model as JSON and write nothing
    #[arg(long, default_value_t = false)]
    dump_model: bool,

    /// log progress to stderr (RUST_LOG takes precedence)
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Result<Self, GenError> {
        Self::load_from(std::env::args_os())
    }

    /// Any argument error other than `--help`/`--version` is a usage error.
    pub fn load_from<I, T>(args: I) -> Result<Self, GenError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => Ok(cli),
            Err(error) if is_informational(error.kind()) => error.exit(),
            Err(_) => Err(GenError::Usage),
        }
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn run(&self) -> Result<()> {
        let decls = crate::grammar::lox();

        if self.dump_model {
            let families = crate::resolve::resolve_grammar(&decls)?;
            let model = serde_json::to_string_pretty(&families)
                .context("failed to serialize the grammar model")?;
            println!("{model}");
            return Ok(());
        }

        let written = crate::generate_all(&decls, &self.output_dir).with_context(|| {
            format!("generation into `{}` failed", self.output_dir.display())
        })?;
        for path in written {
            println!("{} {}", "wrote".green().bold(), path.display());
        }
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn is_informational(kind: ErrorKind) -> bool {
    matches!(kind, ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}
