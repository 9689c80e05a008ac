//! CLI: `generate_ast <output directory>`
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;

use crate::codegen::{CodegenSettings, Target, DEFAULT_JAVA_PACKAGE};
use crate::table::GRAMMARS;

/// sysexits `EX_USAGE`
pub const EXIT_USAGE: u8 = 64;
/// sysexits `EX_SOFTWARE`
pub const EXIT_SOFTWARE: u8 = 70;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate the Expr and Stmt syntax tree types, one artifact per grammar
#[derive(Parser, Debug)]
#[command(name = "generate_ast", version)]
pub struct CommandLineInterface {
    /// directory the artifacts are written into (created if missing)
    output_dir: PathBuf,

    /// language of the generated source
    #[arg(long, value_enum, default_value_t = Target::Rust)]
    target: Target,

    /// `package` line for the java target (empty for none)
    #[arg(long, default_value = DEFAULT_JAVA_PACKAGE)]
    java_package: String,

    /// print the artifacts to stdout instead of writing them
    #[arg(long)]
    dry_run: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    /// Parse `std::env::args`; usage errors end the process with `EX_USAGE`.
    pub fn load() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(error) => {
                let code = match error.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                    _ => i32::from(EXIT_USAGE),
                };
                let _ = error.print();
                std::process::exit(code);
            }
        }
    }

    pub fn settings(&self) -> CodegenSettings {
        CodegenSettings { target: self.target, java_package: self.java_package.clone() }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let settings = self.settings();
        tracing::debug!(lang = settings.target.label(), dir = %self.output_dir.display(), "generating");
        for source in GRAMMARS {
            if self.dry_run {
                let (file_name, text) = crate::render_grammar(source, &settings)
                    .with_context(|| format!("generating `{}`", source.base_name))?;
                println!("// ---- {file_name}");
                print!("{text}");
                continue;
            }
            crate::define_ast(&self.output_dir, source, &settings)
                .with_context(|| format!("generating `{}`", source.base_name))?;
        }
        Ok(())
    }

    /// Run and report; the returned code is what the process should exit with.
    pub fn execute(&self) -> ExitCode {
        match self.run() {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => {
                eprintln!("{} {error:#}", "error:".red().bold());
                ExitCode::from(exit_code(&error))
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn exit_code(error: &anyhow::Error) -> u8 {
    error
        .downcast_ref::<crate::Error>()
        .map(crate::Error::exit_code)
        .unwrap_or(EXIT_SOFTWARE)
}
