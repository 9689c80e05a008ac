//! Generate a closed AST type family plus its visitor contract from compact grammar lines.
//!
//! Pipeline per grammar: [`grammar::parse`] → [`grammar::GrammarSpec::validate`]
//! → [`lower::build_plan`] → [`codegen::render`] → [`artifact::write`].
pub mod artifact;
pub mod cli;
pub mod codegen;
pub mod error;
pub mod grammar;
pub mod ir;
pub mod lower;
pub mod table;

use std::path::{Path, PathBuf};

pub use crate::codegen::{CodegenSettings, Target};
pub use crate::error::{Error, Result};
pub use crate::table::{GrammarSource, GRAMMARS};

/// Parse, validate, build and render one grammar without touching the disk.
/// Returns the artifact file name and its contents.
pub fn render_grammar(source: &GrammarSource<'_>, settings: &CodegenSettings) -> Result<(String, String)> {
    let spec = source.parse()?;
    spec.validate()?;
    let plan = lower::build_plan(&spec);
    let text = codegen::render(&plan, settings)?;
    Ok((settings.target.file_name(&plan), text))
}

/// Generate one artifact into `out_dir`. Nothing is written unless every stage succeeds.
pub fn define_ast(out_dir: &Path, source: &GrammarSource<'_>, settings: &CodegenSettings) -> Result<PathBuf> {
    let (file_name, text) = render_grammar(source, settings)?;
    artifact::write(out_dir, &file_name, &text)
}

/// Generate every grammar in order, stopping at the first failure.
/// Artifacts written before the failure are left in place.
pub fn generate_all(
    out_dir: &Path,
    sources: &[GrammarSource<'_>],
    settings: &CodegenSettings,
) -> Result<Vec<PathBuf>> {
    sources
        .iter()
        .map(|source| define_ast(out_dir, source, settings))
        .collect()
}
