//! Source emitter: `EmitPlan` → artifact text for one target language.
//!
//! Every target renders the same three parts in the same order: the base
//! declaration, the dispatch interface, then one declaration per variant.
pub mod java;
pub mod rust;
pub mod wrap;

use clap::ValueEnum;

use crate::error::{Error, Result};
use crate::ir::EmitPlan;

pub const DEFAULT_JAVA_PACKAGE: &str = "com.craftinginterpreters.lox";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Target {
    /// tagged enum + visitor trait (`expr.rs`)
    #[default]
    Rust,
    /// abstract class + nested visitor interface (`Expr.java`)
    Java,
    /// the emit plan itself, for tooling (`expr.json`)
    Json,
}

impl Target {
    pub fn label(self) -> &'static str {
        match self {
            Target::Rust => "rust",
            Target::Java => "java",
            Target::Json => "json",
        }
    }

    /// Artifact file name for `plan`; derived from the base name only.
    pub fn file_name(self, plan: &EmitPlan) -> String {
        match self {
            Target::Rust => format!("{}.rs", plan.base.namespace),
            Target::Java => format!("{}.java", plan.base.name),
            Target::Json => format!("{}.json", plan.base.namespace),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenSettings {
    pub target: Target,
    /// `package` line of Java artifacts; empty for the default package.
    pub java_package: String,
}

impl Default for CodegenSettings {
    fn default() -> Self {
        Self { target: Target::default(), java_package: DEFAULT_JAVA_PACKAGE.to_string() }
    }
}

pub struct Codegen {
    settings: CodegenSettings,
    out: String,
}

impl Codegen {
    pub fn new(settings: CodegenSettings) -> Self {
        Self { settings, out: String::new() }
    }
    pub fn emit(&mut self, plan: &EmitPlan) -> Result<()> {
        match self.settings.target {
            Target::Rust => rust::render(plan, &mut self.out),
            Target::Java => java::render(plan, &self.settings.java_package, &mut self.out),
            Target::Json => {
                let json = serde_json::to_string_pretty(plan).map_err(|source| Error::Serialize {
                    base: plan.base.name.clone(),
                    source,
                })?;
                line(&mut self.out, json);
                Ok(())
            }
        }
    }
    pub fn into_string(self) -> String {
        self.out
    }
}

/// Render one plan to a string.
pub fn render(plan: &EmitPlan, settings: &CodegenSettings) -> Result<String> {
    let mut cg = Codegen::new(settings.clone());
    cg.emit(plan)?;
    Ok(cg.into_string())
}

/// Reject a base or variant type spelled like one of the names a backend emits on its own.
pub(crate) fn check_type_names(plan: &EmitPlan, generated: &[&str], target: &'static str) -> Result<()> {
    let types = std::iter::once(&plan.base.name).chain(plan.variants.iter().map(|v| &v.name));
    for name in types {
        if let Some(clash) = generated.iter().find(|g| **g == name.as_str()) {
            return Err(Error::ClashesWithGenerated {
                base: plan.base.name.clone(),
                name: name.clone(),
                generated: clash.to_string(),
                target,
            });
        }
    }
    Ok(())
}

pub(crate) fn line(out: &mut String, text: impl AsRef<str>) {
    out.push_str(text.as_ref());
    out.push('\n');
}
